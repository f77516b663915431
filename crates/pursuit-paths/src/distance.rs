use pursuit_core::Point;

/// Truncated straight-line (Euclidean) distance between two points.
///
/// Never exceeds the orthogonal step distance, so it is admissible as a
/// search heuristic.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    ((dx * dx + dy * dy) as f64).sqrt() as i32
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_truncates() {
        let o = Point::ZERO;
        assert_eq!(euclidean(o, o), 0);
        assert_eq!(euclidean(o, Point::new(3, 4)), 5);
        // sqrt(17) = 4.12
        assert_eq!(euclidean(o, Point::new(4, 1)), 4);
        // sqrt(2) = 1.41
        assert_eq!(euclidean(Point::new(2, 2), Point::new(1, 1)), 1);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for x in -6..=6 {
            for y in -6..=6 {
                let p = Point::new(x, y);
                assert!(euclidean(Point::ZERO, p) <= manhattan(Point::ZERO, p));
                assert!(euclidean(Point::ZERO, p) >= 0);
            }
        }
    }
}
