use pursuit_core::{Direction, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the four orthogonal neighbors of a point in search expansion
/// order: right, left, up (front), down (back).
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `p` in expansion order, keeping
    /// only those for which `keep` returns `true`.
    pub fn orthogonal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for dir in Direction::ALL {
            let n = p.step(dir);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
