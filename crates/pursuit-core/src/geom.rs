//! Geometry primitives: [`Point`], [`Range`] and [`Direction`].

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid position. X grows right, Y grows down (row index).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbour one step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.shift(d.x, d.y)
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal movement directions.
///
/// `Up` is the "front" of a cell (`y - 1`) and `Down` its "back" (`y + 1`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// All directions, in search expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step for this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Right => Point::new(1, 0),
            Direction::Left => Point::new(-1, 0),
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
        }
    }

    /// Direction of the orthogonal unit step `from -> to`, if it is one.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }

    /// Single-letter code used by move scripts.
    pub const fn letter(self) -> char {
        match self {
            Direction::Right => 'R',
            Direction::Left => 'L',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    /// Direction for a move-script letter, in either case.
    pub fn from_letter(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_uppercase();
        Self::ALL.into_iter().find(|dir| dir.letter() == ch)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "r" => Ok(Direction::Right),
            "left" | "l" => Ok(Direction::Left),
            "up" | "u" | "front" => Ok(Direction::Up),
            "down" | "d" | "back" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
    }

    #[test]
    fn point_orders_row_major() {
        assert!(Point::new(5, 0) < Point::new(0, 1));
        assert!(Point::new(1, 1) < Point::new(2, 1));
    }

    #[test]
    fn step_follows_screen_axes() {
        let p = Point::new(3, 3);
        assert_eq!(p.step(Direction::Right), Point::new(4, 3));
        assert_eq!(p.step(Direction::Left), Point::new(2, 3));
        assert_eq!(p.step(Direction::Up), Point::new(3, 2));
        assert_eq!(p.step(Direction::Down), Point::new(3, 4));
    }

    #[test]
    fn direction_between_unit_steps() {
        let p = Point::new(2, 2);
        for dir in Direction::ALL {
            assert_eq!(Direction::between(p, p.step(dir)), Some(dir));
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
        }
        assert_eq!(Direction::between(p, p), None);
        assert_eq!(Direction::between(p, Point::new(4, 2)), None);
        assert_eq!(Direction::between(p, Point::new(3, 3)), None);
    }

    #[test]
    fn direction_letters() {
        assert_eq!(Direction::from_letter('u'), Some(Direction::Up));
        assert_eq!(Direction::from_letter('D'), Some(Direction::Down));
        assert_eq!(Direction::from_letter('x'), None);
        assert_eq!(Direction::from_letter('.'), None);
    }

    #[test]
    fn direction_parse() {
        assert_eq!("right".parse(), Ok(Direction::Right));
        assert_eq!("L".parse(), Ok(Direction::Left));
        assert_eq!(" Up ".parse(), Ok(Direction::Up));
        assert_eq!("back".parse(), Ok(Direction::Down));
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err, ParseDirectionError("sideways".to_string()));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.len(), 6);
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(0, 0, 0, 0);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_and_direction_round_trip() {
        let p = Point::new(-3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), p);

        let json = serde_json::to_string(&Direction::Up).unwrap();
        assert_eq!(serde_json::from_str::<Direction>(&json).unwrap(), Direction::Up);
    }
}
