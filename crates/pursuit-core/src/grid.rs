//! The [`LevelGrid`] type: the live, fixed-size grid of [`Marker`]s.
//!
//! A level grid is owned by the game session. Renderers read it and the enemy
//! movement engine writes adversary markers into it; it is the only place an
//! adversary's position marker is persisted.

use std::fmt;
use std::ops::Index;

use crate::geom::{Point, Range};
use crate::marker::Marker;

/// Read access to a grid of markers.
///
/// Implemented by the live [`LevelGrid`] and by search snapshots, so the
/// passability rule is written once.
pub trait MarkerGrid {
    /// Marker at `p`, or `None` outside the grid.
    fn marker_at(&self, p: Point) -> Option<Marker>;

    /// Whether `p` is inside the grid and holds a passable marker.
    ///
    /// Cells past the grid edge are treated as closed, so callers never index
    /// outside the grid.
    #[inline]
    fn is_open(&self, p: Point) -> bool {
        self.marker_at(p).is_some_and(Marker::is_passable)
    }
}

/// A rectangular grid of markers with dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLevelGrid")
)]
pub struct LevelGrid {
    cells: Vec<Marker>,
    bounds: Range,
}

/// Unchecked wire form of a [`LevelGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLevelGrid {
    cells: Vec<Marker>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLevelGrid> for LevelGrid {
    type Error = LevelGridError;

    fn try_from(raw: RawLevelGrid) -> Result<Self, Self::Error> {
        if raw.bounds.min != Point::ZERO || raw.cells.len() != raw.bounds.len() {
            return Err(LevelGridError::Misaligned {
                bounds: raw.bounds,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            bounds: raw.bounds,
        })
    }
}

impl LevelGrid {
    /// Create a new grid of the given dimensions, filled with `Empty`.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Marker::Empty; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from rows of markers. Every row must have the same,
    /// non-zero width.
    pub fn from_rows(rows: Vec<Vec<Marker>>) -> Result<Self, LevelGridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LevelGridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LevelGridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn offset(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
    }

    /// Marker at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Marker> {
        self.offset(p).map(|i| self.cells[i])
    }

    /// Set the marker at `p`. No-op if `p` is outside the grid.
    pub fn set(&mut self, p: Point, marker: Marker) {
        if let Some(i) = self.offset(p) {
            self.cells[i] = marker;
        }
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|&&m| m == marker).count()
    }

    /// First position (row-major) holding `marker`.
    pub fn find(&self, marker: Marker) -> Option<Point> {
        self.iter().find(|&(_, m)| m == marker).map(|(p, _)| p)
    }

    /// All positions (row-major) holding `marker`.
    pub fn positions(&self, marker: Marker) -> Vec<Point> {
        self.iter()
            .filter(|&(_, m)| m == marker)
            .map(|(p, _)| p)
            .collect()
    }

    /// Row-major iterator over `(Point, Marker)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Marker)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Raw row-major markers.
    #[inline]
    pub fn cells(&self) -> &[Marker] {
        &self.cells
    }
}

impl MarkerGrid for LevelGrid {
    #[inline]
    fn marker_at(&self, p: Point) -> Option<Marker> {
        self.at(p)
    }
}

impl Index<Point> for LevelGrid {
    type Output = Marker;

    /// # Panics
    ///
    /// Panics if `p` is outside the grid. Valid levels are bounded by walls,
    /// so an out-of-bounds access is a caller bug.
    fn index(&self, p: Point) -> &Marker {
        match self.offset(p) {
            Some(i) => &self.cells[i],
            None => panic!("grid access at {p} outside {}", self.bounds),
        }
    }
}

impl fmt::Display for LevelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width().max(1) as usize;
        for (y, row) in self.cells.chunks(w).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for m in row {
                write!(f, "{}", m.to_char())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a [`LevelGrid`] from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelGridError {
    /// No rows, or a zero-width first row.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Cell count and bounds disagree, or the bounds do not start at the
    /// origin.
    Misaligned { bounds: Range, cells: usize },
}

impl fmt::Display for LevelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::Misaligned { bounds, cells } => {
                write!(f, "grid: {cells} cells do not fill bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for LevelGridError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Vec<Marker> {
        s.chars().map(|c| Marker::from_char(c).unwrap()).collect()
    }

    #[test]
    fn grid_new_and_at() {
        let g = LevelGrid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.at(Point::new(0, 0)), Some(Marker::Empty));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn grid_set_and_get() {
        let mut g = LevelGrid::new(4, 3);
        g.set(Point::new(2, 1), Marker::Wall);
        assert_eq!(g.at(Point::new(2, 1)), Some(Marker::Wall));
        assert_eq!(g[Point::new(2, 1)], Marker::Wall);
        // out of bounds is ignored
        g.set(Point::new(10, 10), Marker::Wall);
        assert_eq!(g.count(Marker::Wall), 1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn index_out_of_bounds_panics() {
        let g = LevelGrid::new(2, 2);
        let _m: Marker = g[Point::new(2, 0)];
    }

    #[test]
    fn from_rows_and_display() {
        let g = LevelGrid::from_rows(vec![row("WWW"), row("W@W"), row("WEW")]).unwrap();
        assert_eq!(g.find(Marker::Player), Some(Point::new(1, 1)));
        assert_eq!(g.positions(Marker::Adversary), vec![Point::new(1, 2)]);
        assert_eq!(g.to_string(), "WWW\nW@W\nWEW");
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(LevelGrid::from_rows(vec![]), Err(LevelGridError::Empty));
        assert_eq!(
            LevelGrid::from_rows(vec![row("..."), row("..")]),
            Err(LevelGridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn is_open_closes_grid_edges() {
        let mut g = LevelGrid::new(2, 1);
        g.set(Point::new(1, 0), Marker::Player);
        assert!(g.is_open(Point::new(0, 0)));
        assert!(g.is_open(Point::new(1, 0)));
        assert!(!g.is_open(Point::new(2, 0)));
        assert!(!g.is_open(Point::new(-1, 0)));
        g.set(Point::new(0, 0), Marker::Adversary);
        assert!(!g.is_open(Point::new(0, 0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = LevelGrid::new(3, 2);
        g.set(Point::new(1, 1), Marker::Door);
        let json = serde_json::to_string(&g).unwrap();
        let back: LevelGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn rejects_cells_that_do_not_fill_bounds() {
        let g = LevelGrid::new(3, 2);
        let valid = serde_json::to_value(&g).unwrap();

        let mut short = valid.clone();
        short["cells"].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<LevelGrid>(short).unwrap_err();
        assert!(err.to_string().contains("5 cells do not fill"));

        let mut shifted = valid;
        shifted["bounds"]["min"]["x"] = serde_json::json!(1);
        shifted["bounds"]["max"]["x"] = serde_json::json!(4);
        assert!(serde_json::from_value::<LevelGrid>(shifted).is_err());
    }
}
