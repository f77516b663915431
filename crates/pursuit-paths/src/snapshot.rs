//! Engine-local copy of a live grid.

use pursuit_core::{LevelGrid, Marker, MarkerGrid, Point, Range};

/// An exclusively-owned copy of a [`LevelGrid`]'s markers, annotated with
/// [`Marker::Visited`] while a search runs.
///
/// Nothing written here reaches the live grid.
#[derive(Debug, Clone, Default)]
pub struct SnapshotGrid {
    cells: Vec<Marker>,
    bounds: Range,
}

impl SnapshotGrid {
    /// Copy the markers of `grid`.
    pub fn capture(grid: &LevelGrid) -> Self {
        let mut snapshot = Self::default();
        snapshot.recapture(grid);
        snapshot
    }

    /// Overwrite this snapshot with the markers of `grid`, reusing the
    /// existing allocation.
    pub fn recapture(&mut self, grid: &LevelGrid) {
        self.cells.clear();
        self.cells.extend_from_slice(grid.cells());
        self.bounds = grid.bounds();
    }

    /// The bounding range of the snapshot.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn offset(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// Mark `p` visited so it is never expanded again. No-op outside bounds.
    pub fn mark_visited(&mut self, p: Point) {
        if let Some(i) = self.offset(p) {
            self.cells[i] = Marker::Visited;
        }
    }

    /// Number of visited cells.
    pub fn visited(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Marker::Visited).count()
    }
}

impl MarkerGrid for SnapshotGrid {
    #[inline]
    fn marker_at(&self, p: Point) -> Option<Marker> {
        self.offset(p).map(|i| self.cells[i])
    }
}
