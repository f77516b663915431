use pursuit_core::{LevelGrid, MarkerGrid, Point};

use crate::arena::{NodeArena, NodeId, SearchNode};
use crate::distance::euclidean;
use crate::neighbors::Neighbors;
use crate::snapshot::SnapshotGrid;

/// Result of one [`Search::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target was selected; the id is the goal node in [`Search::arena`].
    Found(NodeId),
    /// The frontier ran dry before the target was reached.
    NoPath,
}

/// Best-first search from an adversary to a target.
///
/// Each iteration expands the frontier node with the lowest
/// `euclidean(node, target) + cost`, the first such node winning ties.
/// Cells are marked visited when discovered and never reopened, so the
/// result is a greedy best-first path: usually shortest, occasionally a
/// longer detour.
///
/// `Search` owns its arena, frontier and snapshot so that repeated runs
/// reuse their allocations.
#[derive(Debug, Clone, Default)]
pub struct Search {
    arena: NodeArena,
    frontier: Vec<NodeId>,
    snapshot: SnapshotGrid,
    nbuf: Neighbors,
    expanded: usize,
}

impl Search {
    /// Create a new search with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `grid` for a path from `from` to `to`.
    ///
    /// The live grid is only read; all visited marks go to an internal
    /// snapshot. Terminates after at most one expansion per grid cell.
    pub fn run(&mut self, grid: &LevelGrid, from: Point, to: Point) -> SearchOutcome {
        self.arena.clear();
        self.frontier.clear();
        self.expanded = 0;
        self.snapshot.recapture(grid);

        self.snapshot.mark_visited(from);
        let root = self.arena.push(SearchNode {
            pos: from,
            cost: 0,
            parent: None,
        });
        self.frontier.push(root);

        let outcome = loop {
            let Some(slot) = self.select(to) else {
                break SearchOutcome::NoPath;
            };
            let current = self.frontier.remove(slot);
            self.expanded += 1;
            let node = self.arena[current];

            if node.pos == to {
                break SearchOutcome::Found(current);
            }

            let snapshot = &self.snapshot;
            let open = self.nbuf.orthogonal(node.pos, |p| snapshot.is_open(p));
            for &np in open {
                self.snapshot.mark_visited(np);
                let id = self.arena.push(SearchNode {
                    pos: np,
                    cost: node.cost + 1,
                    parent: Some(current),
                });
                self.frontier.push(id);
            }
        };

        log::trace!(
            "search {from} -> {to}: {outcome:?} after {} expansions, {} nodes",
            self.expanded,
            self.arena.len()
        );
        outcome
    }

    /// Frontier slot of the lowest-scored node; the first minimum wins.
    fn select(&self, to: Point) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (slot, &id) in self.frontier.iter().enumerate() {
            let node = &self.arena[id];
            let score = euclidean(node.pos, to) + node.cost;
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((slot, score));
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Nodes created by the last run.
    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Number of nodes the last run selected from the frontier.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Convenience: run a search and return the first step toward `to`.
    ///
    /// `None` when there is no path or `from == to`.
    pub fn next_step(&mut self, grid: &LevelGrid, from: Point, to: Point) -> Option<Point> {
        match self.run(grid, from, to) {
            SearchOutcome::Found(goal) => self.arena.next_step(goal),
            SearchOutcome::NoPath => None,
        }
    }
}
