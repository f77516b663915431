//! Adversary search for grid pursuit games.
//!
//! Given a live [`LevelGrid`](pursuit_core::LevelGrid), an adversary position
//! and a target, [`Search`] runs a best-first search over a private
//! [`SnapshotGrid`] and records every discovered cell in a [`NodeArena`].
//! The arena then yields the adversary's next step
//! ([`NodeArena::next_step`]) or the whole route ([`NodeArena::path`]).
//!
//! Scoring uses the truncated [`euclidean`] distance plus the step cost.
//! Nodes are never reopened, so routes are greedy rather than guaranteed
//! shortest.

mod arena;
mod distance;
mod neighbors;
mod reconstruct;
mod search;
mod snapshot;

pub use arena::{NodeArena, NodeId, SearchNode};
pub use distance::{euclidean, manhattan};
pub use neighbors::Neighbors;
pub use search::{Search, SearchOutcome};
pub use snapshot::SnapshotGrid;
