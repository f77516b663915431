//! Enemies: shared position state and the per-tick move decision.

use std::fmt;

use pursuit_core::{Direction, LevelGrid, Marker, Point};
use pursuit_paths::{Search, SearchOutcome};

use crate::fallback;

/// Position and movement-direction hint shared by every enemy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyState {
    pub pos: Point,
    /// Direction of the last step taken (initially the spawn hint).
    pub facing: Direction,
}

impl EnemyState {
    /// Create a new state.
    pub const fn new(pos: Point, facing: Direction) -> Self {
        Self { pos, facing }
    }

    /// Move to `to`, clearing the old marker and writing the new one.
    fn relocate(&mut self, grid: &mut LevelGrid, to: Point) {
        grid.set(self.pos, Marker::Empty);
        if let Some(dir) = Direction::between(self.pos, to) {
            self.facing = dir;
        }
        self.pos = to;
        grid.set(to, Marker::Adversary);
    }

    /// Stay put, making sure the marker is where the enemy is.
    fn hold(&self, grid: &mut LevelGrid) {
        grid.set(self.pos, Marker::Adversary);
    }

    /// Greedy axis move against the live grid.
    fn fallback_move(&mut self, grid: &mut LevelGrid, target: Point) -> Move {
        match fallback::greedy_step(&*grid, self.pos, target) {
            Some(next) => {
                log::debug!("enemy at {} falls back to {next}", self.pos);
                self.relocate(grid, next);
                Move::Fallback(next)
            }
            None => {
                log::debug!("enemy at {} is blocked on both axes", self.pos);
                self.hold(grid);
                Move::Stationary
            }
        }
    }
}

/// What a single decision did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Followed a search path to this cell.
    Searched(Point),
    /// No path existed; the greedy mover entered this cell.
    Fallback(Point),
    /// Did not move.
    Stationary,
}

impl Move {
    /// The cell entered, if the enemy moved.
    pub fn destination(self) -> Option<Point> {
        match self {
            Move::Searched(p) | Move::Fallback(p) => Some(p),
            Move::Stationary => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Searched(p) => write!(f, "path {p}"),
            Move::Fallback(p) => write!(f, "fallback {p}"),
            Move::Stationary => write!(f, "stationary"),
        }
    }
}

/// Enemy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Searches for a path, falls back to greedy movement.
    Smart,
    /// Greedy movement only.
    Dumb,
}

impl EnemyKind {
    /// Create an enemy of this kind.
    pub fn spawn(self, pos: Point, facing: Direction) -> Box<dyn Enemy> {
        let state = EnemyState::new(pos, facing);
        match self {
            EnemyKind::Smart => Box::new(SmartEnemy::new(state)),
            EnemyKind::Dumb => Box::new(DumbEnemy::new(state)),
        }
    }

    /// Level-file character.
    pub const fn to_char(self) -> char {
        match self {
            EnemyKind::Smart => 'E',
            EnemyKind::Dumb => 'e',
        }
    }
}

/// Something that can decide where to move next.
pub trait Enemy: fmt::Debug {
    /// Current state.
    fn state(&self) -> &EnemyState;

    /// Variant of this enemy.
    fn kind(&self) -> EnemyKind;

    /// Move one step toward `target` on `grid`.
    ///
    /// Runs to completion. All effects are the update of the enemy's own
    /// position and of the adversary markers on `grid`; afterwards the grid
    /// holds an adversary marker exactly at [`pos`](Self::pos).
    fn decide_move(&mut self, grid: &mut LevelGrid, target: Point) -> Move;

    /// Current position.
    fn pos(&self) -> Point {
        self.state().pos
    }
}

/// Chases along a searched path; moves greedily when no path exists.
#[derive(Debug, Clone)]
pub struct SmartEnemy {
    state: EnemyState,
    search: Search,
}

impl SmartEnemy {
    pub fn new(state: EnemyState) -> Self {
        Self {
            state,
            search: Search::new(),
        }
    }
}

impl Enemy for SmartEnemy {
    fn state(&self) -> &EnemyState {
        &self.state
    }

    fn kind(&self) -> EnemyKind {
        EnemyKind::Smart
    }

    fn decide_move(&mut self, grid: &mut LevelGrid, target: Point) -> Move {
        match self.search.run(grid, self.state.pos, target) {
            SearchOutcome::Found(goal) => match self.search.arena().next_step(goal) {
                Some(next) => {
                    log::debug!(
                        "enemy at {} follows a {}-step path to {next}",
                        self.state.pos,
                        self.search.arena()[goal].cost
                    );
                    self.state.relocate(grid, next);
                    Move::Searched(next)
                }
                None => {
                    self.state.hold(grid);
                    Move::Stationary
                }
            },
            SearchOutcome::NoPath => self.state.fallback_move(grid, target),
        }
    }
}

/// Always moves greedily toward the target.
#[derive(Debug, Clone)]
pub struct DumbEnemy {
    state: EnemyState,
}

impl DumbEnemy {
    pub fn new(state: EnemyState) -> Self {
        Self { state }
    }
}

impl Enemy for DumbEnemy {
    fn state(&self) -> &EnemyState {
        &self.state
    }

    fn kind(&self) -> EnemyKind {
        EnemyKind::Dumb
    }

    fn decide_move(&mut self, grid: &mut LevelGrid, target: Point) -> Move {
        self.state.fallback_move(grid, target)
    }
}
