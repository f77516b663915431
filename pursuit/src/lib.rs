//! **pursuit**: enemies that chase a player across a grid level.
//!
//! Smart enemies follow a best-first search computed each tick
//! ([`pursuit_paths::Search`]) and fall back to greedy axis movement when the
//! player is unreachable; dumb enemies only move greedily. A
//! [`GameSession`](session::GameSession) owns the live grid and runs the
//! enemies in spawn order, and [`sim`] drives sessions headlessly.

pub mod config;
pub mod enemy;
pub mod fallback;
pub mod level;
pub mod mapgen;
pub mod session;
pub mod sim;

pub use config::{LevelSource, SimConfig};
pub use enemy::{DumbEnemy, Enemy, EnemyKind, EnemyState, Move, SmartEnemy};
pub use level::{Level, LevelError, Spawn};
pub use mapgen::{ArenaConfig, generate_arena};
pub use session::{GameSession, PlayerMove, Status, TickReport};
pub use sim::{SimError, SimSummary};
