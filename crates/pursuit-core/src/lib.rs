//! **pursuit-core**: Grid pursuit game (core types).
//!
//! This crate provides the foundational types shared by the search engine
//! and the game layer: geometry primitives, the closed set of cell markers,
//! and the live level grid.

pub mod geom;
pub mod grid;
pub mod marker;

pub use geom::{Direction, ParseDirectionError, Point, Range};
pub use grid::{LevelGrid, LevelGridError, MarkerGrid};
pub use marker::Marker;
