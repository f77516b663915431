//! Simulation settings.
//!
//! [`SimConfig`] is plain data; the binary fills it from the command line.

use std::fmt;
use std::path::PathBuf;

use pursuit_core::Direction;

use crate::mapgen::ArenaConfig;

/// Default number of ticks to simulate.
pub const DEFAULT_TICKS: u32 = 50;

/// Where the level comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelSource {
    /// A level text file.
    File(PathBuf),
    /// A generated arena.
    Arena { seed: u64, arena: ArenaConfig },
}

/// Everything a simulation run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub source: LevelSource,
    /// Player moves, one per tick; `None` waits. The player waits once the
    /// script runs out.
    pub moves: Vec<Option<Direction>>,
    pub ticks: u32,
    /// Only print the final grid.
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            source: LevelSource::Arena {
                seed: 0,
                arena: ArenaConfig::default(),
            },
            moves: Vec::new(),
            ticks: DEFAULT_TICKS,
            quiet: false,
        }
    }
}

/// Parse a player move script: `R`, `L`, `U`, `D` (any case) move, `.`
/// waits. Whitespace is ignored.
pub fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>, ScriptError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(index, ch)| match ch {
            '.' => Ok(None),
            _ => Direction::from_letter(ch)
                .map(Some)
                .ok_or(ScriptError { ch, index }),
        })
        .collect()
}

/// An unknown character in a move script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub ch: char,
    /// Position among the non-whitespace characters.
    pub index: usize,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move script: unknown move '{}' at {} (expected R, L, U, D or .)",
            self.ch, self.index
        )
    }
}

impl std::error::Error for ScriptError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_script() {
        assert_eq!(
            parse_moves("Rr .\nuD").unwrap(),
            vec![
                Some(Direction::Right),
                Some(Direction::Right),
                None,
                Some(Direction::Up),
                Some(Direction::Down),
            ]
        );
        assert!(parse_moves("").unwrap().is_empty());
    }

    #[test]
    fn unknown_move_is_reported() {
        let err = parse_moves("RL x").unwrap_err();
        assert_eq!(err, ScriptError { ch: 'x', index: 2 });
        assert_eq!(
            err.to_string(),
            "move script: unknown move 'x' at 2 (expected R, L, U, D or .)"
        );
    }

    #[test]
    fn default_runs_a_generated_arena() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.ticks, DEFAULT_TICKS);
        assert!(matches!(cfg.source, LevelSource::Arena { seed: 0, .. }));
    }
}
