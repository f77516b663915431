//! Levels: a live grid, the player's starting cell and enemy spawns.
//!
//! Levels are written as ASCII text, one grid row per line:
//!
//! ```text
//! WWWWWWW
//! W.E..@W
//! W..T.eW
//! WWWWWWW
//! ```
//!
//! Marker characters are those of [`Marker::to_char`]. `E` spawns a smart
//! enemy and `e` a dumb one; both leave an adversary marker in the grid.

use std::fmt;
use std::io;
use std::path::Path;

use pursuit_core::{Direction, LevelGrid, LevelGridError, Marker, Point};

use crate::enemy::EnemyKind;

/// Where an enemy starts and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub pos: Point,
    pub kind: EnemyKind,
    pub facing: Direction,
}

/// A playable level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    number: u32,
    grid: LevelGrid,
    player: Point,
    spawns: Vec<Spawn>,
}

impl Level {
    pub(crate) fn from_parts(
        number: u32,
        grid: LevelGrid,
        player: Point,
        spawns: Vec<Spawn>,
    ) -> Self {
        Self {
            number,
            grid,
            player,
            spawns,
        }
    }

    /// Parse a level from text.
    ///
    /// Blank lines before and after the grid are ignored. Spaces inside a
    /// row are empty cells.
    pub fn parse(number: u32, text: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let rows = match (first, last) {
            (Some(a), Some(b)) => &lines[a..=b],
            _ => &[][..],
        };

        let mut markers = Vec::with_capacity(rows.len());
        let mut spawns = Vec::new();
        let mut players = Vec::new();
        for (y, line) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.trim_end_matches('\r').chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let marker = match ch {
                    'E' | 'e' => {
                        let kind = if ch == 'E' {
                            EnemyKind::Smart
                        } else {
                            EnemyKind::Dumb
                        };
                        spawns.push(Spawn {
                            pos,
                            kind,
                            facing: Direction::Down,
                        });
                        Marker::Adversary
                    }
                    // Visited marks only exist inside searches.
                    'V' => return Err(LevelError::InvalidRune { ch, pos }),
                    _ => Marker::from_char(ch).ok_or(LevelError::InvalidRune { ch, pos })?,
                };
                if marker == Marker::Player {
                    players.push(pos);
                }
                row.push(marker);
            }
            markers.push(row);
        }

        let grid = LevelGrid::from_rows(markers)?;
        let player = match players.as_slice() {
            [] => return Err(LevelError::MissingPlayer),
            [p] => *p,
            _ => return Err(LevelError::MultiplePlayers(players)),
        };
        log::debug!(
            "parsed level {number}: {}x{}, {} enemies",
            grid.width(),
            grid.height(),
            spawns.len()
        );
        Ok(Self::from_parts(number, grid, player, spawns))
    }

    /// Read and parse a level file.
    pub fn load(number: u32, path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(number, &text)
    }

    /// Level number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Starting grid, enemies and player included.
    pub fn grid(&self) -> &LevelGrid {
        &self.grid
    }

    /// Player start.
    pub fn player(&self) -> Point {
        self.player
    }

    /// Enemy spawns in row-major order.
    pub fn spawns(&self) -> &[Spawn] {
        &self.spawns
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub(crate) fn into_parts(self) -> (LevelGrid, Point, Vec<Spawn>) {
        (self.grid, self.player, self.spawns)
    }
}

impl fmt::Display for Level {
    /// Renders the level in its text format, spawn kinds included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let p = Point::new(x, y);
                match self.spawns.iter().find(|s| s.pos == p) {
                    Some(s) => write!(f, "{}", s.kind.to_char())?,
                    None => write!(f, "{}", self.grid[p])?,
                }
            }
        }
        Ok(())
    }
}

/// Errors that can occur when loading a [`Level`].
#[derive(Debug)]
pub enum LevelError {
    /// The level file could not be read.
    Io(io::Error),
    /// Rows were missing or had different widths.
    Grid(LevelGridError),
    /// A character that is neither a marker nor a spawn.
    InvalidRune { ch: char, pos: Point },
    /// No `@` in the level.
    MissingPlayer,
    /// More than one `@`; all positions are listed.
    MultiplePlayers(Vec<Point>),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "level: {e}"),
            Self::Grid(e) => write!(f, "level: {e}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "level: invalid character '{ch}' at {pos}")
            }
            Self::MissingPlayer => write!(f, "level: no player start"),
            Self::MultiplePlayers(ps) => {
                write!(f, "level: {} player starts:", ps.len())?;
                for p in ps {
                    write!(f, " {p}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LevelError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<LevelGridError> for LevelError {
    fn from(e: LevelGridError) -> Self {
        Self::Grid(e)
    }
}
