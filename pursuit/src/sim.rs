//! Headless simulation: load a level, play a scripted chase, print grids.

use std::fmt;
use std::io::{self, Write};

use pursuit_core::{Direction, Point};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{LevelSource, SimConfig};
use crate::level::{Level, LevelError};
use crate::mapgen::generate_arena;
use crate::session::{GameSession, PlayerMove, Status, TickReport};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSummary {
    pub ticks: u32,
    pub status: Status,
    pub player: Point,
}

impl fmt::Display for SimSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} ticks, player at {}",
            self.status, self.ticks, self.player
        )
    }
}

/// Load or generate the level a config asks for.
pub fn load_level(source: &LevelSource) -> Result<Level, LevelError> {
    match source {
        LevelSource::File(path) => Level::load(1, path),
        LevelSource::Arena { seed, arena } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            Ok(generate_arena(arena, &mut rng))
        }
    }
}

/// Play `session` for up to `ticks` ticks. Each tick the player makes the
/// next scripted move, then the enemies act. `on_tick` sees the session
/// after every tick.
pub fn play<F>(
    session: &mut GameSession,
    moves: &[Option<Direction>],
    ticks: u32,
    mut on_tick: F,
) -> io::Result<()>
where
    F: FnMut(&GameSession, &TickReport) -> io::Result<()>,
{
    for i in 0..ticks as usize {
        if let Some(dir) = moves.get(i).copied().flatten() {
            match session.move_player(dir) {
                PlayerMove::Moved(p) => log::trace!("player moves {dir} to {p}"),
                PlayerMove::Blocked => log::debug!("player move {dir} blocked"),
                PlayerMove::Caught => {}
            }
        }
        if session.status() == Status::Caught {
            break;
        }
        let report = session.tick();
        on_tick(session, &report)?;
        if session.status() == Status::Caught {
            break;
        }
    }
    Ok(())
}

/// Run a whole simulation, writing grids to `out`.
pub fn run(config: &SimConfig, out: &mut impl Write) -> Result<SimSummary, SimError> {
    let level = load_level(&config.source)?;
    log::info!(
        "level {}: {}x{}, {} enemies",
        level.number(),
        level.width(),
        level.height(),
        level.spawns().len()
    );
    let mut session = GameSession::new(level);
    if !config.quiet {
        writeln!(out, "tick 0\n{}\n", session.grid())?;
    }

    let quiet = config.quiet;
    play(&mut session, &config.moves, config.ticks, |s, report| {
        if quiet {
            return Ok(());
        }
        write!(out, "tick {}:", report.tick)?;
        for mv in &report.moves {
            write!(out, " {mv};")?;
        }
        writeln!(out, "\n{}\n", s.grid())
    })?;

    let summary = SimSummary {
        ticks: session.tick_count(),
        status: session.status(),
        player: session.player(),
    };
    if quiet {
        writeln!(out, "{}", session.grid())?;
    }
    writeln!(out, "{summary}")?;
    Ok(summary)
}

/// Errors from [`run`].
#[derive(Debug)]
pub enum SimError {
    Level(LevelError),
    Io(io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Level(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LevelError> for SimError {
    fn from(e: LevelError) -> Self {
        Self::Level(e)
    }
}

impl From<io::Error> for SimError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
