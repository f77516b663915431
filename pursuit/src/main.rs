//! Headless pursuit simulator.

use std::path::PathBuf;

use clap::Parser;
use pursuit_lib::config::{self, DEFAULT_TICKS, LevelSource, SimConfig};
use pursuit_lib::mapgen::ArenaConfig;
use pursuit_lib::sim;
use tracing_subscriber::EnvFilter;

/// Chase a player across a grid level and print every tick.
#[derive(Parser, Debug)]
#[command(name = "pursuit", version)]
struct Cli {
    /// Level file to play; a random arena is generated when omitted
    #[arg(long)]
    level: Option<PathBuf>,

    /// Seed for the generated arena
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Arena width, border included
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Arena height, border included
    #[arg(long, default_value_t = 12)]
    height: i32,

    /// Probability of an obstacle on an interior arena cell
    #[arg(long, default_value_t = 0.2)]
    density: f64,

    /// Smart enemies in the arena
    #[arg(long, default_value_t = 2)]
    smart: usize,

    /// Dumb enemies in the arena
    #[arg(long, default_value_t = 1)]
    dumb: usize,

    /// Player moves, one per tick: R, L, U, D, or . to wait
    #[arg(long, default_value = "")]
    moves: String,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u32,

    /// Print only the final grid
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<SimConfig, config::ScriptError> {
        let source = match self.level {
            Some(path) => LevelSource::File(path),
            None => LevelSource::Arena {
                seed: self.seed,
                arena: ArenaConfig {
                    width: self.width,
                    height: self.height,
                    density: self.density.clamp(0.0, 1.0),
                    smart: self.smart,
                    dumb: self.dumb,
                },
            },
        };
        Ok(SimConfig {
            source,
            moves: config::parse_moves(&self.moves)?,
            ticks: self.ticks,
            quiet: self.quiet,
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pursuit_lib=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = Cli::parse().into_config()?;
    let stdout = std::io::stdout();
    sim::run(&config, &mut stdout.lock())?;
    Ok(())
}
