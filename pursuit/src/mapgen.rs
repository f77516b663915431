//! Random arena generation.

use pursuit_core::{Direction, LevelGrid, Marker, Point};
use pursuit_paths::manhattan;
use rand::Rng;

use crate::enemy::EnemyKind;
use crate::level::{Level, Spawn};

/// Interior obstacle mix. Walls are drawn twice as often as the rest.
const OBSTACLES: [Marker; 5] = [
    Marker::Wall,
    Marker::Wall,
    Marker::Crate,
    Marker::Trap,
    Marker::Pit,
];

/// Minimum Manhattan distance between the player and an enemy spawn.
pub const MIN_SPAWN_DISTANCE: i32 = 2;

/// Parameters for [`generate_arena`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    /// Width including the border walls.
    pub width: i32,
    /// Height including the border walls.
    pub height: i32,
    /// Probability that an interior cell holds an obstacle.
    pub density: f64,
    /// Number of smart enemies.
    pub smart: usize,
    /// Number of dumb enemies.
    pub dumb: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 12,
            density: 0.2,
            smart: 2,
            dumb: 1,
        }
    }
}

/// Generate a walled arena with random obstacles, a player and enemies.
///
/// Smart enemies are placed before dumb ones. If the arena runs out of free
/// cells far enough from the player, fewer enemies are placed. The result
/// only depends on `cfg` and the state of `rng`.
pub fn generate_arena(cfg: &ArenaConfig, rng: &mut impl Rng) -> Level {
    let width = cfg.width.max(3);
    let height = cfg.height.max(3);
    let mut grid = LevelGrid::new(width, height);

    for p in grid.bounds().iter() {
        let border = p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1;
        if border {
            grid.set(p, Marker::Wall);
        } else if rng.random::<f64>() < cfg.density {
            grid.set(p, OBSTACLES[rng.random_range(0..OBSTACLES.len())]);
        }
    }

    let mut free = grid.positions(Marker::Empty);
    if free.is_empty() {
        // Dense arenas may leave no room; clear the first interior cell.
        free.push(Point::new(1, 1));
        grid.set(Point::new(1, 1), Marker::Empty);
    }
    let player = free.swap_remove(rng.random_range(0..free.len()));
    grid.set(player, Marker::Player);

    free.retain(|&p| manhattan(p, player) >= MIN_SPAWN_DISTANCE);
    let kinds = std::iter::repeat_n(EnemyKind::Smart, cfg.smart)
        .chain(std::iter::repeat_n(EnemyKind::Dumb, cfg.dumb));
    let mut spawns = Vec::with_capacity(cfg.smart + cfg.dumb);
    for kind in kinds {
        if free.is_empty() {
            log::warn!(
                "arena {width}x{height}: room for only {} of {} enemies",
                spawns.len(),
                cfg.smart + cfg.dumb
            );
            break;
        }
        let pos = free.swap_remove(rng.random_range(0..free.len()));
        grid.set(pos, Marker::Adversary);
        spawns.push(Spawn {
            pos,
            kind,
            facing: Direction::Down,
        });
    }
    // Session order is row-major, as for parsed levels.
    spawns.sort_by_key(|s| s.pos);

    log::debug!(
        "generated {width}x{height} arena: player at {player}, {} enemies",
        spawns.len()
    );
    Level::from_parts(0, grid, player, spawns)
}
