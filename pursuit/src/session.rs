//! A running chase: the live grid, the player and the enemies.

use std::fmt;

use pursuit_core::{Direction, LevelGrid, Marker, Point};

use crate::enemy::{Enemy, Move};
use crate::level::Level;

/// Whether the chase is still on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Caught,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Running => write!(f, "running"),
            Status::Caught => write!(f, "caught"),
        }
    }
}

/// Result of [`GameSession::move_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    Moved(Point),
    Blocked,
    Caught,
}

/// What happened during one [`GameSession::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1.
    pub tick: u32,
    /// One entry per enemy that acted, in processing order.
    pub moves: Vec<Move>,
    /// Index of the enemy that reached the player, if any.
    pub caught_by: Option<usize>,
}

/// A level being played.
#[derive(Debug)]
pub struct GameSession {
    grid: LevelGrid,
    player: Point,
    enemies: Vec<Box<dyn Enemy>>,
    status: Status,
    ticks: u32,
}

impl GameSession {
    /// Start a session, spawning the level's enemies in order.
    pub fn new(level: Level) -> Self {
        let (grid, player, spawns) = level.into_parts();
        let enemies = spawns
            .into_iter()
            .map(|s| s.kind.spawn(s.pos, s.facing))
            .collect();
        Self {
            grid,
            player,
            enemies,
            status: Status::Running,
            ticks: 0,
        }
    }

    /// Move the player one cell. Only empty cells can be entered; walking
    /// into an enemy ends the chase.
    pub fn move_player(&mut self, dir: Direction) -> PlayerMove {
        if self.status == Status::Caught {
            return PlayerMove::Caught;
        }
        let next = self.player.step(dir);
        match self.grid.at(next) {
            Some(Marker::Empty) => {
                self.grid.set(self.player, Marker::Empty);
                self.grid.set(next, Marker::Player);
                self.player = next;
                PlayerMove::Moved(next)
            }
            Some(Marker::Adversary) => {
                log::info!("player walked into an enemy at {next}");
                self.status = Status::Caught;
                PlayerMove::Caught
            }
            _ => PlayerMove::Blocked,
        }
    }

    /// Let every enemy act once, in spawn order.
    ///
    /// Each enemy sees the grid as left by the enemies before it. Processing
    /// stops as soon as one of them reaches the player. Once the player is
    /// caught, ticks do nothing.
    pub fn tick(&mut self) -> TickReport {
        if self.status == Status::Caught {
            return TickReport {
                tick: self.ticks,
                moves: Vec::new(),
                caught_by: None,
            };
        }
        self.ticks += 1;
        let mut moves = Vec::with_capacity(self.enemies.len());
        let mut caught_by = None;
        for (i, enemy) in self.enemies.iter_mut().enumerate() {
            let mv = enemy.decide_move(&mut self.grid, self.player);
            moves.push(mv);
            if enemy.pos() == self.player {
                caught_by = Some(i);
                break;
            }
        }
        if let Some(i) = caught_by {
            log::info!(
                "tick {}: {:?} enemy {i} caught the player at {}",
                self.ticks,
                self.enemies[i].kind(),
                self.player
            );
            self.status = Status::Caught;
        }
        TickReport {
            tick: self.ticks,
            moves,
            caught_by,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of ticks played.
    pub fn tick_count(&self) -> u32 {
        self.ticks
    }

    /// The live grid.
    pub fn grid(&self) -> &LevelGrid {
        &self.grid
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn enemies(&self) -> &[Box<dyn Enemy>] {
        &self.enemies
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::mapgen::{ArenaConfig, generate_arena};

    fn session(text: &str) -> GameSession {
        GameSession::new(Level::parse(1, text).unwrap())
    }

    #[test]
    fn enemy_walks_down_corridor_and_catches() {
        let mut s = session("WWWWWW\nWE..@W\nWWWWWW");
        for x in 2..=3 {
            let report = s.tick();
            assert_eq!(report.moves, vec![Move::Searched(Point::new(x, 1))]);
            assert_eq!(report.caught_by, None);
            assert_eq!(s.status(), Status::Running);
        }
        let report = s.tick();
        assert_eq!(report.tick, 3);
        assert_eq!(report.caught_by, Some(0));
        assert_eq!(s.status(), Status::Caught);
        assert_eq!(s.grid()[Point::new(4, 1)], Marker::Adversary);

        // Nothing happens after the catch.
        let report = s.tick();
        assert!(report.moves.is_empty());
        assert_eq!(s.tick_count(), 3);
        assert_eq!(s.move_player(Direction::Left), PlayerMove::Caught);
    }

    #[test]
    fn enemies_act_in_order_and_see_earlier_moves() {
        let mut s = session("WWWWWWW\nWEE..@W\nWWWWWWW");
        // The first enemy is boxed in by the second one.
        let report = s.tick();
        assert_eq!(
            report.moves,
            vec![Move::Stationary, Move::Searched(Point::new(3, 1))]
        );
        // Now the cell ahead of it is free.
        let report = s.tick();
        assert_eq!(report.moves[0], Move::Searched(Point::new(2, 1)));
    }

    #[test]
    fn player_moves_only_onto_empty_cells() {
        let mut s = session("WWWWW\nW@.TW\nW...W\nWWWEW");
        assert_eq!(s.move_player(Direction::Up), PlayerMove::Blocked);
        assert_eq!(
            s.move_player(Direction::Right),
            PlayerMove::Moved(Point::new(2, 1))
        );
        assert_eq!(s.grid()[Point::new(1, 1)], Marker::Empty);
        assert_eq!(s.grid()[Point::new(2, 1)], Marker::Player);
        assert_eq!(s.move_player(Direction::Right), PlayerMove::Blocked);
        assert_eq!(
            s.move_player(Direction::Down),
            PlayerMove::Moved(Point::new(2, 2))
        );
        assert_eq!(
            s.move_player(Direction::Right),
            PlayerMove::Moved(Point::new(3, 2))
        );
        assert_eq!(s.move_player(Direction::Down), PlayerMove::Caught);
        assert_eq!(s.status(), Status::Caught);
    }

    #[test]
    fn markers_track_enemies_through_a_chase() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..10 {
            let lvl = generate_arena(&ArenaConfig::default(), &mut rng);
            let mut s = GameSession::new(lvl);
            for _ in 0..40 {
                if s.status() == Status::Caught {
                    break;
                }
                let dir = Direction::ALL[rng.random_range(0..4)];
                s.move_player(dir);
                s.tick();
                let mut positions: Vec<_> = s.enemies().iter().map(|e| e.pos()).collect();
                positions.sort();
                assert_eq!(s.grid().positions(Marker::Adversary), positions);
                if s.status() == Status::Running {
                    assert_eq!(s.grid()[s.player()], Marker::Player);
                }
            }
        }
    }
}
