use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cell::Cell;
use super::config::{ARENA_SIZE, GameConfig, START_DIRECTION, start_cells};
use super::direction::{Direction, Turn, propose_direction};
use super::egg::place_egg;
use super::engine::{CollisionType, TickResult, tick};
use super::state::{GameSnapshot, GameStatus, Score, Snake};

/// What a call to [`Game::on_tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed
    Ignored,
    Moved,
    Ate,
    Won,
    Lost(CollisionType),
}

/// Owns one player's game: snake, egg, pending direction, status and score.
///
/// Nothing advances on its own. A scheduler calls [`Game::on_tick`] once per
/// movement interval while [`Game::status`] is `Running`.
pub struct Game<R = StdRng> {
    rng: R,
    snake: Snake,
    direction: Direction,
    egg: Option<Cell>,
    status: GameStatus,
    score: Score,
}

impl Game<StdRng> {
    /// Create an idle game, seeding egg placement from the config
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> Game<R> {
    /// Create an idle game drawing egg positions from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            snake: start_snake(),
            direction: START_DIRECTION,
            egg: None,
            status: GameStatus::Idle,
            score: Score::default(),
        }
    }

    /// Begin a new run. Does nothing while a run is in progress.
    ///
    /// Returns true if a new run started.
    pub fn start(&mut self) -> bool {
        if self.status == GameStatus::Running {
            return false;
        }

        self.snake = start_snake();
        self.direction = START_DIRECTION;
        self.score.reset_current();
        self.egg = place_egg(&self.snake, ARENA_SIZE, &mut self.rng);
        self.status = GameStatus::Running;

        tracing::info!(best_score = self.score.best, egg = ?self.egg, "game started");
        true
    }

    /// Ask the snake to turn before the next tick.
    ///
    /// Ignored unless running. A reversal onto the neck is rejected and the
    /// pending direction stays as it was.
    pub fn request_direction(&mut self, requested: Direction) -> Turn {
        if self.status != GameStatus::Running {
            return Turn::Rejected;
        }

        let turn = propose_direction(self.snake.head(), self.snake.neck(), requested);
        match turn {
            Turn::Accepted(direction) => self.direction = direction,
            Turn::Rejected => {
                tracing::debug!(?requested, heading = ?self.snake.heading(), "direction rejected");
            }
        }
        turn
    }

    /// Advance the game one movement step
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Ignored;
        }

        let result = tick(
            &self.snake,
            self.direction,
            self.egg,
            ARENA_SIZE,
            &mut self.rng,
        );

        let outcome = match result {
            TickResult::Continue(snake) => {
                self.snake = snake;
                TickOutcome::Moved
            }
            TickResult::Grow { snake, egg } => {
                self.snake = snake;
                self.egg = egg;
                self.score.increment();
                match egg {
                    Some(_) => TickOutcome::Ate,
                    None => {
                        self.finish(GameStatus::Won);
                        TickOutcome::Won
                    }
                }
            }
            TickResult::Lost(collision) => {
                self.finish(GameStatus::Lost);
                TickOutcome::Lost(collision)
            }
        };

        tracing::trace!(?outcome, head = %self.snake.head(), len = self.snake.len(), "tick");
        outcome
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.score.record_final();
        tracing::info!(
            ?status,
            score = self.score.current,
            best_score = self.score.best,
            "game over"
        );
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn egg(&self) -> Option<Cell> {
        self.egg
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score.current
    }

    pub fn best_score(&self) -> u32 {
        self.score.best
    }

    /// Direction the next tick will move in
    pub fn pending_direction(&self) -> Direction {
        self.direction
    }

    /// Owned copy of the drawable state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            arena_size: ARENA_SIZE,
            snake: self.snake.cells().collect(),
            heading: self.snake.heading(),
            egg: self.egg,
            status: self.status,
            score: self.score.current,
            best_score: self.score.best,
        }
    }

    #[cfg(test)]
    pub(crate) fn running_with(rng: R, snake: Snake, egg: Option<Cell>, score: Score) -> Self {
        Self {
            rng,
            direction: snake.heading(),
            snake,
            egg,
            status: GameStatus::Running,
            score,
        }
    }
}

fn start_snake() -> Snake {
    Snake::from_moved(VecDeque::from(start_cells()), START_DIRECTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{cell, serpentine, snake};

    fn seeded() -> Game {
        Game::new(&GameConfig::seeded(5))
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = seeded();
        assert_eq!(game.status(), GameStatus::Idle);
        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score(), 0);
        assert_eq!(game.egg(), None);
    }

    #[test]
    fn test_start() {
        let mut game = seeded();
        assert!(game.start());

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.snake(), &snake(&[(0, 1), (0, 0)]));
        assert_eq!(game.pending_direction(), Direction::Right);
        let egg = game.egg().expect("egg placed on start");
        assert!(!game.snake().contains(egg));
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut game = seeded();
        game.start();
        game.on_tick();
        let before = game.snapshot();

        assert!(!game.start());
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_idle_game_ignores_tick_and_input() {
        let mut game = seeded();
        assert_eq!(game.on_tick(), TickOutcome::Ignored);
        assert_eq!(game.request_direction(Direction::Down), Turn::Rejected);
        assert_eq!(game.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_reversal_rejected_keeps_pending() {
        let mut game = seeded();
        game.start();

        assert_eq!(game.request_direction(Direction::Left), Turn::Rejected);
        assert_eq!(game.pending_direction(), Direction::Right);

        assert_eq!(
            game.request_direction(Direction::Down),
            Turn::Accepted(Direction::Down)
        );
        // Still heading right until the next tick, so left stays a reversal
        assert_eq!(game.request_direction(Direction::Left), Turn::Rejected);
        assert_eq!(game.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_direction_change_does_not_move() {
        let mut game = Game::running_with(
            StdRng::seed_from_u64(1),
            snake(&[(0, 1), (0, 0)]),
            Some(cell(8, 8)),
            Score::default(),
        );
        let before = game.snake().clone();

        game.request_direction(Direction::Down);
        assert_eq!(game.snake(), &before);

        assert_eq!(game.on_tick(), TickOutcome::Moved);
        assert_eq!(game.snake(), &snake(&[(1, 1), (0, 1)]));
        assert_eq!(game.snake().heading(), Direction::Down);
    }

    #[test]
    fn test_eating_scores() {
        let mut game = Game::running_with(
            StdRng::seed_from_u64(1),
            snake(&[(4, 4), (4, 3)]),
            Some(cell(4, 5)),
            Score::default(),
        );

        assert_eq!(game.on_tick(), TickOutcome::Ate);
        assert_eq!(game.score(), 1);
        assert_eq!(game.snake().len(), 3);
        let egg = game.egg().unwrap();
        assert!(!game.snake().contains(egg));
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn test_loss_freezes_state_and_records_best() {
        let mut game = Game::running_with(
            StdRng::seed_from_u64(1),
            snake(&[(0, 9), (0, 8)]),
            Some(cell(5, 5)),
            Score {
                current: 4,
                best: 2,
            },
        );

        assert_eq!(game.on_tick(), TickOutcome::Lost(CollisionType::Wall));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.best_score(), 4);
        assert_eq!(game.snake(), &snake(&[(0, 9), (0, 8)]));

        let frozen = game.snapshot();
        assert_eq!(game.on_tick(), TickOutcome::Ignored);
        assert_eq!(game.request_direction(Direction::Down), Turn::Rejected);
        assert_eq!(game.snapshot(), frozen);
    }

    #[test]
    fn test_restart_after_loss_resets_score_not_best() {
        let mut game = Game::running_with(
            StdRng::seed_from_u64(1),
            snake(&[(0, 9), (0, 8)]),
            None,
            Score {
                current: 3,
                best: 0,
            },
        );
        game.on_tick();
        assert_eq!(game.status(), GameStatus::Lost);

        assert!(game.start());
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score(), 3);
        assert_eq!(game.snake(), &snake(&[(0, 1), (0, 0)]));
    }

    #[test]
    fn test_win_when_arena_fills() {
        let mut path = serpentine(ARENA_SIZE);
        let last = path.pop().unwrap();
        path.reverse();
        let full_minus_one = Snake::new(path, ARENA_SIZE).unwrap();

        let mut game = Game::running_with(
            StdRng::seed_from_u64(1),
            full_minus_one,
            Some(last),
            Score {
                current: 97,
                best: 10,
            },
        );

        assert_eq!(game.on_tick(), TickOutcome::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.egg(), None);
        assert_eq!(game.score(), 98);
        assert_eq!(game.best_score(), 98);
        assert_eq!(game.snake().len(), ARENA_SIZE * ARENA_SIZE);
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut game = seeded();
        let mut max_seen = 0;
        let mut steer = StdRng::seed_from_u64(9);

        for _ in 0..30 {
            game.start();
            while game.status() == GameStatus::Running {
                let direction = Direction::ALL[steer.gen_range(0..4)];
                game.request_direction(direction);
                let before = game.best_score();
                game.on_tick();
                assert!(game.best_score() >= before);
            }
            max_seen = max_seen.max(game.score());
            assert_eq!(game.best_score(), max_seen);
        }
    }

    #[test]
    fn test_snapshot_matches_accessors() {
        let mut game = seeded();
        game.start();
        let snap = game.snapshot();

        assert_eq!(snap.arena_size, ARENA_SIZE);
        assert_eq!(snap.snake, game.snake().cells().collect::<Vec<_>>());
        assert_eq!(snap.heading, Direction::Right);
        assert_eq!(snap.egg, game.egg());
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!(snap.score, 0);
    }
}
