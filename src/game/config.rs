use std::time::Duration;

use serde::Deserialize;

use super::cell::Cell;
use super::direction::Direction;

/// Side length of the square arena
pub const ARENA_SIZE: usize = 10;

/// Time between two movement ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(600);

/// Heading (and pending direction) of a freshly started snake
pub const START_DIRECTION: Direction = Direction::Right;

/// Cells of a freshly started snake, head first
pub const START_SNAKE: [(i32, i32); 2] = [(0, 1), (0, 0)];

/// Configuration for a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for egg placement. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with a fixed egg placement seed
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

/// The start cells decoded into the arena
pub(crate) fn start_cells() -> Vec<Cell> {
    START_SNAKE
        .iter()
        .filter_map(|&(row, col)| Cell::encode(row, col, ARENA_SIZE).ok())
        .collect()
}
