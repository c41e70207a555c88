use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::direction::Direction;
use super::error::GameError;

/// The snake in the game
///
/// Head first, tail last. Every snake holds at least two distinct, pairwise
/// adjacent cells, and `heading` always matches the neck→head step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
}

impl Snake {
    /// Create a snake from its cells, head first
    pub fn new(cells: Vec<Cell>, size: usize) -> Result<Self, GameError> {
        if cells.len() < 2 {
            return Err(GameError::InvalidSnake(format!(
                "needs at least 2 cells, got {}",
                cells.len()
            )));
        }
        if cells.len() > size * size {
            return Err(GameError::InvalidSnake(format!(
                "{} cells do not fit a {size}x{size} arena",
                cells.len()
            )));
        }
        if let Some(cell) = cells.iter().find(|c| c.row() >= size || c.col() >= size) {
            let reason = format!("{cell} is outside the arena");
            return Err(GameError::InvalidSnake(reason));
        }

        let mut seen = HashSet::with_capacity(cells.len());
        if let Some(cell) = cells.iter().find(|c| !seen.insert(**c)) {
            return Err(GameError::InvalidSnake(format!("{cell} appears twice")));
        }
        if let Some(pair) = cells.windows(2).find(|pair| !pair[0].is_adjacent(pair[1])) {
            return Err(GameError::InvalidSnake(format!(
                "{} and {} are not adjacent",
                pair[0], pair[1]
            )));
        }

        let Some(heading) = Direction::between(cells[1], cells[0]) else {
            let reason = "head and neck are not adjacent".to_string();
            return Err(GameError::InvalidSnake(reason));
        };

        Ok(Self {
            body: cells.into(),
            heading,
        })
    }

    /// Assemble a snake the engine has already moved legally
    pub(crate) fn from_moved(body: VecDeque<Cell>, heading: Direction) -> Self {
        debug_assert!(body.len() >= 2);
        debug_assert_eq!(Direction::between(body[1], body[0]), Some(heading));
        Self { body, heading }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the cell right behind the head
    pub fn neck(&self) -> Cell {
        self.body[1]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Direction of the last move, i.e. neck→head
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake never has fewer than two cells
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    /// Message shown to the player for a finished game
    pub fn result_message(self) -> Option<&'static str> {
        match self {
            GameStatus::Won => Some("You win"),
            GameStatus::Lost => Some("You lose, try again"),
            GameStatus::Idle | GameStatus::Running => None,
        }
    }
}

/// Current score and best score across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32,
    pub best: u32,
}

impl Score {
    pub fn reset_current(&mut self) {
        self.current = 0;
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    /// Fold the finished run into the best score
    pub fn record_final(&mut self) {
        if self.current > self.best {
            self.best = self.current;
        }
    }
}

/// Read-only copy of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub arena_size: usize,
    /// Snake cells, head first
    pub snake: Vec<Cell>,
    pub heading: Direction,
    pub egg: Option<Cell>,
    pub status: GameStatus,
    pub score: u32,
    pub best_score: u32,
}
