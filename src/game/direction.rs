use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction of the single step leading from `from` to `to`, if the
    /// two cells are adjacent
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| from.step(direction, usize::MAX) == Some(to))
    }
}

/// Outcome of asking the snake to turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Accepted(Direction),
    /// The request would reverse the snake onto its own neck
    Rejected,
}

/// Validate a requested direction against the heading implied by the
/// neck→head vector.
///
/// Same or orthogonal requests are accepted; the exact reverse is rejected.
pub fn propose_direction(head: Cell, neck: Cell, requested: Direction) -> Turn {
    match Direction::between(neck, head) {
        Some(heading) if heading.is_opposite(requested) => Turn::Rejected,
        _ => Turn::Accepted(requested),
    }
}
