use rand::Rng;

use super::cell::Cell;
use super::direction::Direction;
use super::egg::place_egg;
use super::state::Snake;

/// Type of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the arena
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Result of a single movement tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickResult {
    /// Snake moved one cell, length unchanged
    Continue(Snake),
    /// Snake ate the egg and grew by one.
    ///
    /// `egg` is the replacement egg; `None` means the arena is full and the
    /// game is won.
    Grow {
        snake: Snake,
        egg: Option<Cell>,
    },
    Lost(CollisionType),
}

impl TickResult {
    pub fn is_arena_full(&self) -> bool {
        matches!(self, TickResult::Grow { egg: None, .. })
    }
}

/// Advance `snake` one cell along `direction`.
///
/// The tail is dropped before the collision check, so the head may move into
/// the cell the tail is vacating this tick. When the egg is eaten the tail is
/// put back and a new egg is placed on the grown snake using `rng`.
pub fn tick<R: Rng + ?Sized>(
    snake: &Snake,
    direction: Direction,
    egg: Option<Cell>,
    size: usize,
    rng: &mut R,
) -> TickResult {
    debug_assert!(snake.len() >= 2);
    let tail = snake.tail();
    let mut body = snake.body().clone();
    body.pop_back();

    let Some(new_head) = snake.head().step(direction, size) else {
        return TickResult::Lost(CollisionType::Wall);
    };

    if body.contains(&new_head) {
        return TickResult::Lost(CollisionType::SelfCollision);
    }

    body.push_front(new_head);

    if egg == Some(new_head) {
        body.push_back(tail);
        let grown = Snake::from_moved(body, direction);
        let egg = place_egg(&grown, size, rng);
        return TickResult::Grow { snake: grown, egg };
    }

    TickResult::Continue(Snake::from_moved(body, direction))
}
