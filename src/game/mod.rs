//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it, and tests drive it tick by tick.

pub mod cell;
pub mod config;
pub mod direction;
pub mod egg;
pub mod engine;
pub mod error;
pub mod machine;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use cell::Cell;
pub use config::{ARENA_SIZE, GameConfig, TICK_INTERVAL};
pub use direction::{Direction, Turn, propose_direction};
pub use egg::place_egg;
pub use engine::{CollisionType, TickResult, tick};
pub use error::GameError;
pub use machine::{Game, TickOutcome};
pub use state::{GameSnapshot, GameStatus, Score, Snake};
