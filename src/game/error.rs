use thiserror::Error;

/// Errors raised by the game model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A cell was requested outside the `[0, size)` range on either axis
    #[error("cell ({row}, {col}) is outside a {size}x{size} arena")]
    OutOfBounds { row: i32, col: i32, size: usize },

    /// A snake body broke one of the shape rules
    #[error("invalid snake: {0}")]
    InvalidSnake(String),
}
