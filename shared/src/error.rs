use crate::constants::{BOARD_FULL_ERROR, EMPTY_BOARD_ERROR, GAME_OVER_ERROR};

/// Rejected game operations. Every variant is returned before any state is
/// touched, so ignoring the error is the same as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{}", BOARD_FULL_ERROR)]
    BoardFull,
    #[error("{}", EMPTY_BOARD_ERROR)]
    EmptyBoard,
    #[error("cannot undo {requested} moves, only {available} recorded")]
    InsufficientHistory { requested: usize, available: usize },
    #[error("{}", GAME_OVER_ERROR)]
    GameOver,
    #[error("invalid tile value {value} at cell {index}")]
    InvalidCell { index: usize, value: u32 },
}

impl GameError {
    /// Short text for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            GameError::InsufficientHistory { available, .. } => {
                format!("Not enough moves to undo ({} available)", available)
            }
            other => other.to_string(),
        }
    }
}
