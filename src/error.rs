//! Error types for game and engine operations

use thiserror::Error;

use crate::board::Pos;

/// Recoverable failures surfaced to the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move: cell {position} is already occupied")]
    InvalidMove { position: Pos },

    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("there is nothing left to undo")]
    NothingToUndo,

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("no empty cell is available")]
    NoMovesAvailable,

    #[error("board size {size} is out of range (must be greater than 2 and less than 15)")]
    InvalidBoardSize { size: usize },

    #[error("connections to win {connections} must be between {min} and {max}")]
    InvalidConnections {
        connections: usize,
        min: usize,
        max: usize,
    },

    #[error("cannot parse board row {row}: {reason}")]
    BoardParse { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
