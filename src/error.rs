//! Error types for the game core
//!
//! Every failure here is recoverable: the operation that reported it left
//! the game state exactly as it was.

use thiserror::Error;

/// Why a human move was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Square {0} is off the board")]
    OutOfRange(usize),

    #[error("Square {0} is already taken")]
    Occupied(usize),

    #[error("The game is already over")]
    GameOver,

    #[error("It is not your turn")]
    NotHumanTurn,

    #[error("The computer is thinking")]
    ComputerThinking,
}

/// Rejected history store operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No history entry {target} (history has {len} entries)")]
    OutOfRange { target: usize, len: usize },

    #[error("Square {0} is off the board")]
    InvalidPosition(usize),

    #[error("Square {0} is already taken")]
    Occupied(usize),

    #[error("Cannot move after the game has ended")]
    GameOver,
}

/// Any error raised by the game core
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("Invalid navigation: {0}")]
    InvalidNavigation(#[from] HistoryError),
}

/// Board text that could not be parsed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("Unexpected board character {0:?}")]
    InvalidChar(char),

    #[error("Expected 9 cells, found {0}")]
    WrongLength(usize),
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
