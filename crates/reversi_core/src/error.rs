//! Error types for board access, move application and turn sequencing.

use thiserror::Error;

use crate::types::{Move, Player};

/// Errors that can occur in the Reversi core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReversiError {
    /// The move does not capture anything for the mover, or targets an occupied cell
    #[error("Invalid move: {mv} is not legal for {player}")]
    InvalidMove { mv: Move, player: Player },

    /// Coordinates outside the 8x8 grid
    #[error("Coordinates out of range: ({row}, {col}) (must be 0-7)")]
    OutOfRange { row: usize, col: usize },

    /// Grid input that is not 8x8 or contains unknown cell characters
    #[error("Malformed board: {reason}")]
    MalformedBoard { reason: String },

    /// A move was requested for a side with no legal moves
    #[error("No legal moves available for {player}")]
    EmptyMoveSet { player: Player },

    /// A move was submitted after both sides ran out of moves
    #[error("Game is already over")]
    GameOver,
}

/// Result type alias for Reversi core operations
pub type ReversiResult<T> = Result<T, ReversiError>;
