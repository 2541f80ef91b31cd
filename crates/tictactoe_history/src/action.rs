//! Errors raised by move and jump intents.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Why a move intent was refused.
///
/// Illegal moves are a normal outcome of clicking around the board. The
/// caller discards the attempt and the game state stays as it was.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum MoveError {
    /// The index does not name a cell on the board.
    #[display("Cell index {} is off the board (must be 0-8)", index)]
    OutOfBounds {
        /// Offending index.
        index: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameWon(#[error(not(source))] Mark),

    /// The history refused the resulting board.
    #[display("{}", _0)]
    History(HistoryError),
}

impl From<HistoryError> for MoveError {
    fn from(e: HistoryError) -> Self {
        MoveError::History(e)
    }
}

/// Why the history refused an operation.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum HistoryError {
    /// The requested move index is not in the history.
    #[display("Move #{} does not exist (history has {} entries)", index, len)]
    InvalidJumpIndex {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// The board does not add exactly one mark for the player to move.
    #[display("Board is not a legal move #{}", move_index)]
    IllegalStep {
        /// Index the board would have occupied.
        move_index: usize,
    },

    /// Stored snapshots break the history invariants.
    #[display("Inconsistent history: {}", _0)]
    Inconsistent(#[error(not(source))] String),
}
