//! Tic-tac-toe game state with move history and time travel.
//!
//! The crate is the whole state-management core of a two-mark (X/O)
//! tic-tac-toe board: a pure winner evaluator, an immutable board model,
//! and a history of snapshots with a cursor that can jump back to any
//! earlier move. Rendering is left to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Game, Mark, Status};
//!
//! let mut game = Game::new();
//! game.request_move(0).unwrap();
//! assert_eq!(game.status(), Status::NextPlayer(Mark::O));
//!
//! // Occupied cells are refused and nothing changes.
//! assert!(game.request_move(0).is_err());
//! assert_eq!(*game.state().history_length(), 2);
//!
//! // Jump back to the start and branch off.
//! game.request_jump(0).unwrap();
//! game.request_move(4).unwrap();
//! assert_eq!(*game.state().history_length(), 2);
//! ```

#![warn(missing_docs)]

mod action;
mod contracts;
mod game;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{HistoryError, MoveError};
pub use contracts::{CellIsEmpty, InBounds, LegalMove, MoveContract, NoWinnerYet};
pub use game::{Game, GameView, Status};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, Cell, Mark};
