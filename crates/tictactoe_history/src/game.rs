//! Game facade exposed to the presentation layer.
//!
//! The presentation layer reads a [`GameView`] after every intent and
//! forwards cell and jump clicks through [`Game::request_move`] and
//! [`Game::request_jump`].

use super::action::{HistoryError, MoveError};
use super::history::{History, HistoryEntry};
use super::rules::{evaluate, winning_line};
use super::{Board, Mark, Position};
use derive_getters::Getters;
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status line derived from the current board and cursor.
///
/// Draws are not distinguished from ongoing games here; see
/// [`Board::is_full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, derive_more::Display)]
pub enum Status {
    /// A line has been completed.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No winner yet; this mark moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Read-only snapshot of everything needed to render the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema, new)]
pub struct GameView {
    /// Board under the cursor.
    board: Board,
    /// Cursor into the history.
    move_index: usize,
    /// Number of snapshots, including the start.
    history_length: usize,
    /// Derived status line.
    status: Status,
}

/// Tic-tac-toe game with time travel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: History,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Builds a game by feeding cell intents in order.
    ///
    /// Illegal intents are skipped, exactly as a click on an occupied cell
    /// would be.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        let mut game = Self::new();
        for &cell in cells {
            // Rejections are already logged by request_move.
            let _ = game.request_move(cell);
        }
        game
    }

    /// Returns the observable state.
    pub fn state(&self) -> GameView {
        GameView::new(
            *self.current_board(),
            self.history.cursor(),
            self.history.len(),
            self.status(),
        )
    }

    /// Handles a click on a cell.
    ///
    /// # Errors
    ///
    /// Returns why the move was refused. The game is unchanged in that case
    /// and callers are expected to ignore the error.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn request_move(&mut self, cell_index: usize) -> Result<(), MoveError> {
        let mark = self.history.next_mark();
        match self.current_board().apply_move(cell_index, mark) {
            Ok(next) => {
                self.history.play(next)?;
                if let Some(winner) = evaluate(self.current_board()) {
                    info!(%winner, "Game won");
                }
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "Ignoring illegal move");
                Err(e)
            }
        }
    }

    /// Handles a click on a move-list entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidJumpIndex`] for an index the move list
    /// never offered. The game is unchanged in that case.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn request_jump(&mut self, move_index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(move_index)
    }

    /// Board under the cursor.
    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    /// Whose turn it is.
    pub fn next_mark(&self) -> Mark {
        self.history.next_mark()
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        evaluate(self.current_board())
    }

    /// Completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current_board())
    }

    /// True when the current board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.current_board().is_full()
    }

    /// Derived status line.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Move-list entries.
    pub fn moves(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    /// The underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }
}
