//! Full-board detection.
//!
//! The core does not report draws. A caller that wants a "Draw" label
//! combines this with [`super::evaluate`] returning `None`.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
