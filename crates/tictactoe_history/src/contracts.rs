//! Contract-based validation for moves.
//!
//! A move is applied only if its preconditions hold, and the resulting
//! board must differ from the original in exactly the played cell.

use super::action::MoveError;
use super::rules::evaluate;
use super::{Board, Cell, Position};
use tracing::{instrument, warn};

/// Precondition: the index names a cell on the board.
pub struct InBounds;

impl InBounds {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds { index })
    }
}

/// Precondition: nobody has won yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with the winning mark if a line is already complete.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match evaluate(board) {
            Some(mark) => Err(MoveError::GameWon(mark)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails if `pos` already holds a mark.
    #[instrument(skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: in bounds, no winner, empty cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the resolved position.
    #[instrument(skip(board))]
    pub fn check(board: &Board, index: usize) -> Result<Position, MoveError> {
        let pos = InBounds::check(index)?;
        NoWinnerYet::check(board)?;
        CellIsEmpty::check(board, pos)?;
        Ok(pos)
    }
}

/// Postcondition for placing a mark at a cell index.
pub struct MoveContract;

impl MoveContract {
    /// Checks that `after` differs from `before` only by a mark at `index`.
    pub fn holds(before: &Board, after: &Board, index: usize) -> bool {
        let changed: Vec<usize> = (0..9)
            .filter(|i| before.cell(*i) != after.cell(*i))
            .collect();
        let valid = changed == [index]
            && before.cell(index) == Some(Cell::Empty)
            && matches!(after.cell(index), Some(Cell::Marked(_)));
        if !valid {
            warn!(index, ?changed, "Move postcondition violated");
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_precondition_empty_square() {
        assert_eq!(LegalMove::check(&Board::new(), 4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let board = Board::new().apply_move(4, Mark::X).expect("legal move");
        assert_eq!(
            LegalMove::check(&board, 4),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_bounds_checked_first() {
        let board = Board::new().apply_move(4, Mark::X).expect("legal move");
        assert_eq!(
            LegalMove::check(&board, 42),
            Err(MoveError::OutOfBounds { index: 42 })
        );
    }

    #[test]
    fn test_precondition_won_board() {
        use Mark::X;
        let mut cells = [Cell::Empty; 9];
        for i in [0, 1, 2] {
            cells[i] = Cell::Marked(X);
        }
        let board = Board::from_cells(cells);
        // Winner is reported even for an occupied cell.
        assert_eq!(LegalMove::check(&board, 0), Err(MoveError::GameWon(X)));
        assert_eq!(LegalMove::check(&board, 5), Err(MoveError::GameWon(X)));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::new();
        let after = before.apply_move(2, Mark::O).expect("legal move");
        assert!(MoveContract::holds(&before, &after, 2));
    }

    #[test]
    fn test_postcondition_detects_extra_change() {
        let before = Board::new();
        let after = before
            .apply_move(2, Mark::O)
            .and_then(|b| b.apply_move(3, Mark::X))
            .expect("legal moves");
        assert!(!MoveContract::holds(&before, &after, 2));
    }
}
