//! Win detection for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its mark.
fn first_line(board: &Board) -> Option<([Position; 3], Mark)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((line, mark))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark fills any row, column or diagonal,
/// `None` otherwise. A full board without a line is also `None`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Mark> {
    first_line(board).map(|(_, mark)| mark)
}

/// Returns the winning line, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    first_line(board).map(|(line, _)| line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut cells = [Cell::Empty; 9];
        for pos in positions {
            cells[pos.to_index()] = Cell::Marked(mark);
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(mark, &line);
                assert_eq!(evaluate(&board), Some(mark), "line {:?}", line);
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = [
            Cell::Marked(Mark::X),
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::X),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ];
        assert_eq!(evaluate(&Board::from_cells(cells)), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / X O O / O X X
        use Mark::{O, X};
        let cells = [X, O, X, X, O, O, O, X, X].map(Cell::Marked);
        assert_eq!(evaluate(&Board::from_cells(cells)), None);
    }
}
