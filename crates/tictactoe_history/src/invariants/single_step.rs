//! Single-step invariant: the history starts empty and grows one mark at a time.

use super::super::{Board, Cell, History, Mark};
use super::Invariant;

/// Invariant: snapshot 0 is the empty board, and every later snapshot
/// differs from its predecessor in exactly one cell, which went from
/// empty to marked.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    /// The mark added between two boards, if exactly one empty cell was filled.
    pub(crate) fn added_mark(before: &Board, after: &Board) -> Option<Mark> {
        let mut changed = before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(b, a)| b != a);

        match (changed.next(), changed.next()) {
            (Some((Cell::Empty, Cell::Marked(mark))), None) => Some(*mark),
            _ => None,
        }
    }
}

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = &history.snapshots;
        snapshots.first().is_some_and(|first| *first == Board::new())
            && snapshots
                .windows(2)
                .all(|pair| Self::added_mark(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
