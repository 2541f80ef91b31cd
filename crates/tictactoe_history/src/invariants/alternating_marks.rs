//! Alternating marks invariant: X, O, X, O, ... by snapshot index.

use super::super::{History, Mark};
use super::{Invariant, SingleStepInvariant};

/// Invariant: the mark added by snapshot `i` belongs to the player whose
/// turn it was at `i - 1`, so X always opens and the marks alternate.
pub struct AlternatingMarksInvariant;

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots
            .windows(2)
            .enumerate()
            .all(|(move_index, pair)| {
                SingleStepInvariant::added_mark(&pair[0], &pair[1])
                    .is_none_or(|mark| mark == Mark::for_move(move_index))
            })
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...) starting with X"
    }
}
