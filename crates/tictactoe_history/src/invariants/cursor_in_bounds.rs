//! Cursor invariant: the cursor always names an existing snapshot.

use super::super::History;
use super::Invariant;

/// Invariant: `0 <= cursor < len` and the history is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor < history.snapshots.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
