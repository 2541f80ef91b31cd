//! Move history with a cursor for time travel.
//!
//! The history is an ordered list of board snapshots starting from an
//! empty board, plus a cursor naming the snapshot currently shown. Both
//! live in one struct and change only through [`History::play`] and
//! [`History::jump_to`], so they cannot drift apart.

use super::action::HistoryError;
use super::invariants::{HistoryInvariants, InvariantSet, SingleStepInvariant};
use super::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Ordered board snapshots plus the active index.
///
/// Deserialized histories are checked against [`HistoryInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory")]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct StoredHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl TryFrom<StoredHistory> for History {
    type Error = HistoryError;

    fn try_from(stored: StoredHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: stored.snapshots,
            cursor: stored.cursor,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::Inconsistent(descriptions)
        })?;
        Ok(history)
    }
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Records `next` as the board after the current one.
    ///
    /// Any snapshots after the cursor are discarded first, so playing from
    /// a past position abandons the old future.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IllegalStep`] unless `next` fills exactly one
    /// empty cell of the current board with [`History::next_mark`]. The
    /// history is left unchanged.
    #[instrument(skip(self, next), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn play(&mut self, next: Board) -> Result<(), HistoryError> {
        let added = SingleStepInvariant::added_mark(self.current_board(), &next);
        if added != Some(self.next_mark()) {
            warn!(?added, "Refusing board that is not a single legal step");
            return Err(HistoryError::IllegalStep {
                move_index: self.cursor + 1,
            });
        }

        let dropped = self.snapshots.len() - (self.cursor + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding abandoned future");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        debug_assert_eq!(HistoryInvariants::check_all(self), Ok(()));
        Ok(())
    }

    /// Moves the cursor to `index` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidJumpIndex`] when `index` is past the
    /// end of the history. The cursor is left unchanged.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::InvalidJumpIndex {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// The snapshot under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Whose turn it is, derived from cursor parity.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.cursor)
    }

    /// Index of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots along the active branch.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Entries for a move list, one per snapshot.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|index| HistoryEntry::new(index, index == self.cursor))
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot index to jump to.
    index: usize,
    /// Button text.
    label: String,
    /// Whether the cursor is on this entry.
    current: bool,
}

impl HistoryEntry {
    fn new(index: usize, current: bool) -> Self {
        Self {
            index,
            label: Self::label_for(index),
            current,
        }
    }

    /// Text for the jump button at `index`.
    pub fn label_for(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }
}
