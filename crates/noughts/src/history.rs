//! Linear board history with a movable cursor.

use super::action::MoveError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Board, Player};
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, instrument};

/// Board snapshots from the empty board onward, plus the move being viewed.
///
/// Recording a board while viewing an earlier move discards everything after
/// the cursor first, like an editor dropping its redo stack.
///
/// Deserialization rejects any history that breaks the history invariants,
/// so a loaded cursor always points at a recorded board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) boards: Vec<Board>,
    pub(crate) current: usize,
}

impl History {
    /// History holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// The board at the cursor.
    pub fn current(&self) -> &Board {
        &self.boards[self.current]
    }

    /// Index of the board at the cursor.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// All recorded boards, index 0 being the empty board.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of recorded boards, including the empty one.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Player to move from the board at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current)
    }

    /// Drops boards after the cursor, appends `board` and moves the cursor to it.
    #[instrument(skip(self, board), fields(current = self.current, len = self.boards.len()))]
    pub fn record(&mut self, board: Board) {
        let discarded = self.boards.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating redo branch");
        }
        self.boards.truncate(self.current + 1);
        self.boards.push(board);
        self.current = self.boards.len() - 1;
    }

    /// Moves the cursor to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MoveOutOfRange`] if `index` is not a recorded move.
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.boards.len() {
            return Err(MoveError::MoveOutOfRange {
                index,
                len: self.boards.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Back to a single empty board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            boards: Vec<Board>,
            current: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        let history = Self {
            boards: raw.boards,
            current: raw.current,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let reasons: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
            de::Error::custom(format!("invalid history: {}", reasons.join("; ")))
        })?;
        Ok(history)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
