//! Cursor bounds invariant.

use super::super::History;
use super::Invariant;

/// Invariant: the cursor points at a recorded board.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.current < history.boards.len()
    }

    fn description() -> &'static str {
        "Current move is within the history"
    }
}
