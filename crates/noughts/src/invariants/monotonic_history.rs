//! Monotonic history invariant: each move fills exactly one empty square.

use super::super::{Board, History, Square};
use super::Invariant;

/// Invariant: the history grows one mark at a time.
///
/// Index 0 is the empty board, and every later board differs from its
/// predecessor in exactly one square, which went from empty to occupied.
pub struct MonotonicHistoryInvariant;

impl Invariant<History> for MonotonicHistoryInvariant {
    fn holds(history: &History) -> bool {
        let boards = history.boards();

        if boards.first() != Some(&Board::new()) {
            return false;
        }

        boards.windows(2).all(|pair| {
            let changed: Vec<(Square, Square)> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after)
                .map(|(before, after)| (*before, *after))
                .collect();

            matches!(changed.as_slice(), [(Square::Empty, Square::Occupied(_))])
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square"
    }
}
