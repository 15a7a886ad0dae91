//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{History, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// Board `i` holds `ceil(i / 2)` X marks and `floor(i / 2)` O marks, so X is
/// never behind O and never more than one ahead.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history.boards().iter().enumerate().all(|(i, board)| {
            board.count(Player::X) == i.div_ceil(2) && board.count(Player::O) == i / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
