//! Win tally across rounds.

use super::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per player for the session.
///
/// Only [`Scores::reset`] lowers a count; history navigation never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Scores {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
}

impl Scores {
    /// Zeroed scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        info!(x = self.x, o = self.o, "Score updated");
    }

    /// Zeroes both counts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scores::new();
        scores.record_win(Player::X);
        scores.record_win(Player::X);
        scores.record_win(Player::O);
        assert_eq!(scores.get(Player::X), 2);
        assert_eq!(*scores.o(), 1);

        scores.reset();
        assert_eq!(scores, Scores::new());
    }
}
