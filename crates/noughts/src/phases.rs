//! Session phase and per-board status.

use super::Player;
use serde::{Deserialize, Serialize};

/// Phase of the session.
///
/// Starts at `NotStarted` and moves to `InProgress` once; there is no way
/// back. Starting a new round keeps the session `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start menu is showing; moves are ignored.
    #[default]
    NotStarted,
    /// Moves are accepted.
    InProgress,
}

/// Status line for the current board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("Draw!")]
    Draw,
    /// Round still open; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Whether the round is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw!");
        assert_eq!(GameStatus::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_default_phase_is_not_started() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    }
}
