//! Serializable view of every outbound query.

use super::engine::GameEngine;
use super::phases::{GamePhase, GameStatus};
use super::scores::Scores;
use super::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer reads after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Board at the history cursor.
    board: Board,
    /// Winner, draw or next player.
    status: GameStatus,
    /// `status` as display text.
    status_text: String,
    /// Indices of the winning line, if any.
    winning_line: Option<[usize; 3]>,
    /// Session scores.
    scores: Scores,
    /// Session phase.
    phase: GamePhase,
    /// Number of recorded boards.
    history_len: usize,
    /// Index of the board shown.
    current_move: usize,
}

impl Snapshot {
    pub(crate) fn capture(engine: &GameEngine) -> Self {
        let status = engine.status();
        Self {
            board: *engine.board(),
            status,
            status_text: status.to_string(),
            winning_line: engine.winning_line().map(|line| line.indices()),
            scores: *engine.scores(),
            phase: engine.phase(),
            history_len: engine.history_len(),
            current_move: engine.current_move(),
        }
    }
}
