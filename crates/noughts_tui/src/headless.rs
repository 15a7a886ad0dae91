//! Headless mode: replay scripted events and report the result.

use noughts::{Command, GameEngine, Player};
use tracing::{debug, info, instrument};

/// Applies `events` to a fresh engine. Rejected events are skipped.
#[instrument(skip(events), fields(count = events.len()))]
pub fn run_script(events: &[Command]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &event in events {
        if let Err(e) = engine.dispatch(event) {
            debug!(%event, error = %e, "Event ignored");
        }
    }
    info!(
        history_len = engine.history_len(),
        current_move = engine.current_move(),
        "Script finished"
    );
    engine
}

/// Board, status, scores and move position as plain text.
pub fn render_text(engine: &GameEngine) -> String {
    let scores = engine.scores();
    format!(
        "{}\n\n{}\nScore X : {}\nScore O : {}\nMove {} of {}\n",
        engine.board(),
        engine.status(),
        scores.get(Player::X),
        scores.get(Player::O),
        engine.current_move(),
        engine.history_len() - 1,
    )
}

/// The engine snapshot as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(engine: &GameEngine) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&engine.snapshot())
}
