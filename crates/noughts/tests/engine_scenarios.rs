//! End-to-end engine scenarios: turns, wins, draws, scores and history.

use noughts::{Board, GameEngine, GamePhase, GameStatus, Player, Position, Scores, Square};

fn started() -> GameEngine {
    let mut engine = GameEngine::new();
    engine.start_game();
    engine
}

fn play_all(engine: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        engine.play(cell);
    }
}

#[test]
fn test_first_move_is_x() {
    let mut engine = started();
    engine.play(0);

    assert_eq!(engine.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(engine.status().to_string(), "Next player: O");
}

#[test]
fn test_top_row_win_scores_for_x() {
    let mut engine = started();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);

    let eval = engine.evaluate();
    assert_eq!(eval.winner, Some(Player::X));
    assert_eq!(eval.winning_line.map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(engine.scores().get(Player::X), 1);
    assert_eq!(engine.scores().get(Player::O), 0);
    assert_eq!(engine.status().to_string(), "Winner: X");

    for i in 0..9 {
        assert_eq!(engine.is_winning_square(i), [0, 1, 2].contains(&i));
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = started();
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let eval = engine.evaluate();
    assert!(eval.is_draw);
    assert_eq!(eval.winner, None);
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.status().to_string(), "Draw!");
    assert_eq!(engine.scores(), &Scores::new());
    assert!((0..9).all(|i| !engine.is_winning_square(i)));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut engine = started();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.clone();

    for i in 5..9 {
        engine.play(i);
    }

    assert_eq!(engine, before);
    assert_eq!(engine.scores().get(Player::X), 1);
}

#[test]
fn test_reset_scores_after_win() {
    let mut engine = started();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset_scores();

    assert_eq!(*engine.scores().x(), 0);
    assert_eq!(*engine.scores().o(), 0);
    assert_eq!(engine.history().boards(), &[Board::new()]);
    assert_eq!(engine.current_move(), 0);
    assert_eq!(engine.phase(), GamePhase::InProgress);
}

#[test]
fn test_play_after_jump_truncates_redo_branch() {
    let mut engine = started();
    play_all(&mut engine, &[0, 4, 8]);
    let discarded = engine.history().boards()[2];

    engine.jump_to(1);
    engine.play(5);

    assert_eq!(engine.history_len(), 3);
    assert_eq!(engine.current_move(), 2);
    assert_ne!(engine.history().boards()[2], discarded);
    assert_eq!(engine.board().get(Position::MiddleRight), Square::Occupied(Player::O));
    assert!(engine.board().is_empty(Position::BottomRight));
}

#[test]
fn test_jump_to_current_changes_nothing() {
    let mut engine = started();
    play_all(&mut engine, &[4, 0, 8]);
    let before = engine.clone();

    engine.jump_to(engine.current_move());

    assert_eq!(engine, before);
    assert_eq!(engine.snapshot(), before.snapshot());
}

#[test]
fn test_score_survives_rewind() {
    let mut engine = started();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);

    engine.jump_to(2);
    assert_eq!(engine.status(), GameStatus::NextPlayer(Player::X));
    assert_eq!(engine.scores().get(Player::X), 1);

    // Replaying a different winning branch scores again.
    play_all(&mut engine, &[1, 4, 2]);
    assert_eq!(engine.status(), GameStatus::Winner(Player::X));
    assert_eq!(engine.scores().get(Player::X), 2);
}

#[test]
fn test_next_game_keeps_scores_and_phase() {
    let mut engine = started();
    play_all(&mut engine, &[3, 0, 4, 1, 8, 2]);
    assert_eq!(engine.status(), GameStatus::Winner(Player::O));

    engine.next_game();

    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.scores().get(Player::O), 1);
    assert_eq!(engine.phase(), GamePhase::InProgress);
    assert_eq!(engine.status(), GameStatus::NextPlayer(Player::X));
}

#[test]
fn test_rounds_accumulate() {
    let mut engine = started();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    engine.next_game();
    play_all(&mut engine, &[0, 3, 1, 4, 8, 5]);
    engine.next_game();
    play_all(&mut engine, &[6, 0, 7, 1, 8]);

    assert_eq!(engine.scores().get(Player::X), 2);
    assert_eq!(engine.scores().get(Player::O), 1);
}
