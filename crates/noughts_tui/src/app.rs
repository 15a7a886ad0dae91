//! Application state and key handling.
//!
//! The app owns the engine and a little view state (cursor, focus, list
//! selections). Every game change goes through [`GameEngine::dispatch`].

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts::{Command, GameEngine, GamePhase, Player, Position};
use ratatui::widgets::ListState;
use tracing::{debug, info, instrument};

use crate::input::{digit_to_index, move_cursor};

/// Which screen is showing. Derived from the engine phase, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Start menu.
    Menu,
    /// Board, scores and move list.
    Game,
}

/// Which game-screen panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Start menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Dismiss the menu and show the board.
    StartGame,
    /// Exit.
    Quit,
}

impl MenuOption {
    /// Menu entries in display order.
    pub const ALL: [MenuOption; 2] = [MenuOption::StartGame, MenuOption::Quit];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Quit => "Quit",
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    menu_state: ListState,
    history_state: ListState,
}

impl App {
    /// Creates a new application at the start menu.
    #[instrument]
    pub fn new() -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        let mut history_state = ListState::default();
        history_state.select(Some(0));
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            menu_state,
            history_state,
        }
    }

    /// The screen implied by the engine phase.
    pub fn screen(&self) -> Screen {
        match self.engine.phase() {
            GamePhase::NotStarted => Screen::Menu,
            GamePhase::InProgress => Screen::Game,
        }
    }

    /// Short description of move `index` for the move list.
    pub fn move_label(&self, index: usize) -> String {
        let boards = self.engine.history().boards();
        if index == 0 {
            return "Game start".to_string();
        }
        let (Some(before), Some(after)) = (boards.get(index - 1), boards.get(index)) else {
            return format!("Move #{}", index);
        };
        let placed = Position::all().find(|pos| before.get(*pos) != after.get(*pos));
        match placed {
            Some(pos) => format!("Move #{}: {} at {}", index, Player::for_move(index - 1), pos),
            None => format!("Move #{}", index),
        }
    }

    /// Handles a key press and tells the loop whether to keep going.
    #[instrument(skip(self), fields(screen = ?self.screen(), focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match self.screen() {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Game => self.handle_game_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
            KeyCode::Up => {
                let i = wrap_prev(self.menu_state.selected(), MenuOption::ALL.len());
                self.menu_state.select(Some(i));
                Control::Continue
            }
            KeyCode::Down => {
                let i = wrap_next(self.menu_state.selected(), MenuOption::ALL.len());
                self.menu_state.select(Some(i));
                Control::Continue
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let idx = self.menu_state.selected().unwrap_or(0);
                match MenuOption::ALL[idx.min(MenuOption::ALL.len() - 1)] {
                    MenuOption::StartGame => {
                        self.dispatch(Command::StartGame);
                        Control::Continue
                    }
                    MenuOption::Quit => Control::Quit,
                }
            }
            _ => Control::Continue,
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('n') => self.dispatch(Command::NextGame),
            KeyCode::Char('r') => self.dispatch(Command::ResetScores),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_history_selection();
            }
            KeyCode::Char(c) if digit_to_index(c).is_some() => {
                if let Some(pos) = digit_to_index(c).and_then(Position::from_index) {
                    self.cursor = pos;
                    self.dispatch(Command::Play(pos.to_index()));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Command::Play(self.cursor.to_index())),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let len = self.engine.history_len();
        let selected = self.history_state.selected();
        match code {
            KeyCode::Up => self.history_state.select(Some(wrap_prev(selected, len))),
            KeyCode::Down => self.history_state.select(Some(wrap_next(selected, len))),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let index = selected.unwrap_or(0).min(len - 1);
                self.dispatch(Command::JumpTo(index));
            }
            _ => {}
        }
    }

    /// Sends a command to the engine; rejected commands are logged and dropped.
    fn dispatch(&mut self, command: Command) {
        match self.engine.dispatch(command) {
            Ok(()) => info!(%command, "Command applied"),
            Err(e) => debug!(%command, error = %e, "Command ignored"),
        }
        self.sync_history_selection();
    }

    fn sync_history_selection(&mut self) {
        self.history_state.select(Some(self.engine.current_move()));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_prev(selected: Option<usize>, len: usize) -> usize {
    match selected {
        Some(i) if i > 0 => i - 1,
        _ => len.saturating_sub(1),
    }
}

fn wrap_next(selected: Option<usize>, len: usize) -> usize {
    match selected {
        Some(i) if len > 0 => (i + 1) % len,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts::{GameStatus, Square};

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn started() -> App {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_menu_starts_game() {
        let mut app = App::new();
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(press(&mut app, KeyCode::Enter), Control::Continue);
        assert_eq!(app.screen(), Screen::Game);
    }

    #[test]
    fn test_menu_quit_option() {
        let mut app = App::new();
        press(&mut app, KeyCode::Down);
        assert_eq!(press(&mut app, KeyCode::Enter), Control::Quit);
        assert_eq!(app.engine().phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.menu_state().selected(), Some(1));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu_state().selected(), Some(0));
    }

    #[test]
    fn test_digit_plays_square() {
        let mut app = started();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.engine().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(*app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = started();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.engine().board().get(Position::MiddleRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.history_state().selected(), Some(1));
    }

    #[test]
    fn test_history_jump_via_move_list() {
        let mut app = started();
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::History);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine().current_move(), 1);
        assert_eq!(app.engine().history_len(), 4);
        assert_eq!(app.engine().status(), GameStatus::NextPlayer(Player::O));
    }

    #[test]
    fn test_next_and_reset_keys() {
        let mut app = started();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.engine().scores().get(Player::X), 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine().history_len(), 1);
        assert_eq!(app.engine().scores().get(Player::X), 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().scores().get(Player::X), 0);
    }

    #[test]
    fn test_quit_from_game() {
        let mut app = started();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
    }

    #[test]
    fn test_move_labels() {
        let mut app = started();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.move_label(0), "Game start");
        assert_eq!(app.move_label(1), "Move #1: X at Center");
        assert_eq!(app.move_label(2), "Move #2: O at Top-left");
    }
}
