//! Stateless UI rendering.
//!
//! Everything here reads from [`App`] and draws; nothing mutates game state.

mod board;
mod menu;
mod sidebar;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};

const GAME_HELP: &str =
    "arrows move  Enter/1-9 play  Tab moves list  n next game  r reset scores  q quit";

const FOOTER: &str = "© 2024 - 2025 DrewMic";

/// Renders whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Menu => menu::draw_menu(frame, app),
        Screen::Game => draw_game(frame, app),
    }
}

fn draw_game(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and sidebar
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(38), Constraint::Length(42)])
        .split(chunks[1]);
    board::draw_board(frame, body[0], app);
    sidebar::draw_sidebar(frame, body[1], app);

    let status = app.engine().status();
    let status_style = if status.is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(GAME_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    let footer = Paragraph::new(FOOTER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);
}
