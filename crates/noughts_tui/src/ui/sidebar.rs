//! Score panel and move list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use noughts::Player;

use crate::app::{App, Focus};

/// Renders scores above the move list.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    draw_scores(frame, chunks[0], app);
    draw_history(frame, chunks[1], app);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let scores = app.engine().scores();
    let text = vec![
        Line::from(format!("Score X : {}", scores.get(Player::X))),
        Line::from(format!("Score O : {}", scores.get(Player::O))),
    ];
    let panel = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Scores"));
    frame.render_widget(panel, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.engine().current_move();
    let items: Vec<ListItem> = (0..app.engine().history_len())
        .map(|i| {
            let label = app.move_label(i);
            if i == current {
                ListItem::new(format!("{} (current)", label))
                    .style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(label)
            }
        })
        .collect();

    let focused = *app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Moves"),
    );

    // Stateful either way so the list scrolls to keep the selection visible.
    let (list, mut state) = if focused {
        let list = list
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        (list, app.history_state().clone())
    } else {
        (list, ListState::default().with_selected(Some(current)))
    };
    frame.render_stateful_widget(list, area, &mut state);
}
