//! UI rendering using ratatui.
//!
//! Rendering is stateless: it reads the [`App`] and reports where it put
//! clickable things so the next mouse event can be resolved.

mod board;
mod moves;

use crate::app::{App, HitMap};
use crate::config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use moves::render_moves;

/// Draws the whole screen and returns the clickable areas.
pub fn draw(f: &mut Frame, app: &App, theme: &Theme) -> HitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(theme.title.as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(20)])
        .split(chunks[1]);

    let cells = render_board(f, body[0], app, theme);
    let moves = render_moves(f, body[1], app.session(), theme);

    let status = Paragraph::new(app.session().status().to_string())
        .style(Style::default().fg(theme.highlight))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "Click or 1-9/arrows+Enter: play | ,/. Home/End: history | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    HitMap { cells, moves }
}
