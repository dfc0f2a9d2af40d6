//! Move list rendering.

use crate::config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::Session;

/// Renders one line per recorded board and returns where each entry was drawn.
///
/// When the list is taller than the area it scrolls so the current entry
/// stays visible. Only drawn entries are returned.
pub fn render_moves(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    theme: &Theme,
) -> Vec<(usize, Rect)> {
    let block = Block::default().borders(Borders::ALL).title("History");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let offset = scroll_offset(session.timeline().current_move(), height);

    session
        .moves()
        .into_iter()
        .skip(offset)
        .take(height)
        .enumerate()
        .map(|(line, entry)| {
            let rect = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
            let (text, style) = if entry.current {
                (
                    format!("> {}", entry.label),
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (format!("  {}", entry.label), Style::default().fg(Color::Gray))
            };
            f.render_widget(Paragraph::new(text).style(style), rect);
            (entry.step, rect)
        })
        .collect()
}

/// First entry to draw so that `current` lands in a window of `height` lines.
fn scroll_offset(current: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (current + 1).saturating_sub(height)
}
