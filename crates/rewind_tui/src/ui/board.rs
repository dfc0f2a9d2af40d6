//! Tic-tac-toe board rendering.

use crate::app::App;
use crate::config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Cell, Marker, Square, winning_line};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// Renders the board and returns where each cell was drawn.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, theme: &Theme) -> Vec<(Cell, Rect)> {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let winning = winning_line(app.session().board());
    let mut drawn = Vec::with_capacity(9);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(cell) = Cell::from_row_col(row, col) {
                let highlighted = winning.is_some_and(|line| line.contains(&cell));
                render_cell(f, cell_area, app, theme, cell, highlighted);
                drawn.push((cell, cell_area));
            }
        }
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);

    drawn
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, theme: &Theme, cell: Cell, winning: bool) {
    let (symbol, mut style) = match app.session().board().get(cell) {
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(marker) => {
            let color = match marker {
                Marker::X => theme.x,
                Marker::O => theme.o,
            };
            (
                marker.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    if winning {
        style = style.bg(theme.highlight).fg(Color::Black);
    }
    if cell == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Leading newline centers the marker in a 3-line cell.
    let paragraph = Paragraph::new(format!("\n{}", symbol))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 40, 20);
        let centered = center_rect(area, 38, 11);
        assert_eq!(centered, Rect::new(1, 4, 38, 11));
    }
}
