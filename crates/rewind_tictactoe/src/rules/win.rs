//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Marker, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the first line (in [`LINES`] order) holding three equal markers.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Cell; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` for the first line with three equal markers,
/// `None` otherwise. A full board without such a line is not treated
/// specially.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Marker> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).marker())
}
