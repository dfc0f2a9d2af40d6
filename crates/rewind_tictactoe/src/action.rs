//! Move application for tic-tac-toe.
//!
//! A move never edits the board it is given. It either produces the next
//! snapshot or says why the move cannot be made.

use super::rules::calculate_winner;
use super::{Board, Cell, Marker, Square};
use tracing::{instrument, trace};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board already has a winner.
    #[display("Game already won by {}", _0)]
    GameDecided(Marker),

    /// The cell already holds a marker.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),
}

impl std::error::Error for MoveError {}

/// Places `marker` at `cell`, returning the resulting board.
///
/// # Errors
///
/// - [`MoveError::GameDecided`] if `board` already has a winner
/// - [`MoveError::CellOccupied`] if `cell` is not empty
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn apply_move(board: &Board, cell: Cell, marker: Marker) -> Result<Board, MoveError> {
    if let Some(winner) = calculate_winner(board) {
        return Err(MoveError::GameDecided(winner));
    }

    if !board.is_empty(cell) {
        return Err(MoveError::CellOccupied(cell));
    }

    let next = board.with(cell, Square::Occupied(marker));
    trace!(board = %next.display(), "Move applied");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_copies_board() {
        let board = Board::new().with(Cell::TopLeft, Square::Occupied(Marker::O));
        let next = apply_move(&board, Cell::Center, Marker::X).unwrap();

        for cell in Cell::ALL {
            if cell == Cell::Center {
                assert_eq!(next.get(cell), Square::Occupied(Marker::X));
            } else {
                assert_eq!(next.get(cell), board.get(cell));
            }
        }
        assert!(board.is_empty(Cell::Center));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let board = Board::new().with(Cell::Center, Square::Occupied(Marker::X));
        assert_eq!(
            apply_move(&board, Cell::Center, Marker::O),
            Err(MoveError::CellOccupied(Cell::Center))
        );
    }

    #[test]
    fn test_decided_board_rejects_every_cell() {
        let board = Board::new()
            .with(Cell::TopLeft, Square::Occupied(Marker::O))
            .with(Cell::Center, Square::Occupied(Marker::O))
            .with(Cell::BottomRight, Square::Occupied(Marker::O));

        for cell in Cell::ALL {
            assert_eq!(
                apply_move(&board, cell, Marker::X),
                Err(MoveError::GameDecided(Marker::O))
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied(Cell::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            MoveError::GameDecided(Marker::X).to_string(),
            "Game already won by X"
        );
    }
}
