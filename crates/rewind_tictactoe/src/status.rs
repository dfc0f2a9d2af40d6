//! Status line derived from the viewed board.

use super::{Board, Marker};
use super::rules::calculate_winner;
use serde::{Deserialize, Serialize};

/// What the status line says about a board.
///
/// There is no draw variant: a full board without a winner still reports
/// the marker whose turn it would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The board has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Marker),
    /// The game is in progress and this marker moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Marker),
}

impl Status {
    /// Derives the status of `board` given the marker to move.
    pub fn of(board: &Board, next: Marker) -> Self {
        match calculate_winner(board) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(next),
        }
    }

    /// True once a winner exists. No further move is accepted on this board.
    pub fn is_decided(&self) -> bool {
        matches!(self, Status::Winner(_))
    }
}
