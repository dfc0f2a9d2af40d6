//! Start invariant: the first recorded board is empty.

use super::super::{Board, Timeline};
use super::Invariant;

/// Invariant: `history[0]` is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<Timeline> for StartsEmptyInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Marker, Square};

    #[test]
    fn test_new_timeline_holds() {
        assert!(StartsEmptyInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let start = Board::new().with(Cell::TopLeft, Square::Occupied(Marker::O));
        assert!(!StartsEmptyInvariant::holds(&Timeline::from_parts(vec![start], 0)));
    }

    #[test]
    fn test_empty_history_violates() {
        assert!(!StartsEmptyInvariant::holds(&Timeline::from_parts(Vec::new(), 0)));
    }
}
