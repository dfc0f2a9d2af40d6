//! Cursor invariant: the viewed step exists.

use super::super::Timeline;
use super::Invariant;

/// Invariant: `current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.current_move() < timeline.history().len()
    }

    fn description() -> &'static str {
        "Viewed step is a recorded step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_start_holds() {
        assert!(CursorInBoundsInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_past_end_violates() {
        let t = Timeline::from_parts(vec![Board::new()], 1);
        assert!(!CursorInBoundsInvariant::holds(&t));
    }
}
