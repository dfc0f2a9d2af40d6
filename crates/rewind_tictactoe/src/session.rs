//! One interactive game and its event handlers.
//!
//! The handlers mirror what a player can click: a board cell or an entry in
//! the move list. Anything illegal is ignored without touching state.

use super::action::apply_move;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::{Board, Cell, MoveEntry, Status, Timeline};
use tracing::{debug, info, instrument};

/// A single game session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    timeline: Timeline,
}

impl Session {
    /// Creates a session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
        }
    }

    /// The session's timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The viewed board.
    pub fn board(&self) -> &Board {
        self.timeline.current_board()
    }

    /// Status line for the viewed board.
    pub fn status(&self) -> Status {
        self.timeline.status()
    }

    /// Move list entries.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.timeline.moves()
    }

    /// Handles a click on the cell at `index` (0-8).
    ///
    /// Returns `true` if a move was recorded. Clicks on an occupied cell,
    /// on a decided board, or outside the board are ignored.
    #[instrument(skip(self), fields(step = self.timeline.current_move()))]
    pub fn click_cell(&mut self, index: usize) -> bool {
        let Some(cell) = Cell::from_index(index) else {
            debug!("Ignoring click outside the board");
            return false;
        };

        let marker = self.timeline.next_marker();
        match apply_move(self.timeline.current_board(), cell, marker) {
            Ok(next) => {
                self.timeline = self.timeline.play(next);
                info!(%cell, %marker, status = %self.timeline.status(), "Move recorded");
                self.assert_invariants();
                true
            }
            Err(e) => {
                debug!(error = %e, "Ignoring click");
                false
            }
        }
    }

    /// Handles a click on the move-list entry for `step`.
    ///
    /// Returns `true` if the viewed step changed.
    #[instrument(skip(self), fields(from = self.timeline.current_move()))]
    pub fn click_move(&mut self, step: usize) -> bool {
        match self.timeline.jump_to(step) {
            Ok(timeline) => {
                let changed = timeline.current_move() != self.timeline.current_move();
                self.timeline = timeline;
                debug!(changed, "Jumped");
                changed
            }
            Err(e) => {
                debug!(error = %e, "Ignoring jump");
                false
            }
        }
    }

    /// Steps back one board in the history, if possible.
    pub fn step_back(&mut self) -> bool {
        match self.timeline.current_move().checked_sub(1) {
            Some(step) => self.click_move(step),
            None => false,
        }
    }

    /// Steps forward one board along the recorded branch, if possible.
    pub fn step_forward(&mut self) -> bool {
        self.click_move(self.timeline.current_move() + 1)
    }

    fn assert_invariants(&self) {
        debug_assert!(
            TimelineInvariants::check_all(&self.timeline).is_ok(),
            "Timeline invariants violated: {:?}",
            TimelineInvariants::check_all(&self.timeline)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, Square};

    #[test]
    fn test_occupied_click_is_noop() {
        let mut session = Session::new();
        assert!(session.click_cell(4));
        let before = session.timeline().clone();

        assert!(!session.click_cell(4));
        assert_eq!(session.timeline(), &before);
    }

    #[test]
    fn test_out_of_board_click_is_noop() {
        let mut session = Session::new();
        assert!(!session.click_cell(9));
        assert_eq!(session.timeline(), &Timeline::new());
    }

    #[test]
    fn test_jump_to_same_step_reports_unchanged() {
        let mut session = Session::new();
        session.click_cell(0);
        assert!(!session.click_move(1));
        assert!(session.click_move(0));
        assert!(!session.click_move(7));
        assert_eq!(session.timeline().current_move(), 0);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut session = Session::new();
        session.click_cell(0);
        session.click_cell(1);

        assert!(session.step_back());
        assert_eq!(session.board().get(Cell::TopCenter), Square::Empty);
        assert!(session.step_forward());
        assert_eq!(session.board().get(Cell::TopCenter), Square::Occupied(Marker::O));
        assert!(!session.step_forward());

        session.click_move(0);
        assert!(!session.step_back());
    }
}
