//! Board history with a movable viewing position.
//!
//! A [`Timeline`] is the whole game: every board from the empty start to
//! the tip of the current branch, plus the step being viewed. Viewing an
//! old step leaves the history alone; playing from it cuts the history
//! back to that step before appending.

use super::{Board, Marker, Status};
use derive_new::new;
use serde::Serialize;
use tracing::{debug, instrument};

/// Error returned when jumping to a step that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The step is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded boards.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Text shown for the entry.
    pub label: String,
    /// Whether this step is the one being viewed.
    pub current: bool,
}

/// History of boards plus the currently viewed step.
///
/// Transitions take `&self` and return a new timeline, so a caller can
/// keep the old value around or drop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    history: Vec<Board>,
    current_move: usize,
}

impl Timeline {
    /// Starts a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All recorded boards, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the viewed board.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The viewed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Index of the newest board on the branch.
    pub fn latest(&self) -> usize {
        self.history.len() - 1
    }

    /// True when X places the next marker.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Marker placed by the next move from the viewed step.
    pub fn next_marker(&self) -> Marker {
        Marker::for_step(self.current_move)
    }

    /// Status of the viewed board.
    pub fn status(&self) -> Status {
        Status::of(self.current_board(), self.next_marker())
    }

    /// Records `next_board` after the viewed step.
    ///
    /// Boards after the viewed step are discarded. The new board becomes
    /// the viewed one.
    #[instrument(
        skip(self, next_board),
        fields(from = self.current_move, len = self.history.len())
    )]
    pub fn play(&self, next_board: Board) -> Timeline {
        let discarded = self.latest() - self.current_move;
        if discarded > 0 {
            debug!(discarded, "Branching: dropping later boards");
        }

        let mut history = self.history[..=self.current_move].to_vec();
        history.push(next_board);
        let current_move = history.len() - 1;

        Timeline {
            history,
            current_move,
        }
    }

    /// Views the board recorded at `step`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Timeline, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        Ok(Timeline {
            history: self.history.clone(),
            current_move: step,
        })
    }

    /// Label for the move-list entry at `step`.
    pub fn move_label(step: usize) -> String {
        if step > 0 {
            format!("Go to move #{}", step)
        } else {
            "Go to game start".to_string()
        }
    }

    /// Entries of the move list, one per recorded board.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry::new(step, Self::move_label(step), step == self.current_move))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, apply_move};

    fn played(cells: &[Cell]) -> Timeline {
        cells.iter().fold(Timeline::new(), |t, &cell| {
            let next = apply_move(t.current_board(), cell, t.next_marker()).unwrap();
            t.play(next)
        })
    }

    #[test]
    fn test_new_timeline() {
        let t = Timeline::new();
        assert_eq!(t.history(), &[Board::new()]);
        assert_eq!(t.current_move(), 0);
        assert!(t.x_is_next());
        assert_eq!(t.status(), Status::NextPlayer(Marker::X));
    }

    #[test]
    fn test_play_appends_and_views_tip() {
        let t = played(&[Cell::Center, Cell::TopLeft]);
        assert_eq!(t.history().len(), 3);
        assert_eq!(t.current_move(), 2);
        assert_eq!(t.next_marker(), Marker::X);
    }

    #[test]
    fn test_play_truncates_future() {
        let t = played(&[Cell::Center, Cell::TopLeft, Cell::BottomRight, Cell::TopRight]);
        assert_eq!(t.history().len(), 5);

        let t = t.jump_to(2).unwrap();
        let next = apply_move(t.current_board(), Cell::BottomLeft, t.next_marker()).unwrap();
        let t = t.play(next);

        assert_eq!(t.history().len(), 4);
        assert_eq!(t.current_move(), 3);
        assert_eq!(t.history()[3], next);
    }

    #[test]
    fn test_jump_changes_only_current_move() {
        let t = played(&[Cell::Center, Cell::TopLeft, Cell::BottomRight]);
        let jumped = t.jump_to(1).unwrap();
        assert_eq!(jumped.history(), t.history());
        assert_eq!(jumped.current_move(), 1);
        assert_eq!(jumped.next_marker(), Marker::O);
        assert_eq!(t.current_move(), 3);
    }

    #[test]
    fn test_jump_out_of_range() {
        let t = played(&[Cell::Center]);
        assert_eq!(
            t.jump_to(2),
            Err(JumpError::OutOfRange { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_move_labels() {
        let t = played(&[Cell::Center, Cell::TopLeft]).jump_to(1).unwrap();
        let moves = t.moves();
        assert_eq!(
            moves,
            vec![
                MoveEntry::new(0, "Go to game start".to_string(), false),
                MoveEntry::new(1, "Go to move #1".to_string(), true),
                MoveEntry::new(2, "Go to move #2".to_string(), false),
            ]
        );
    }
}
