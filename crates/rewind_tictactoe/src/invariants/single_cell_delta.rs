//! Delta invariant: each step adds exactly one marker.

use super::super::{Board, Cell, Square, Timeline};
use super::Invariant;

/// Invariant: every board differs from its predecessor in exactly one
/// cell, which went from empty to occupied.
///
/// Holds across branches too, since a new branch is appended right after
/// the step it was played from.
pub struct SingleCellDeltaInvariant;

/// Cells that changed between two boards.
pub(super) fn changed_cells(before: &Board, after: &Board) -> Vec<Cell> {
    Cell::ALL
        .into_iter()
        .filter(|cell| before.get(*cell) != after.get(*cell))
        .collect()
}

impl Invariant<Timeline> for SingleCellDeltaInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().windows(2).all(|pair| {
            match changed_cells(&pair[0], &pair[1]).as_slice() {
                [cell] => pair[0].get(*cell) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each board adds exactly one marker to the previous one"
    }
}
