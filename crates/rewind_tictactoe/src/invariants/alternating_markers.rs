//! Alternating marker invariant: X, O, X, O, ...

use super::super::{Marker, Timeline};
use super::single_cell_delta::changed_cells;
use super::Invariant;

/// Invariant: markers alternate turns.
///
/// The marker added at step `i` belongs to the player who moved from step
/// `i - 1`: X for odd steps, O for even ones.
pub struct AlternatingMarkersInvariant;

impl Invariant<Timeline> for AlternatingMarkersInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = Marker::for_step(i);
                changed_cells(&pair[0], &pair[1])
                    .into_iter()
                    .all(|cell| pair[1].get(cell).marker() == Some(expected))
            })
    }

    fn description() -> &'static str {
        "Markers alternate turns (X, O, X, O, ...)"
    }
}
