//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules know nothing about
//! history or turns so they can be consulted from any point in the timeline.

pub mod win;

pub use win::{LINES, calculate_winner, winning_line};
