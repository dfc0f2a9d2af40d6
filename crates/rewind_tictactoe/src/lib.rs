//! Rewind tic-tac-toe - pure game logic with time travel.
//!
//! This crate holds everything about the game that is not presentation:
//!
//! - **Types**: markers, squares, cells and boards
//! - **Rules**: the win evaluator over the eight winning lines
//! - **Actions**: copy-on-write move application with typed rejections
//! - **Timeline**: the board history plus the currently viewed step
//! - **Session**: click handlers that ignore illegal actions
//! - **Invariants**: composable properties checked after every move
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Marker, Session, Status};
//!
//! let mut session = Session::new();
//! session.click_cell(4);
//! session.click_cell(0);
//! session.click_cell(8);
//! assert_eq!(session.status(), Status::NextPlayer(Marker::O));
//!
//! // Jump back to the start and branch; the old future is dropped on the next move.
//! session.click_move(0);
//! session.click_cell(2);
//! assert_eq!(session.timeline().history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
pub mod invariants;
pub mod rules;
mod session;
mod status;
mod timeline;
mod types;

pub use action::{MoveError, apply_move};
pub use cell::{Cell, ParseCellError};
pub use rules::{calculate_winner, winning_line};
pub use session::Session;
pub use status::Status;
pub use timeline::{JumpError, MoveEntry, Timeline};
pub use types::{Board, Marker, Square};
