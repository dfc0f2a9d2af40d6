//! Rewind - terminal tic-tac-toe with a clickable move history.
//!
//! # Architecture
//!
//! - **CLI / Config**: `clap` arguments and a TOML settings file
//! - **Logging**: `tracing` to a log file, never to the screen
//! - **App**: UI state around a [`rewind_tictactoe::Session`]
//! - **UI**: stateless `ratatui` rendering that reports clickable areas
//! - **Replay**: headless event playback for scripts and debugging

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{Action, App, HitMap};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, LogConfig, Theme, UiConfig};
pub use replay::{ParseEventError, ReplayEvent};
