//! Command-line interface for rewind.

use crate::replay::ReplayEvent;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a clickable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Feed events through a game without a UI and print the result
    Replay {
        /// Events: a cell (0-8 or a label like "center") or a jump (j0, j3, ...)
        #[arg(value_name = "EVENT")]
        events: Vec<ReplayEvent>,

        /// Print JSON instead of a text board
        #[arg(long)]
        json: bool,
    },
}
