//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_tui::{AppConfig, Cli, Command, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(config.log())?;
    info!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config.ui().theme()?),
        Command::Replay { events, json } => {
            let session = replay::replay(&events);
            if json {
                println!("{}", replay::render_json(&session)?);
            } else {
                print!("{}", replay::render_text(&session));
            }
            Ok(())
        }
    }
}
