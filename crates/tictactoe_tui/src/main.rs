//! Tic-tac-toe with move history and time travel.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, Command, TuiConfig, logging, replay, terminal};
use tracing::debug;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play => {
            logging::init_file_logging(&config)?;
            debug!(?config, "Configuration resolved");
            terminal::run(&config)
        }
        Command::Replay {
            moves,
            jump,
            pretty,
        } => {
            logging::init_stderr_logging(&config)?;
            debug!(?config, "Configuration resolved");
            let view = replay::replay(&moves, jump)?;
            println!("{}", replay::to_json(&view, pretty)?);
            Ok(())
        }
        Command::Schema { pretty } => {
            println!("{}", replay::schema_json(pretty)?);
            Ok(())
        }
    }
}
