//! Command-line interface for the tic-tac-toe terminal client.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay cell clicks without a terminal and print the final state as JSON
    Replay {
        /// Cell indices (0-8) in click order, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this move index after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the JSON Schema of the state emitted by `replay`
    Schema {
        /// Pretty-print the schema
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// The command to run, falling back to `play`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
