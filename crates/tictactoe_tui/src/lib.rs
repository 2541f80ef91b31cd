//! Terminal presentation for time-travel tic-tac-toe.
//!
//! Renders the board and move list from [`tictactoe_history::Game`] and
//! forwards key presses as move and jump intents.

#![warn(missing_docs)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{Action, App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
