//! Headless replay of cell clicks.

use anyhow::{Context, Result};
use tictactoe_history::{Game, GameView};
use tracing::{info, instrument};

/// Feeds `moves` into a fresh game, optionally jumps, and returns the view.
///
/// Illegal clicks are skipped the same way the interactive UI skips them.
/// A jump past the end of the history is an error.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<GameView> {
    let mut game = Game::replay(moves);
    if let Some(index) = jump {
        game.request_jump(index)
            .with_context(|| format!("Cannot jump to move #{}", index))?;
    }
    let view = game.state();
    info!(
        move_index = *view.move_index(),
        history_length = *view.history_length(),
        status = %view.status(),
        "Replay finished"
    );
    Ok(view)
}

/// Renders a view as JSON.
pub fn to_json(view: &GameView, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(view)
    } else {
        serde_json::to_string(view)
    };
    json.context("Failed to serialize game state")
}

/// Renders the JSON Schema describing the output of [`to_json`].
pub fn schema_json(pretty: bool) -> Result<String> {
    let schema = schemars::schema_for!(GameView);
    let json = if pretty {
        serde_json::to_string_pretty(&schema)
    } else {
        serde_json::to_string(&schema)
    };
    json.context("Failed to serialize game state schema")
}
