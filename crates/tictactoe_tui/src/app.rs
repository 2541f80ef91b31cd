//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_history::{Game, Position};
use tracing::{debug, info, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys select a move-list entry.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
}

impl App {
    /// Creates a new application at the start of a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
        }
    }

    /// The game being rendered.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Status text, adding a draw label the core does not report.
    pub fn status_line(&self) -> String {
        if self.game.is_draw() {
            "Draw".to_string()
        } else {
            self.game.status().to_string()
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('g') => self.jump(0),
            KeyCode::Tab => self.toggle_focus(),
            key => match (digit_cell(key), self.focus) {
                (Some(cell), _) => self.play(cell),
                (None, Focus::Board) => self.handle_board_key(key),
                (None, Focus::Moves) => self.handle_moves_key(key),
            },
        }
        Action::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            key => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = *self.game.state().history_length() - 1;
        match key {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Home => self.selected_move = 0,
            KeyCode::End => self.selected_move = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_move),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
        self.selected_move = *self.game.state().move_index();
        debug!(focus = ?self.focus, "Focus changed");
    }

    /// Clicks a cell. Refused moves have no visible effect.
    fn play(&mut self, cell: usize) {
        if self.game.request_move(cell).is_ok() {
            self.selected_move = *self.game.state().move_index();
            if let Some(pos) = Position::from_index(cell) {
                self.cursor = pos;
            }
        }
    }

    fn jump(&mut self, index: usize) {
        match self.game.request_jump(index) {
            Ok(()) => {
                self.selected_move = index;
                info!(index, "Jumped to move");
            }
            Err(e) => warn!(error = %e, "Ignoring jump"),
        }
    }

    fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_selects_current_move() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected_move(), 2);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Board);
    }

    #[test]
    fn test_move_selection_is_clamped() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_move(), 1);
        app.handle_key(KeyCode::Home);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_move(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Left), Action::Continue);
    }
}
