//! Key-driven scenarios against the application state.

use crossterm::event::KeyCode;
use tictactoe_history::{Cell, Mark, Position};
use tictactoe_tui::{App, Focus};

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key);
    }
}

fn digits(app: &mut App, cells: &str) {
    for c in cells.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_enter_plays_at_cursor() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

    let board = app.game().current_board();
    assert_eq!(board.get(Position::TopLeft), Cell::Marked(Mark::X));
    assert_eq!(app.status_line(), "Next player: O");
}

#[test]
fn test_occupied_cell_has_no_visible_effect() {
    let mut app = App::new();
    digits(&mut app, "1");
    let before = app.game().state();
    digits(&mut app, "1");
    assert_eq!(app.game().state(), before);
}

#[test]
fn test_jump_from_move_list_then_branch() {
    let mut app = App::new();
    // X0 O1 X3 O4 X6: X wins down the left column.
    digits(&mut app, "12457");
    assert_eq!(app.status_line(), "Winner: X");

    // Further clicks are ignored once the game is won.
    digits(&mut app, "8");
    assert_eq!(*app.game().state().history_length(), 6);

    press(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.focus(), Focus::Moves);
    press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
    assert_eq!(*app.game().state().move_index(), 2);
    assert_eq!(app.status_line(), "Next player: X");

    digits(&mut app, "3");
    let view = app.game().state();
    assert_eq!(*view.history_length(), 4);
    assert_eq!(*view.move_index(), 3);
}

#[test]
fn test_g_returns_to_start() {
    let mut app = App::new();
    digits(&mut app, "159");
    press(&mut app, &[KeyCode::Char('g')]);
    let view = app.game().state();
    assert_eq!(*view.move_index(), 0);
    assert_eq!(*view.history_length(), 4);
}

#[test]
fn test_restart_clears_history() {
    let mut app = App::new();
    digits(&mut app, "159");
    press(&mut app, &[KeyCode::Char('r')]);
    assert_eq!(*app.game().state().history_length(), 1);
    assert_eq!(app.focus(), Focus::Board);
}

#[test]
fn test_full_board_shows_draw() {
    let mut app = App::new();
    // X O X / X O O / O X X
    digits(&mut app, "123546879");
    assert_eq!(app.game().winner(), None);
    assert_eq!(app.status_line(), "Draw");
}
