//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules know nothing about
//! history or turn order.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, evaluate, winning_line};
