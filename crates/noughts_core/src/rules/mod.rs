//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine composes them;
//! they are public so callers can evaluate arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_won, winning_line};
