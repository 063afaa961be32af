//! Pure tic-tac-toe engine.
//!
//! The engine owns the board, the turn counter and the score table. It has no
//! I/O and no notion of a screen: a presentation layer forwards moves through
//! [`GameEngine::play_move`] and renders what the engine reports back.
//!
//! ```
//! use noughts_core::{GameEngine, MoveResult, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.current_player(), Player::O);
//!
//! let result = engine.play_move(Position::Center).unwrap();
//! assert_eq!(result, MoveResult::Continue(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod outcome;
mod position;
mod score;
mod types;

pub mod invariants;
pub mod rules;

pub use action::Move;
pub use engine::GameEngine;
pub use error::{InvalidPosition, MoveError};
pub use outcome::MoveResult;
pub use position::Position;
pub use score::ScoreTable;
pub use types::{Board, Cell, Player};
