//! Noughts - two-player tic-tac-toe with round scores.
//!
//! The game rules live in [`noughts_core`]; this crate is the presentation
//! layer around them.
//!
//! # Architecture
//!
//! - **App**: presentation state, turns key presses into engine calls
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Replay**: headless runner for scripted move lists
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use noughts::{App, Position};
//!
//! let mut app = App::new();
//! app.select(Position::Center);
//! assert_eq!(app.status_message(), "Player X's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod replay;
mod tui;
mod ui;

// Crate-level exports - Presentation state
pub use app::{App, AppAction, RoundNotice};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Input mapping
pub use input::{digit_cell, move_cursor};

// Crate-level exports - Headless replay
pub use replay::{
    MoveInput, ReplayError, ReplayReport, ReplayStep, ScoreLine, StepOutcome, parse_moves,
    run_replay,
};

// Crate-level exports - Terminal session
pub use tui::run_tui;

// Crate-level exports - Game types
pub use noughts_core::{
    Board, Cell, GameEngine, InvalidPosition, Move, MoveError, MoveResult, Player, Position,
    ScoreTable,
};
