//! Presentation state: forwards input to the engine and derives what to show.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use derive_getters::Getters;
use noughts_core::{GameEngine, MoveResult, Player, Position, rules};
use tracing::{debug, info, instrument, warn};

/// End-of-round message shown until the player confirms the reset.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RoundNotice {
    /// `"<symbol> has won."` or `"Game Finished"`.
    title: String,
    /// Score summary, one `"<symbol>: <count>"` line per player.
    message: String,
}

impl RoundNotice {
    /// Builds the notice for a finished round.
    ///
    /// Returns `None` while the round is still in progress.
    pub fn new(result: MoveResult, engine: &GameEngine) -> Option<Self> {
        if !result.is_round_over() {
            return None;
        }
        let title = match result.winner() {
            Some(player) => format!("{} has won.", player),
            None => "Game Finished".to_string(),
        };
        Some(Self {
            title,
            message: engine.scores().to_string(),
        })
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    notice: Option<RoundNotice>,
    status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new application with a fresh engine.
    #[instrument]
    pub fn new() -> Self {
        let engine = GameEngine::new();
        let status_message = turn_message(engine.current_player());
        Self {
            engine,
            cursor: Position::Center,
            notice: None,
            status_message,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The pending end-of-round notice, if a round just finished.
    pub fn notice(&self) -> Option<&RoundNotice> {
        self.notice.as_ref()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Symbol shown in the turn indicator.
    pub fn turn_indicator(&self) -> Player {
        self.engine.current_player()
    }

    /// A cell accepts input iff it is empty and no notice is pending.
    pub fn is_cell_enabled(&self, position: Position) -> bool {
        self.notice.is_none() && self.engine.is_cell_open(position)
    }

    /// Line to highlight while a win notice is showing.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        if self.notice.is_none() {
            return None;
        }
        let last = self.engine.last_move()?;
        rules::winning_line(self.engine.board(), last.player)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            _ => {}
        }

        if self.notice.is_some() {
            match key {
                KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char(' ') => self.confirm_reset(),
                _ => debug!("Input ignored while round notice is shown"),
            }
            return AppAction::Continue;
        }

        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            other => {
                if let Some(position) = digit_cell(other) {
                    self.cursor = position;
                    self.select(position);
                }
            }
        }
        AppAction::Continue
    }

    /// Forwards a cell selection to the engine.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) {
        if self.notice.is_some() {
            debug!("Selection ignored while round notice is shown");
            return;
        }

        match self.engine.play_move(position) {
            Ok(result) => match RoundNotice::new(result, &self.engine) {
                Some(notice) => {
                    info!(title = %notice.title, "Round finished");
                    self.status_message = format!("{} Press Enter to reset.", notice.title);
                    self.notice = Some(notice);
                }
                None => self.status_message = turn_message(self.engine.current_player()),
            },
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = format!("{}. Try again.", e);
            }
        }
    }

    /// Dismisses the notice and clears the board. Scores are kept.
    #[instrument(skip(self))]
    pub fn confirm_reset(&mut self) {
        self.engine.reset_board();
        self.notice = None;
        self.status_message = turn_message(self.engine.current_player());
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}
