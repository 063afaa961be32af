//! The game-state engine: turns, move validation, win detection, scores.

use super::action::Move;
use super::error::MoveError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::MoveResult;
use super::rules;
use super::{Board, Cell, Player, Position, ScoreTable};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine with score tracking across rounds.
///
/// The board, turn counter and round history belong to the current round and
/// are cleared by [`GameEngine::reset_board`]. Scores live as long as the
/// engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: u32,
    pub(crate) scores: ScoreTable,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board and zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    /// Places the current player's mark at `position`.
    ///
    /// `position` may be a [`Position`], a `usize` index (0-8) or a
    /// `(row, col)` pair. A winning move increments the mover's score and does
    /// not advance the turn; any other move does.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidPosition`] if the input is off the board.
    /// - [`MoveError::CellOccupied`] if the cell is already claimed.
    ///
    /// Neither error changes the engine.
    #[instrument(skip(self, position), fields(turn = self.turn, player = ?self.current_player()))]
    pub fn play_move<P>(&mut self, position: P) -> Result<MoveResult, MoveError>
    where
        P: TryInto<Position>,
        MoveError: From<P::Error>,
    {
        let position = position.try_into()?;
        if !self.board.is_empty(position) {
            debug!(?position, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.current_player();
        self.board.set(position, Cell::Claimed(player));
        self.history.push(Move::new(player, position));
        debug!(?position, "Mark placed");

        let result = if rules::has_won(&self.board, player) {
            let score = self.scores.record_win(player);
            info!(%player, score, "Round won");
            MoveResult::Win(player)
        } else {
            self.turn += 1;
            if rules::is_full(&self.board) {
                info!("Round drawn");
                MoveResult::Draw
            } else {
                MoveResult::Continue(self.current_player())
            }
        };

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after move"
        );
        Ok(result)
    }

    /// Clears the board and turn counter. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.turn = 0;
        self.history.clear();
        debug!("Board reset");
    }

    /// Scores in player definition order, for display.
    pub fn score_summary(&self) -> [(Player, u32); 2] {
        self.scores.summary()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of counted moves since the last reset.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the score table.
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Moves placed since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent placement of the round.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns the cell at `position`.
    pub fn cell(&self, position: Position) -> Cell {
        self.board.get(position)
    }

    /// Whether a move at `position` would be accepted.
    pub fn is_cell_open(&self, position: Position) -> bool {
        self.board.is_empty(position)
    }

    /// Whether every cell is claimed.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvalidPosition;

    #[test]
    fn test_fresh_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.turn(), 0);
        assert_eq!(engine.score_summary(), [(Player::O, 0), (Player::X, 0)]);
        assert!(Position::ALL.iter().all(|p| engine.is_cell_open(*p)));
    }

    #[test]
    fn test_move_advances_turn() {
        let mut engine = GameEngine::new();
        let result = engine.play_move(Position::Center).unwrap();
        assert_eq!(result, MoveResult::Continue(Player::X));
        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.cell(Position::Center), Cell::Claimed(Player::O));
        assert_eq!(
            engine.last_move(),
            Some(Move::new(Player::O, Position::Center))
        );
    }

    #[test]
    fn test_accepts_index_and_row_col() {
        let mut engine = GameEngine::new();
        engine.play_move(0usize).unwrap();
        engine.play_move((2usize, 2usize)).unwrap();
        assert_eq!(engine.cell(Position::TopLeft), Cell::Claimed(Player::O));
        assert_eq!(engine.cell(Position::BottomRight), Cell::Claimed(Player::X));
    }

    #[test]
    fn test_invalid_position_leaves_state() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::Center).unwrap();
        let before = engine.clone();

        assert_eq!(
            engine.play_move(9usize),
            Err(MoveError::InvalidPosition(InvalidPosition::Index { index: 9 }))
        );
        assert_eq!(
            engine.play_move((0usize, 3usize)),
            Err(MoveError::InvalidPosition(InvalidPosition::RowCol {
                row: 0,
                col: 3
            }))
        );
        assert_eq!(engine.board(), before.board());
        assert_eq!(engine.turn(), before.turn());
        assert_eq!(engine.history(), before.history());
    }

    #[test]
    fn test_winning_move_does_not_advance_turn() {
        let mut engine = GameEngine::new();
        // O: 0, 1, 2   X: 3, 4
        for index in [0usize, 3, 1, 4] {
            engine.play_move(index).unwrap();
        }
        assert_eq!(engine.turn(), 4);
        assert_eq!(engine.play_move(2usize), Ok(MoveResult::Win(Player::O)));
        assert_eq!(engine.turn(), 4);
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.scores().get(Player::O), 1);
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut engine = GameEngine::new();
        for index in [0usize, 3, 1, 4, 2] {
            engine.play_move(index).unwrap();
        }
        engine.reset_board();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.turn(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.score_summary(), [(Player::O, 1), (Player::X, 0)]);
    }
}
