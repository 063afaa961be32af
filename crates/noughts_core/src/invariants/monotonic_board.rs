//! Monotonic board invariant: cells never change once claimed.

use super::Invariant;
use crate::{Board, Cell, GameEngine};

/// Invariant: claimed cells are never overwritten.
///
/// Verified by replaying the round history onto an empty board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Claimed(mov.player));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_holds_after_moves() {
        let mut engine = GameEngine::new();
        for index in [0usize, 4, 8] {
            engine.play_move(index).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::Center).unwrap();
        engine.board.set(Position::Center, Cell::Claimed(Player::X));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_history_entry_violates() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::Center).unwrap();
        engine.history.push(Move::new(Player::X, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
