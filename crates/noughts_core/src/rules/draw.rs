//! Full-board detection for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells claimed).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Claimed(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            board.set(pos, Cell::Claimed(Player::for_turn(i as u32)));
        }
        assert!(is_full(&board));
    }
}
