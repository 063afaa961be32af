//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Declaration order is play order: `O` opens every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Player O (moves first).
    O,
    /// Player X (moves second).
    X,
}

impl Player {
    /// Both players in definition order.
    pub const ALL: [Player; 2] = [Player::O, Player::X];

    /// Returns the player whose turn it is after `turn` counted moves.
    pub fn for_turn(turn: u32) -> Self {
        Self::ALL[(turn % 2) as usize]
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }

    /// Index of this player in [`Player::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Player::O => 0,
            Player::X => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Claimed(Player),
}

impl Cell {
    /// Returns true if nobody has claimed this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Clears every cell.
    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Claimed(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_alternate_by_turn() {
        assert_eq!(Player::for_turn(0), Player::O);
        assert_eq!(Player::for_turn(1), Player::X);
        assert_eq!(Player::for_turn(2), Player::O);
        assert_eq!(Player::for_turn(7), Player::X);
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Claimed(Player::O));
        board.set(Position::Center, Cell::Claimed(Player::X));
        assert_eq!(board.to_string(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_clear_empties_board() {
        let mut board = Board::new();
        board.set(Position::BottomRight, Cell::Claimed(Player::X));
        assert!(!board.is_empty(Position::BottomRight));
        board.clear();
        assert_eq!(board, Board::new());
    }
}
