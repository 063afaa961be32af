//! Move rejection errors.

use super::position::Position;
use std::convert::Infallible;

/// Raw position input that does not address any cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvalidPosition {
    /// Index outside 0-8.
    #[display("Index {} is off the board (expected 0-8)", index)]
    Index {
        /// The rejected index.
        index: usize,
    },

    /// Row or column outside 0-2.
    #[display("Row {}, column {} is off the board (expected 0-2)", row, col)]
    RowCol {
        /// The rejected row.
        row: usize,
        /// The rejected column.
        col: usize,
    },
}

impl std::error::Error for InvalidPosition {}

/// Error that can occur when playing a move.
///
/// Both variants leave the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already claimed.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The requested position is not on the board.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(InvalidPosition),
}

impl std::error::Error for MoveError {}

impl From<InvalidPosition> for MoveError {
    fn from(err: InvalidPosition) -> Self {
        MoveError::InvalidPosition(err)
    }
}

impl From<Infallible> for MoveError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
