//! Result of a successful move.

use super::Player;
use serde::{Deserialize, Serialize};

/// What happened after a mark was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mover completed a line; their score was incremented.
    Win(Player),
    /// The board filled up without a line.
    Draw,
    /// Play goes on with the given player to move.
    Continue(Player),
}

impl MoveResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MoveResult::Win(player) => Some(*player),
            MoveResult::Draw | MoveResult::Continue(_) => None,
        }
    }

    /// Returns true if this move ended the round.
    pub fn is_round_over(&self) -> bool {
        !matches!(self, MoveResult::Continue(_))
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveResult::Win(player) => write!(f, "{} has won.", player),
            MoveResult::Draw => write!(f, "Game Finished"),
            MoveResult::Continue(player) => write!(f, "{} to move", player),
        }
    }
}
