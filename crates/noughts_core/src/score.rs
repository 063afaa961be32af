//! Per-player win counts that survive board resets.

use super::Player;
use serde::{Deserialize, Serialize};

/// Win count for each player, addressed by [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTable {
    wins: [u32; 2],
}

impl ScoreTable {
    /// Creates a table with both scores at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rounds `player` has won.
    pub fn get(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Records a round win for `player` and returns the new count.
    pub(crate) fn record_win(&mut self, player: Player) -> u32 {
        let slot = &mut self.wins[player.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Scores in player definition order.
    pub fn summary(&self) -> [(Player, u32); 2] {
        Player::ALL.map(|player| (player, self.get(player)))
    }
}

/// One `"<symbol>: <count>"` line per player.
impl std::fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (player, count) in self.summary() {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", player, count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_in_definition_order() {
        let mut scores = ScoreTable::new();
        assert_eq!(scores.record_win(Player::X), 1);
        assert_eq!(scores.record_win(Player::X), 2);
        assert_eq!(scores.summary(), [(Player::O, 0), (Player::X, 2)]);
    }

    #[test]
    fn test_display_one_line_per_player() {
        let mut scores = ScoreTable::new();
        scores.record_win(Player::O);
        assert_eq!(scores.to_string(), "O: 1\nX: 0");
    }
}
