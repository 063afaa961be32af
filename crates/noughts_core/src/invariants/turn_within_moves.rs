//! Turn counter invariant: every placement counts except winning ones.

use super::Invariant;
use crate::{Board, Cell, GameEngine, rules};

/// Invariant: the turn counter equals the moves of the round minus the
/// placements that completed a line for their player.
pub struct TurnWithinMovesInvariant;

impl Invariant<GameEngine> for TurnWithinMovesInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut board = Board::new();
        let mut winning = 0usize;

        for mov in engine.history() {
            board.set(mov.position, Cell::Claimed(mov.player));
            if rules::has_won(&board, mov.player) {
                winning += 1;
            }
        }

        engine.turn() as usize + winning == engine.history().len()
    }

    fn description() -> &'static str {
        "Turn counter equals non-winning moves since reset"
    }
}
