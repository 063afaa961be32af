//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold after every move. The
//! engine checks them in debug builds; they are public so tests and callers
//! holding an engine can verify them too.

mod monotonic_board;
mod turn_within_moves;

pub use monotonic_board::MonotonicBoardInvariant;
pub use turn_within_moves::TurnWithinMovesInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose at the type level.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every engine invariant as a composable set.
pub type EngineInvariants = (MonotonicBoardInvariant, TurnWithinMovesInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameEngine, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_empty_engine() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_across_rounds() {
        let mut engine = GameEngine::new();
        for index in [4usize, 0, 1, 8, 7] {
            engine.play_move(index).unwrap();
            assert!(EngineInvariants::check_all(&engine).is_ok());
        }
        engine.reset_board();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::Center).unwrap();
        engine.board.set(Position::TopLeft, Cell::Claimed(Player::X));
        engine.turn = 5;

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].to_string(),
            MonotonicBoardInvariant::description()
        );
    }
}
