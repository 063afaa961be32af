//! Property tests for the engine over arbitrary move sequences.

use noughts_core::invariants::{EngineInvariants, InvariantSet};
use noughts_core::{Board, GameEngine, MoveError, MoveResult, Player};
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..40)
}

proptest! {
    #[test]
    fn turn_counts_accepted_non_winning_moves(sequence in moves()) {
        let mut engine = GameEngine::new();
        let mut accepted = 0u32;
        let mut wins = 0u32;

        for index in sequence {
            match engine.play_move(index) {
                Ok(MoveResult::Win(_)) => {
                    accepted += 1;
                    wins += 1;
                }
                Ok(_) => accepted += 1,
                Err(MoveError::CellOccupied(_)) => {}
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
            prop_assert_eq!(engine.turn(), accepted - wins);
        }
    }

    #[test]
    fn current_player_follows_turn_parity(sequence in moves()) {
        let mut engine = GameEngine::new();
        prop_assert_eq!(engine.current_player(), Player::O);

        for index in sequence {
            let mover = engine.current_player();
            let before = engine.turn();
            if let Ok(result) = engine.play_move(index) {
                match result {
                    MoveResult::Continue(next) => {
                        prop_assert_eq!(next, mover.opponent());
                        prop_assert_eq!(engine.turn(), before + 1);
                    }
                    MoveResult::Draw => prop_assert_eq!(engine.turn(), before + 1),
                    MoveResult::Win(winner) => {
                        prop_assert_eq!(winner, mover);
                        prop_assert_eq!(engine.current_player(), mover);
                    }
                }
            }
            let expected = if engine.turn() % 2 == 0 { Player::O } else { Player::X };
            prop_assert_eq!(engine.current_player(), expected);
        }
    }

    #[test]
    fn occupied_cell_changes_nothing(sequence in moves()) {
        let mut engine = GameEngine::new();

        for index in sequence {
            let board = engine.board().clone();
            let turn = engine.turn();
            let scores = *engine.scores();

            if let Err(err) = engine.play_move(index) {
                prop_assert!(matches!(err, MoveError::CellOccupied(_)));
                prop_assert_eq!(engine.board(), &board);
                prop_assert_eq!(engine.turn(), turn);
                prop_assert_eq!(engine.scores(), &scores);
            }
        }
    }

    #[test]
    fn invariants_hold_and_reset_keeps_scores(sequence in moves()) {
        let mut engine = GameEngine::new();
        for index in sequence {
            let _ = engine.play_move(index);
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }

        let scores = *engine.scores();
        engine.reset_board();
        prop_assert_eq!(engine.board(), &Board::new());
        prop_assert_eq!(engine.turn(), 0);
        prop_assert_eq!(engine.scores(), &scores);
        prop_assert!(EngineInvariants::check_all(&engine).is_ok());
    }
}
