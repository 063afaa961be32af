//! Headless replay: feeds a scripted move list through the engine.
//!
//! Each finished round is reset immediately, the way a player would dismiss
//! the end-of-round notice.

use derive_more::{Display, Error};
use noughts_core::{GameEngine, InvalidPosition, MoveError, MoveResult, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One scripted move as written by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveInput {
    /// Board index, expected 0-8.
    Index(usize),
    /// Row and column, each expected 0-2.
    RowCol(usize, usize),
}

impl std::fmt::Display for MoveInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveInput::Index(index) => write!(f, "{}", index),
            MoveInput::RowCol(row, col) => write!(f, "{}:{}", row, col),
        }
    }
}

impl TryFrom<MoveInput> for Position {
    type Error = InvalidPosition;

    fn try_from(input: MoveInput) -> Result<Self, Self::Error> {
        match input {
            MoveInput::Index(index) => Position::try_from(index),
            MoveInput::RowCol(row, col) => Position::try_from((row, col)),
        }
    }
}

/// Errors raised while reading a move script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A token was neither `N` nor `R:C`.
    #[display("Cannot parse move {:?} (expected N or R:C)", token)]
    BadToken {
        /// The offending token.
        token: String,
    },
    /// The script contained no moves.
    #[display("No moves given")]
    Empty,
}

/// Parses moves separated by whitespace or commas.
#[instrument]
pub fn parse_moves(script: &str) -> Result<Vec<MoveInput>, ReplayError> {
    let moves = script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<_>, _>>()?;

    if moves.is_empty() {
        return Err(ReplayError::Empty);
    }
    Ok(moves)
}

fn parse_token(token: &str) -> Result<MoveInput, ReplayError> {
    let bad = || ReplayError::BadToken {
        token: token.to_string(),
    };
    match token.split_once(':') {
        Some((row, col)) => {
            let row = row.parse().map_err(|_| bad())?;
            let col = col.parse().map_err(|_| bad())?;
            Ok(MoveInput::RowCol(row, col))
        }
        None => token.parse().map(MoveInput::Index).map_err(|_| bad()),
    }
}

/// What happened to one scripted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The engine accepted the move.
    Played {
        /// Who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
        /// Engine verdict.
        result: MoveResult,
    },
    /// The engine rejected the move.
    Rejected {
        /// Rejection reason.
        error: String,
    },
}

/// A scripted move with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// Input as given.
    pub input: MoveInput,
    /// Outcome.
    pub outcome: StepOutcome,
}

/// Score line of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    /// The player.
    pub player: Player,
    /// Rounds won.
    pub wins: u32,
}

/// Full result of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Every move in script order.
    pub steps: Vec<ReplayStep>,
    /// Rounds that ended in a win or a draw.
    pub rounds_finished: u32,
    /// Scores in player definition order.
    pub scores: Vec<ScoreLine>,
}

/// Plays `moves` on a fresh engine.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn run_replay(moves: &[MoveInput]) -> ReplayReport {
    let mut engine = GameEngine::new();
    let mut steps = Vec::with_capacity(moves.len());
    let mut rounds_finished = 0;

    for &input in moves {
        let player = engine.current_player();
        let outcome = match Position::try_from(input) {
            Err(e) => rejected(e.into()),
            Ok(position) => match engine.play_move(position) {
                Ok(result) => {
                    if result.is_round_over() {
                        rounds_finished += 1;
                        info!(%result, "Round over, resetting board");
                        engine.reset_board();
                    }
                    StepOutcome::Played {
                        player,
                        position,
                        result,
                    }
                }
                Err(e) => rejected(e),
            },
        };
        debug!(%input, ?outcome, "Replayed move");
        steps.push(ReplayStep { input, outcome });
    }

    let scores = engine
        .score_summary()
        .into_iter()
        .map(|(player, wins)| ScoreLine { player, wins })
        .collect();

    ReplayReport {
        steps,
        rounds_finished,
        scores,
    }
}

fn rejected(error: MoveError) -> StepOutcome {
    StepOutcome::Rejected {
        error: error.to_string(),
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (n, step) in self.steps.iter().enumerate() {
            write!(f, "{:>2}. {:<5} ", n + 1, step.input.to_string())?;
            match &step.outcome {
                StepOutcome::Played {
                    player,
                    position,
                    result,
                } => writeln!(f, "{} -> {}: {}", player, position, result)?,
                StepOutcome::Rejected { error } => writeln!(f, "rejected: {}", error)?,
            }
        }
        writeln!(f, "Rounds finished: {}", self.rounds_finished)?;
        for line in &self.scores {
            writeln!(f, "{}: {}", line.player, line.wins)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tokens() {
        assert_eq!(
            parse_moves("4, 0 1:2\t8").unwrap(),
            vec![
                MoveInput::Index(4),
                MoveInput::Index(0),
                MoveInput::RowCol(1, 2),
                MoveInput::Index(8),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_moves("4 x"),
            Err(ReplayError::BadToken {
                token: "x".to_string()
            })
        );
        assert!(matches!(parse_moves("1:"), Err(ReplayError::BadToken { .. })));
        assert_eq!(parse_moves(" , "), Err(ReplayError::Empty));
    }
}
