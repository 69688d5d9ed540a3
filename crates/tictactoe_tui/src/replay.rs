//! Headless replay of a move list.

use derive_more::{Display, Error};
use tictactoe_core::{GameEngine, GameError, Rejection, RoundOutcome};
use tracing::{debug, info, instrument};

use crate::app::status_message;

/// A move list that could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// Index outside 0-8.
    #[display("Move {}: {}", turn, source)]
    Index {
        /// 1-based move number.
        turn: usize,
        /// Engine error.
        source: GameError,
    },

    /// Engine refused the move.
    #[display("Move {} (cell {}): {}", turn, index, rejection)]
    Rejected {
        /// 1-based move number.
        turn: usize,
        /// Cell index played.
        index: usize,
        /// Reason given by the engine.
        rejection: Rejection,
    },
}

/// Plays `moves` through a fresh match and returns the engine afterwards.
///
/// Stops at the first out-of-range or rejected move, including any move
/// submitted after the match ended.
#[instrument(skip(player_one, player_two))]
pub fn replay(
    player_one: &str,
    player_two: &str,
    moves: &[usize],
) -> Result<(GameEngine, Option<RoundOutcome>), ReplayError> {
    let mut engine = GameEngine::new();
    engine.init_game(player_one, player_two);

    let mut last = None;
    for (i, &index) in moves.iter().enumerate() {
        let turn = i + 1;
        let outcome = engine
            .play_round(index)
            .map_err(|source| ReplayError::Index { turn, source })?;
        if let RoundOutcome::Rejected(rejection) = outcome {
            return Err(ReplayError::Rejected {
                turn,
                index,
                rejection,
            });
        }
        debug!(turn, index, ?outcome, "Replayed move");
        last = Some(outcome);
    }

    info!(moves = moves.len(), over = engine.is_over(), "Replay complete");
    Ok((engine, last))
}

/// Board followed by the status line, as printed by `tictactoe replay`.
pub fn summary(engine: &GameEngine, last: Option<RoundOutcome>) -> String {
    format!("{}\n\n{}", engine.board(), status_message(engine, last))
}
