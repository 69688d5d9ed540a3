//! Match lifecycle: players, turns, and result evaluation.

use crate::board::Board;
use crate::error::GameError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, Line};
use crate::types::{Marker, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a match.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No match started yet.
    Setup,
    /// Moves are accepted.
    InProgress,
    /// A win or tie was recorded.
    Finished,
}

/// Result of a finished match.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Marker completed a line.
    #[display("{} wins", _0)]
    Winner(Marker),
    /// Board filled with no line completed.
    #[display("Tie")]
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the match was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Why a move was not applied.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// `init_game` has not been called.
    #[display("Game has not started")]
    NotStarted,
    /// The match already has a result.
    #[display("Game is already over")]
    GameOver,
    /// The target cell holds a marker.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

/// What happened when a move was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum RoundOutcome {
    /// Nothing changed.
    Rejected(Rejection),
    /// Move applied; `next` is the marker now to move.
    Continue {
        /// Marker of the player whose turn it is now.
        next: Marker,
    },
    /// Move applied and ended the match.
    Finished(Outcome),
}

impl RoundOutcome {
    /// True if the move was not applied.
    pub fn is_rejected(&self) -> bool {
        matches!(self, RoundOutcome::Rejected(_))
    }

    /// The match result, if this move ended the match.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundOutcome::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns one board and one match. Independent engines share nothing, so
/// several games can run side by side.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: Option<[Player; 2]>,
    current: usize,
    phase: Phase,
    history: Vec<Position>,
    outcome: Option<Outcome>,
}

impl GameEngine {
    /// Creates an engine in the setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: 0,
            phase: Phase::Setup,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Starts a fresh match: player one gets X and moves first, player two gets O.
    ///
    /// Valid from any phase; an unfinished match is discarded.
    #[instrument(skip_all)]
    pub fn init_game(&mut self, player_one: impl Into<String>, player_two: impl Into<String>) {
        let player_one = Player::new(player_one.into(), Marker::X);
        let player_two = Player::new(player_two.into(), Marker::O);
        info!(
            player_one = %player_one.name(),
            player_two = %player_two.name(),
            "Match started"
        );

        self.players = Some([player_one, player_two]);
        self.current = 0;
        self.board.reset();
        self.history.clear();
        self.outcome = None;
        self.phase = Phase::InProgress;
    }

    /// Plays the current player's marker at a cell index (0-8).
    ///
    /// Indices outside 0-8 are a caller bug and return an error without
    /// touching the match. Everything else is reported through
    /// [`RoundOutcome`].
    #[instrument(skip(self))]
    pub fn play_round(&mut self, index: usize) -> Result<RoundOutcome, GameError> {
        let position = Position::try_from(index).inspect_err(|e| {
            warn!(error = %e, "Rejected out-of-range index");
        })?;
        Ok(self.play(position))
    }

    /// Plays the current player's marker at `position`.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play(&mut self, position: Position) -> RoundOutcome {
        if self.phase == Phase::Finished {
            debug!("Move after match end ignored");
            return RoundOutcome::Rejected(Rejection::GameOver);
        }
        let Some(marker) = self.current_player().map(|p| *p.marker()) else {
            warn!("Move before init_game ignored");
            return RoundOutcome::Rejected(Rejection::NotStarted);
        };

        if !self.board.place(position, marker) {
            warn!(%position, "Cell occupied, move rejected");
            return RoundOutcome::Rejected(Rejection::Occupied(position));
        }
        self.history.push(position);

        let result = match self.evaluate() {
            Some(outcome) => {
                self.phase = Phase::Finished;
                self.outcome = Some(outcome);
                info!(%outcome, moves = self.history.len(), "Match finished");
                RoundOutcome::Finished(outcome)
            }
            None => {
                self.current = 1 - self.current;
                let next = marker.opponent();
                debug!(%marker, %next, "Turn passes");
                RoundOutcome::Continue { next }
            }
        };

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated: {:?}",
            EngineInvariants::check_all(self)
        );
        result
    }

    /// Win takes precedence over a full board.
    fn evaluate(&self) -> Option<Outcome> {
        if let Some(winner) = rules::check_winner(&self.board) {
            Some(Outcome::Winner(winner))
        } else if rules::is_draw(&self.board) {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    /// The player whose turn it is, `None` before `init_game`.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.current])
    }

    /// True once a win or tie has been recorded.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players in seating order, `None` before `init_game`.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The player holding `marker`.
    pub fn player(&self, marker: Marker) -> Option<&Player> {
        self.players
            .as_ref()
            .and_then(|players| players.iter().find(|p| *p.marker() == marker))
    }

    /// Positions played this match, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Result of the match once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The completed line when the match was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome?.winner()?;
        rules::winning_lines(&self.board)
            .first()
            .map(|(line, _)| *line)
    }

    /// Positions still open while the match is in progress.
    pub fn valid_moves(&self) -> Vec<Position> {
        match self.phase {
            Phase::InProgress => self.board.empty_positions(),
            Phase::Setup | Phase::Finished => Vec::new(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
