//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine asserts them in debug builds; tests check them directly.

use crate::engine::{GameEngine, Phase};
use crate::types::{Cell, Marker};
use std::collections::HashSet;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: markers are never overwritten.
///
/// Every played position is occupied, and the board holds exactly as many
/// markers as moves were played. An overwrite would leave fewer markers
/// than moves.
pub struct MonotonicBoard;

impl Invariant<GameEngine> for MonotonicBoard {
    fn holds(game: &GameEngine) -> bool {
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|cell| !cell.is_empty())
            .count();
        occupied == game.history().len()
            && game.history().iter().all(|pos| !game.board().is_empty(*pos))
    }

    fn description() -> &'static str {
        "Board only grows: each move adds exactly one marker"
    }
}

/// Invariant: players alternate, X first.
pub struct AlternatingTurn;

impl Invariant<GameEngine> for AlternatingTurn {
    fn holds(game: &GameEngine) -> bool {
        let x = game.board().count(Marker::X);
        let o = game.board().count(Marker::O);
        if x != o && x != o + 1 {
            return false;
        }

        match game.phase() {
            Phase::InProgress => {
                let expected = if x == o { Marker::X } else { Marker::O };
                game.current_player().map(|p| *p.marker()) == Some(expected)
            }
            Phase::Setup => x == 0 && o == 0,
            Phase::Finished => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: history replays onto the board.
///
/// No position appears twice, and the i-th move holds X for even i and O
/// for odd i.
pub struct HistoryConsistent;

impl Invariant<GameEngine> for HistoryConsistent {
    fn holds(game: &GameEngine) -> bool {
        let unique: HashSet<_> = game.history().iter().collect();
        if unique.len() != game.history().len() {
            return false;
        }

        game.history().iter().enumerate().all(|(i, pos)| {
            let expected = if i % 2 == 0 { Marker::X } else { Marker::O };
            game.board().get(*pos) == Cell::Marked(expected)
        })
    }

    fn description() -> &'static str {
        "Move history is consistent with the board"
    }
}

/// All engine invariants.
pub type EngineInvariants = (MonotonicBoard, AlternatingTurn, HistoryConsistent);
