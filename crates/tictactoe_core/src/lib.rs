//! Pure tic-tac-toe game logic.
//!
//! A [`GameEngine`] owns one [`Board`] and one match between two named
//! players. Moves go through [`GameEngine::play_round`] (cell index) or
//! [`GameEngine::play`] (typed [`Position`]) and come back as a tagged
//! [`RoundOutcome`]:
//!
//! ```
//! use tictactoe_core::{GameEngine, Marker, Outcome, RoundOutcome};
//!
//! let mut game = GameEngine::new();
//! game.init_game("Ada", "Grace");
//!
//! for index in [0, 3, 1, 4] {
//!     assert!(matches!(game.play_round(index)?, RoundOutcome::Continue { .. }));
//! }
//! assert_eq!(
//!     game.play_round(2)?,
//!     RoundOutcome::Finished(Outcome::Winner(Marker::X))
//! );
//! assert!(game.is_over());
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use board::{Board, CELL_COUNT};
pub use engine::{GameEngine, Outcome, Phase, RoundOutcome, Rejection};
pub use error::GameError;
pub use invariants::{
    AlternatingTurn, EngineInvariants, HistoryConsistent, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoard,
};
pub use position::Position;
pub use types::{Cell, Marker, Player};
