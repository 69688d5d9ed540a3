//! Error types for tic-tac-toe.

use derive_more::{Display, Error};

/// Programming errors at the engine boundary.
///
/// Occupied cells and finished games are not errors; they are reported
/// through [`RoundOutcome::Rejected`](crate::RoundOutcome::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// The offending index.
        index: usize,
    },
}
