//! Typed cell addresses for the 3x3 board.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// A cell on the tic-tac-toe board, in row-major order (0-8).
///
/// `Display` prints the human label ("Top-left", ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::Display,
)]
pub enum Position {
    /// Top-left (index 0)
    #[strum(serialize = "Top-left")]
    TopLeft,
    /// Top-center (index 1)
    #[strum(serialize = "Top-center")]
    TopCenter,
    /// Top-right (index 2)
    #[strum(serialize = "Top-right")]
    TopRight,
    /// Middle-left (index 3)
    #[strum(serialize = "Middle-left")]
    MiddleLeft,
    /// Center (index 4)
    #[strum(serialize = "Center")]
    Center,
    /// Middle-right (index 5)
    #[strum(serialize = "Middle-right")]
    MiddleRight,
    /// Bottom-left (index 6)
    #[strum(serialize = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (index 7)
    #[strum(serialize = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (index 8)
    #[strum(serialize = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row (0-2) this position sits in.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) this position sits in.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column (each 0-2).
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Position::from_index(index).ok_or(GameError::OutOfBounds { index })
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> usize {
        pos.to_index()
    }
}
