//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A named participant bound to one marker for the whole match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, new, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker this player places.
    marker: Marker,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }

    #[test]
    fn cell_marker() {
        assert_eq!(Cell::Empty.marker(), None);
        assert_eq!(Cell::Marked(Marker::O).marker(), Some(Marker::O));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn player_getters() {
        let player = Player::new("Ada".to_string(), Marker::X);
        assert_eq!(player.name(), "Ada");
        assert_eq!(*player.marker(), Marker::X);
    }
}
