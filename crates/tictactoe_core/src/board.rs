//! The 3x3 grid.

use crate::error::GameError;
use crate::position::Position;
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Places `marker` at `position` if the cell is empty.
    ///
    /// Returns `false` and leaves the board untouched when the cell is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, marker: Marker) -> bool {
        let cell = &mut self.cells[position.to_index()];
        if cell.is_empty() {
            *cell = Cell::Marked(marker);
            true
        } else {
            debug!(?cell, "Cell already occupied");
            false
        }
    }

    /// Index-based [`place`](Self::place). Indices outside 0-8 are an error.
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize, marker: Marker) -> Result<bool, GameError> {
        let position = Position::try_from(index)?;
        Ok(self.place(position, marker))
    }

    /// Gets the cell at the given position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// Returns all cells as a read-only view.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// True once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(marker))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Three rows separated by `-+-+-`; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
