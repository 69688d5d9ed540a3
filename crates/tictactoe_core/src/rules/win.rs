//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Position};
use tracing::instrument;

/// Three positions forming a winning line.
pub type Line = [Position; 3];

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the marker owning a line, if all three cells hold it.
fn line_owner(board: &Board, [a, b, c]: Line) -> Option<Marker> {
    let marker = board.get(a).marker()?;
    (board.get(b).marker() == Some(marker) && board.get(c).marker() == Some(marker))
        .then_some(marker)
}

/// Every satisfied line on the board, with its owner.
///
/// All 8 lines are scanned. Legal play completes at most one line per
/// move, but a final move can complete two lines at once (e.g. a row and a
/// diagonal through the same cell).
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<(Line, Marker)> {
    LINES
        .iter()
        .filter_map(|line| line_owner(board, *line).map(|marker| (*line, marker)))
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if a marker has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_lines(board).first().map(|(_, marker)| *marker)
}
