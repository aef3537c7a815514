//! Draw detection for N-in-a-row games.

use super::super::board::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells remain).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
