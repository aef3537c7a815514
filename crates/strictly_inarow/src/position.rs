//! Grid coordinates and recorded moves.

use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the grid, addressed by row and column (both 0-based).
///
/// Positions are plain coordinates and may lie outside any particular
/// board; the board rejects them with
/// [`PlacementError::OutOfBounds`](crate::PlacementError::OutOfBounds).
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
    derive_more::Display,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Steps one cell in direction `(d_row, d_col)`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// The upper bounds are the caller's business.
    pub(crate) fn step(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A placement made during a game: a player putting their mark on a cell.
///
/// Moves are recorded in session history and can be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}
