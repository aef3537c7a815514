//! Game rules for N-in-a-row games.
//!
//! This module holds the board dimensions and the pure functions that
//! classify a board after a move. Rules are separated from board storage
//! so the invariant checks can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, find_winner, lines_through, run_length_through, winning_line_through};

use super::error::RulesError;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRules")]
pub struct Rules {
    width: usize,
    height: usize,
    win_length: usize,
}

impl Rules {
    /// Creates validated rules.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if any dimension is zero, the cell count
    /// overflows `usize`, or the win length exceeds the longest side of
    /// the board.
    #[instrument]
    pub fn new(width: usize, height: usize, win_length: usize) -> Result<Self, RulesError> {
        if width == 0 || height == 0 {
            return Err(RulesError::new(format!(
                "board must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if width.checked_mul(height).is_none() {
            return Err(RulesError::new(format!(
                "board of {}x{} cells is too large",
                width, height
            )));
        }
        if win_length == 0 {
            return Err(RulesError::new("win length must be at least 1"));
        }
        if win_length > width.max(height) {
            return Err(RulesError::new(format!(
                "win length {} cannot fit on a {}x{} board",
                win_length, width, height
            )));
        }
        Ok(Self {
            width,
            height,
            win_length,
        })
    }

    /// Classic tic-tac-toe: 3x3, three in a row.
    pub const fn standard() -> Self {
        Self {
            width: 3,
            height: 3,
            win_length: 3,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Same-occupant cells needed in an unbroken line to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Diagonal lines are only considered on square boards.
    pub fn checks_diagonals(&self) -> bool {
        self.width == self.height
    }
}

/// Unvalidated form of [`Rules`] used during deserialization.
#[derive(Deserialize)]
struct RawRules {
    width: usize,
    height: usize,
    win_length: usize,
}

impl TryFrom<RawRules> for Rules {
    type Error = RulesError;

    fn try_from(raw: RawRules) -> Result<Self, Self::Error> {
        Rules::new(raw.width, raw.height, raw.win_length)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Classification of the board right after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    /// No win yet and empty cells remain.
    Playing,
    /// The mover completed a line.
    Won(Player),
    /// The board is full and nobody completed a line.
    Draw,
}

impl TerminalState {
    /// Returns true unless the game can continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalState::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules() {
        let rules = Rules::standard();
        assert_eq!(rules, Rules::new(3, 3, 3).unwrap());
        assert_eq!(rules.cell_count(), 9);
        assert!(rules.checks_diagonals());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(Rules::new(0, 3, 3).is_err());
        assert!(Rules::new(3, 0, 3).is_err());
        assert!(Rules::new(3, 3, 0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_cell_count() {
        let err = Rules::new(usize::MAX, 2, 2).unwrap_err();
        assert!(err.message.contains("too large"));
        assert!(Rules::new(2, usize::MAX, 2).is_err());

        let json = format!(r#"{{"width":{},"height":2,"win_length":2}}"#, usize::MAX);
        assert!(serde_json::from_str::<Rules>(&json).is_err());

        let rules = Rules::new(usize::MAX, 1, 1).unwrap();
        assert_eq!(rules.cell_count(), usize::MAX);
    }

    #[test]
    fn test_rejects_unreachable_win_length() {
        assert!(Rules::new(3, 3, 4).is_err());
        assert!(Rules::new(4, 3, 4).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let rules: Rules = serde_json::from_str(r#"{"width":4,"height":3,"win_length":3}"#).unwrap();
        assert_eq!(rules, Rules::new(4, 3, 3).unwrap());

        let bad = serde_json::from_str::<Rules>(r#"{"width":3,"height":3,"win_length":5}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_rectangular_board_skips_diagonals() {
        let rules = Rules::new(4, 3, 3).unwrap();
        assert!(!rules.checks_diagonals());
    }
}
