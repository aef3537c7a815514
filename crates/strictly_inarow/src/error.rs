//! Error types for board placement and rule construction.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error that can occur when placing a mark or reading a cell.
///
/// Neither variant is fatal: a presentation layer treats both as
/// "ignore the click".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum PlacementError {
    /// The position lies outside the board.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] Position),

    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}

impl PlacementError {
    /// Returns the position the failed operation targeted.
    pub fn position(&self) -> Position {
        match self {
            PlacementError::OutOfBounds(pos) | PlacementError::CellOccupied(pos) => *pos,
        }
    }
}

/// Invalid board dimensions or win length.
#[derive(Debug, Clone, Display, Error)]
#[display("Rules error: {} at {}:{}", message, file, line)]
pub struct RulesError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RulesError {
    /// Creates a new rules error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
