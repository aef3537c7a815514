//! Board state: cell occupancy, placement, and terminal-state evaluation.

use super::error::PlacementError;
use super::position::Position;
use super::rules::{self, Rules, TerminalState};
use super::types::{Occupant, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// A fixed-size grid of cells.
///
/// Cells are stored row-major. A cell, once occupied, stays occupied
/// until [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rules: Rules,
    cells: Vec<Occupant>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            cells: vec![Occupant::Empty; rules.cell_count()],
        }
    }

    /// Creates an empty 3x3 board.
    pub fn standard() -> Self {
        Self::new(Rules::standard())
    }

    /// Returns the rules this board was built with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rules.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rules.height()
    }

    /// Run length needed to win.
    pub fn win_length(&self) -> usize {
        self.rules.win_length()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Occupant] {
        &self.cells
    }

    /// Checks whether `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height() && pos.col < self.width()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width() + pos.col)
    }

    /// Gets the occupant at `pos`, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Occupant> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Reads the occupant at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] if `pos` is off the board.
    pub fn occupant_at(&self, pos: Position) -> Result<Occupant, PlacementError> {
        self.get(pos).ok_or(PlacementError::OutOfBounds(pos))
    }

    /// Puts `player`'s mark on the cell at `pos`.
    ///
    /// A failed placement leaves the board untouched.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::OutOfBounds`] if `pos` is off the board.
    /// - [`PlacementError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), PlacementError> {
        let index = self.index(pos).ok_or(PlacementError::OutOfBounds(pos))?;
        let cell = &mut self.cells[index];
        if !cell.is_empty() {
            return Err(PlacementError::CellOccupied(pos));
        }
        *cell = Occupant::Occupied(player);
        debug!(%pos, %player, "Placed mark");
        Ok(())
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells.fill(Occupant::Empty);
    }

    /// Classifies the board right after `mover` placed at `last_move`.
    ///
    /// Only lines through `last_move` are examined; a move cannot complete
    /// any other line. Diagonals are checked only on square boards.
    #[instrument(skip(self), fields(win_length = self.win_length()))]
    pub fn evaluate_terminal_state(&self, last_move: Position, mover: Player) -> TerminalState {
        if let Some(line) = rules::winning_line_through(self, last_move, mover) {
            debug!(?line, "Winning line completed");
            return TerminalState::Won(mover);
        }

        if rules::is_full(self) {
            TerminalState::Draw
        } else {
            TerminalState::Playing
        }
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width();
        (0..self.rules.cell_count()).map(move |i| Position::new(i / width, i % width))
    }

    /// Iterates over empty positions, i.e. the legal moves.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|pos| self.get(*pos) == Some(Occupant::Empty))
    }

    /// Iterates over occupied positions with their owners.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Player)> + '_ {
        self.positions()
            .zip(self.cells.iter())
            .filter_map(|(pos, cell)| cell.player().map(|player| (pos, player)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(self.width()).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = match cell {
                    Occupant::Empty => ".".to_string(),
                    Occupant::Occupied(player) => player.to_string(),
                };
                f.write_str(&symbol)?;
            }
        }
        Ok(())
    }
}
