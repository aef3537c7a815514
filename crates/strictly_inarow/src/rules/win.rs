//! Win detection for N-in-a-row games.
//!
//! A move can only complete a line that passes through it, so the
//! per-move check walks at most four lines outward from the last move
//! instead of rescanning the board.

use super::super::board::Board;
use super::super::position::Position;
use super::super::types::{Occupant, Player};
use super::Rules;
use tracing::instrument;

/// A line direction through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
    /// Top-left to bottom-right corner.
    Diagonal,
    /// Top-right to bottom-left corner.
    AntiDiagonal,
}

impl Line {
    /// Unit step `(d_row, d_col)` along the line.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Line::Row => (0, 1),
            Line::Column => (1, 0),
            Line::Diagonal => (1, 1),
            Line::AntiDiagonal => (1, -1),
        }
    }

    /// Returns true if this line is checked through `pos` under `rules`.
    ///
    /// Rows and columns always are. Diagonals only on square boards, and
    /// only the two corner-to-corner diagonals.
    pub fn applies(self, rules: &Rules, pos: Position) -> bool {
        match self {
            Line::Row | Line::Column => true,
            Line::Diagonal => rules.checks_diagonals() && pos.row == pos.col,
            Line::AntiDiagonal => {
                rules.checks_diagonals() && pos.row + pos.col + 1 == rules.width()
            }
        }
    }
}

/// Lines through `pos` that can hold a win under `rules`.
pub fn lines_through(rules: Rules, pos: Position) -> impl Iterator<Item = Line> {
    <Line as strum::IntoEnumIterator>::iter().filter(move |line| line.applies(&rules, pos))
}

/// Length of the contiguous run of `player` cells along `line` that
/// includes `pos`.
///
/// Returns 0 if `pos` itself is not held by `player`.
pub fn run_length_through(board: &Board, pos: Position, player: Player, line: Line) -> usize {
    let mine = Occupant::Occupied(player);
    if board.get(pos) != Some(mine) {
        return 0;
    }

    let (d_row, d_col) = line.delta();
    let walk = |d_row: isize, d_col: isize| {
        std::iter::successors(pos.step(d_row, d_col), |p| p.step(d_row, d_col))
            .take_while(|p| board.get(*p) == Some(mine))
            .count()
    };

    1 + walk(d_row, d_col) + walk(-d_row, -d_col)
}

/// Checks whether `player` holds a winning run through `pos`.
#[instrument(skip(board), fields(win_length = board.win_length()))]
pub fn winning_line_through(board: &Board, pos: Position, player: Player) -> Option<Line> {
    lines_through(*board.rules(), pos)
        .find(|line| run_length_through(board, pos, player, *line) >= board.win_length())
}

/// Scans the whole board for a winning run.
///
/// Applies the same line restrictions as the per-move check. Returns the
/// first winner found in row-major order.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Player> {
    board.occupied().find_map(|(pos, player)| {
        winning_line_through(board, pos, player).map(|_| player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rules: Rules, moves: &[((usize, usize), Player)]) -> Board {
        let mut board = Board::new(rules);
        for (pos, player) in moves {
            board.place((*pos).into(), *player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(Rules::standard());
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Rules::standard(),
            &[((0, 0), Player::A), ((0, 1), Player::A), ((0, 2), Player::A)],
        );
        assert_eq!(
            winning_line_through(&board, Position::new(0, 1), Player::A),
            Some(Line::Row)
        );
        assert_eq!(find_winner(&board), Some(Player::A));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Rules::standard(),
            &[((0, 2), Player::B), ((1, 1), Player::B), ((2, 0), Player::B)],
        );
        assert_eq!(
            winning_line_through(&board, Position::new(2, 0), Player::B),
            Some(Line::AntiDiagonal)
        );
    }

    #[test]
    fn test_run_counts_both_directions() {
        let board = board_with(
            Rules::new(5, 5, 4).unwrap(),
            &[((2, 0), Player::A), ((2, 1), Player::A), ((2, 3), Player::A)],
        );
        assert_eq!(
            run_length_through(&board, Position::new(2, 1), Player::A, Line::Row),
            2
        );
        assert_eq!(
            run_length_through(&board, Position::new(2, 3), Player::A, Line::Row),
            1
        );
        assert_eq!(
            run_length_through(&board, Position::new(2, 2), Player::A, Line::Row),
            0
        );
    }

    #[test]
    fn test_diagonals_ignored_on_rectangular_board() {
        let board = board_with(
            Rules::new(4, 3, 3).unwrap(),
            &[((0, 0), Player::A), ((1, 1), Player::A), ((2, 2), Player::A)],
        );
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_off_corner_diagonal_not_checked() {
        // Known limitation: only corner-to-corner diagonals count.
        let board = board_with(
            Rules::new(4, 4, 3).unwrap(),
            &[((0, 1), Player::A), ((1, 2), Player::A), ((2, 3), Player::A)],
        );
        assert_eq!(find_winner(&board), None);
    }
}
