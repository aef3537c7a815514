//! Kani proof harnesses for board placement and terminal evaluation.
//!
//! Bounded to the standard 3x3 board.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Occupant, PlacementError, Player, Position, TerminalState};

    fn any_player() -> Player {
        if kani::any() { Player::A } else { Player::B }
    }

    fn any_position() -> Position {
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row < 5 && col < 5);
        Position::new(row, col)
    }

    /// A failed placement never mutates the board.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_failed_place_is_noop() {
        let mut board = Board::standard();
        board.place(Position::new(1, 1), Player::A).ok();

        let before = board.clone();
        let pos = any_position();
        if let Err(err) = board.place(pos, any_player()) {
            assert!(matches!(
                err,
                PlacementError::OutOfBounds(_) | PlacementError::CellOccupied(_)
            ));
            assert!(board == before);
        }
    }

    /// A successful placement occupies exactly the target cell.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_place_sets_cell() {
        let mut board = Board::standard();
        let pos = any_position();
        let player = any_player();
        if board.place(pos, player).is_ok() {
            assert!(board.occupant_at(pos) == Ok(Occupant::Occupied(player)));
            assert!(board.empty_cells().count() == 8);
        }
    }

    /// The first move on a 3x3 board never ends the game.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_first_move_keeps_playing() {
        let mut board = Board::standard();
        let pos = any_position();
        kani::assume(board.contains(pos));
        let player = any_player();
        board.place(pos, player).ok();
        assert!(board.evaluate_terminal_state(pos, player) == TerminalState::Playing);
    }
}
