//! Lifecycle invariant: the session state agrees with the board.

use super::super::rules::{find_winner, is_full};
use super::super::session::{GameSession, Outcome, SessionState};
use super::Invariant;

/// Invariant: The session is playing iff nobody has won and the board has
/// room.
///
/// A won game names the player who holds a winning line and who made the
/// final move. A drawn game has a full board with no winner.
pub struct LifecycleConsistentInvariant;

impl Invariant<GameSession> for LifecycleConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let winner = find_winner(board);

        match session.state() {
            SessionState::Playing => winner.is_none() && !is_full(board),
            SessionState::Ended(Outcome::Draw) => winner.is_none() && is_full(board),
            SessionState::Ended(Outcome::Won(player)) => {
                winner == Some(player)
                    && session.history().last().map(|m| m.player) == Some(player)
            }
        }
    }

    fn description() -> &'static str {
        "Session state matches the board (playing iff no winner and empty cells remain)"
    }
}
