//! Alternating turn invariant: players alternate A, B, A, B, ...

use super::super::session::GameSession;
use super::super::types::Player;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show an A, B, A, B, ... pattern starting with A.
/// While the game is in progress, the player to move follows from the
/// history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.player != Player::A
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if !session.is_playing() {
            // The last mover keeps the turn once the game ends.
            return history
                .last()
                .is_some_and(|last| last.player == session.current_turn());
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::A
        } else {
            Player::B
        };

        session.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}
