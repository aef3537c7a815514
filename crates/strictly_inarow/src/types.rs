//! Core domain types for N-in-a-row games.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player A (goes first).
    #[display("A")]
    A,
    /// Player B (goes second).
    #[display("B")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// The value held by a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupant {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Occupant {
    /// Returns true if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(player) => Some(player),
        }
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        Occupant::Occupied(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_occupant_player() {
        assert_eq!(Occupant::Empty.player(), None);
        assert_eq!(Occupant::from(Player::B).player(), Some(Player::B));
        assert!(Occupant::default().is_empty());
    }
}
