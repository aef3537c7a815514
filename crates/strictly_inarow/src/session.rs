//! Turn sequencing and game lifecycle.
//!
//! A [`GameSession`] owns one [`Board`] for its whole life. It alternates
//! turns, asks the board whether each move ended the game, and notifies
//! its observers of every transition:
//!
//! ```text
//! new_game() ──► Playing ──submit_move──► Playing (turn flips)
//!                   │
//!                   └──submit_move──► Ended(Won | Draw) ──new_game()──► Playing
//! ```

use super::board::Board;
use super::error::PlacementError;
use super::observer::{SessionEvent, SessionObserver};
use super::position::{Move, Position};
use super::rules::{Rules, TerminalState};
use super::types::{Occupant, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Won(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Moves are accepted.
    Playing,
    /// Terminal until the next `new_game()`.
    Ended(Outcome),
}

/// What a call to [`GameSession::submit_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game was already over; nothing changed.
    Ignored,
    /// The move was placed and the turn passed to this player.
    TurnPassed(Player),
    /// The move was placed and ended the game.
    Ended(Outcome),
}

/// A game session: one board, two players, alternating turns.
///
/// Owned and driven by a single caller. All operations complete before
/// returning; observers are called inline.
pub struct GameSession {
    board: Board,
    current_turn: Player,
    state: SessionState,
    history: Vec<Move>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Creates a session with a fresh board.
    ///
    /// The session is ready to play but emits nothing until
    /// [`GameSession::new_game`] is called.
    #[instrument]
    pub fn new(rules: Rules) -> Self {
        Self {
            board: Board::new(rules),
            current_turn: Player::A,
            state: SessionState::Playing,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Creates a session on the standard 3x3 board.
    pub fn standard() -> Self {
        Self::new(Rules::standard())
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Starts a new game, abandoning any game in progress.
    ///
    /// Clears the board and history, gives the first turn to
    /// [`Player::A`], and emits `SessionStarted`.
    #[instrument(skip(self), fields(previous = ?self.state, moves = self.history.len()))]
    pub fn new_game(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current_turn = Player::A;
        self.state = SessionState::Playing;

        info!(starting_player = %self.current_turn, "Started new game");
        self.notify(SessionEvent::SessionStarted(self.current_turn));
    }

    /// Places the current player's mark at `position`.
    ///
    /// While the game is over the call is ignored and returns
    /// [`MoveOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns the board's [`PlacementError`] if the position is off the
    /// board or already taken. The session is unchanged in that case and
    /// the same player is still to move.
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn submit_move(&mut self, position: Position) -> Result<MoveOutcome, PlacementError> {
        if let SessionState::Ended(outcome) = self.state {
            debug!(%outcome, "Game already over, ignoring move");
            return Ok(MoveOutcome::Ignored);
        }

        let mover = self.current_turn;
        if let Err(error) = self.board.place(position, mover) {
            warn!(%position, player = %mover, %error, "Rejected move");
            return Err(error);
        }
        self.history.push(Move::new(mover, position));
        debug!(%position, player = %mover, "Move accepted");

        let result = match self.board.evaluate_terminal_state(position, mover) {
            TerminalState::Won(winner) => self.end(Outcome::Won(winner)),
            TerminalState::Draw => self.end(Outcome::Draw),
            TerminalState::Playing => {
                self.current_turn = mover.opponent();
                debug!(next = %self.current_turn, "Turn changed");
                self.notify(SessionEvent::TurnChanged(self.current_turn));
                MoveOutcome::TurnPassed(self.current_turn)
            }
        };

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(result)
    }

    fn end(&mut self, outcome: Outcome) -> MoveOutcome {
        self.state = SessionState::Ended(outcome);
        info!(%outcome, moves = self.history.len(), "Ended game");
        self.notify(SessionEvent::GameEnded(outcome));
        MoveOutcome::Ended(outcome)
    }

    fn notify(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            event.dispatch(observer.as_mut());
        }
    }

    /// Reads a cell, for rendering or legality checks.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] for positions off the board.
    pub fn occupant_at(&self, position: Position) -> Result<Occupant, PlacementError> {
        self.board.occupant_at(position)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game ended).
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Playing => None,
            SessionState::Ended(outcome) => Some(outcome),
        }
    }

    /// Returns true while moves are accepted.
    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Returns the moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays `positions` in order on a fresh session.
    ///
    /// Positions after the game ends are ignored, as with any other
    /// `submit_move` on a finished game.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected placement and returns its error.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(rules: Rules, positions: &[Position]) -> Result<Self, PlacementError> {
        let mut session = Self::new(rules);
        session.new_game();
        for position in positions {
            session.submit_move(*position)?;
        }
        Ok(session)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("current_turn", &self.current_turn)
            .field("state", &self.state)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventLog;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_session_is_silent_until_new_game() {
        let log = EventLog::new();
        let mut session = GameSession::standard();
        session.subscribe(log.clone());
        assert!(log.events().is_empty());
        assert!(session.is_playing());

        session.new_game();
        assert_eq!(log.events(), vec![SessionEvent::SessionStarted(Player::A)]);
    }

    #[test]
    fn test_turn_alternates() {
        let mut session = GameSession::standard();
        session.new_game();
        assert_eq!(session.current_turn(), Player::A);

        assert_eq!(
            session.submit_move(pos(1, 1)),
            Ok(MoveOutcome::TurnPassed(Player::B))
        );
        assert_eq!(session.current_turn(), Player::B);
        assert_eq!(
            session.submit_move(pos(0, 0)),
            Ok(MoveOutcome::TurnPassed(Player::A))
        );
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::standard();
        session.new_game();
        session.submit_move(pos(1, 1)).unwrap();

        assert_eq!(
            session.submit_move(pos(1, 1)),
            Err(PlacementError::CellOccupied(pos(1, 1)))
        );
        assert_eq!(
            session.submit_move(pos(0, 3)),
            Err(PlacementError::OutOfBounds(pos(0, 3)))
        );
        assert_eq!(session.current_turn(), Player::B);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Won(Player::A).to_string(), "Player A wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Won(Player::B).winner(), Some(Player::B));
    }
}
