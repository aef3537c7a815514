//! Notification surface for presentation layers.
//!
//! A [`GameSession`](crate::GameSession) calls its observers synchronously,
//! in registration order, after each state change. Observers never see a
//! half-applied move.

use super::session::Outcome;
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, instrument};

/// Receives session notifications.
///
/// Every method defaults to a no-op so implementors only override what
/// they render.
pub trait SessionObserver {
    /// A new game started; `starting_player` moves first.
    fn on_session_started(&mut self, starting_player: Player) {
        let _ = starting_player;
    }

    /// The previous move passed the turn to `current_player`.
    fn on_turn_changed(&mut self, current_player: Player) {
        let _ = current_player;
    }

    /// The game ended.
    fn on_game_ended(&mut self, outcome: Outcome) {
        let _ = outcome;
    }
}

/// A session notification as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new game started.
    SessionStarted(Player),
    /// The turn passed to this player.
    TurnChanged(Player),
    /// The game ended.
    GameEnded(Outcome),
}

impl SessionEvent {
    /// Delivers this event to `observer`.
    pub fn dispatch(self, observer: &mut dyn SessionObserver) {
        match self {
            SessionEvent::SessionStarted(player) => observer.on_session_started(player),
            SessionEvent::TurnChanged(player) => observer.on_turn_changed(player),
            SessionEvent::GameEnded(outcome) => observer.on_game_ended(outcome),
        }
    }
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::SessionStarted(player) => write!(f, "New game, player {} starts", player),
            SessionEvent::TurnChanged(player) => write!(f, "Player {} to move", player),
            SessionEvent::GameEnded(outcome) => write!(f, "Game over: {}", outcome),
        }
    }
}

/// Observer that records every notification.
///
/// Clones share the same log: subscribe one clone and read from another.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    /// Returns the most recent event.
    pub fn last(&self) -> Option<SessionEvent> {
        self.events.borrow().last().copied()
    }

    /// Removes and returns the recorded events.
    pub fn drain(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn record(&self, event: SessionEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SessionObserver for EventLog {
    fn on_session_started(&mut self, starting_player: Player) {
        self.record(SessionEvent::SessionStarted(starting_player));
    }

    fn on_turn_changed(&mut self, current_player: Player) {
        self.record(SessionEvent::TurnChanged(current_player));
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.record(SessionEvent::GameEnded(outcome));
    }
}

/// Input-acceptance gate driven by session notifications.
///
/// Opens when a game starts and closes when it ends, so a presentation
/// layer can hold off input while its end-of-game visuals play. The layer
/// calls [`InputGate::reopen`] once it is ready for the click that starts
/// the next game. Turn changes leave the gate alone.
///
/// Clones share state: subscribe one clone to the session and keep
/// another to query.
#[derive(Debug, Clone)]
pub struct InputGate {
    open: Rc<Cell<bool>>,
}

impl InputGate {
    /// Creates a closed gate. It opens on the first `SessionStarted`.
    pub fn new() -> Self {
        Self {
            open: Rc::new(Cell::new(false)),
        }
    }

    /// Returns true if input should be accepted.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Accepts input again after the end-of-game presentation finishes.
    #[instrument(skip(self))]
    pub fn reopen(&self) {
        self.open.set(true);
    }

    /// Stops accepting input.
    #[instrument(skip(self))]
    pub fn close(&self) {
        self.open.set(false);
    }
}

impl Default for InputGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for InputGate {
    fn on_session_started(&mut self, _starting_player: Player) {
        self.open.set(true);
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        debug!(%outcome, "Freezing input");
        self.open.set(false);
    }
}
