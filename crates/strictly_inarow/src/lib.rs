//! Strictly In-a-Row - pure N-in-a-row grid game logic
//!
//! The engine behind tic-tac-toe and its larger cousins, with no rendering,
//! input handling, or I/O. A presentation layer owns a [`GameSession`],
//! feeds it grid positions, and renders the notifications it emits.
//!
//! # Architecture
//!
//! - **Board**: cell occupancy, placement, and per-move terminal-state
//!   evaluation that only walks the lines through the last move
//! - **Session**: turn order and the playing → ended → reset lifecycle
//! - **Observer**: synchronous notifications plus an input gate for
//!   presentation layers
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_inarow::{EventLog, GameSession, MoveOutcome, Outcome, Player, Position};
//!
//! let log = EventLog::new();
//! let mut session = GameSession::standard();
//! session.subscribe(log.clone());
//! session.new_game();
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     session.submit_move(Position::new(row, col)).unwrap();
//! }
//! let result = session.submit_move(Position::new(0, 2)).unwrap();
//! assert_eq!(result, MoveOutcome::Ended(Outcome::Won(Player::A)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod invariants;
mod observer;
mod position;
mod rules;
mod session;
mod types;

// Crate-level exports - Domain types
pub use position::{Move, Position};
pub use types::{Occupant, Player};

// Crate-level exports - Board and rules
pub use board::Board;
pub use rules::{Line, Rules, TerminalState, find_winner, is_full, run_length_through};

// Crate-level exports - Errors
pub use error::{PlacementError, RulesError};

// Crate-level exports - Session lifecycle
pub use session::{GameSession, MoveOutcome, Outcome, SessionState};

// Crate-level exports - Notifications
pub use observer::{EventLog, InputGate, SessionEvent, SessionObserver};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    LifecycleConsistentInvariant, MonotonicBoardInvariant, SessionInvariants,
};
