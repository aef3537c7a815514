//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every move.
//! They are checked in debug builds and can be tested independently.

#[cfg(kani)]
mod verification;

pub mod alternating_turn;
pub mod lifecycle_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use lifecycle_consistent::LifecycleConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use super::session::GameSession;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if let Err(mut found) = <(I1, I2) as InvariantSet<S>>::check_all(state) {
            violations.append(&mut found);
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    LifecycleConsistentInvariant,
);

/// Panics if any session invariant is violated.
///
/// Called after every accepted move in debug builds.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
#[instrument(skip(session))]
pub fn assert_invariants(session: &GameSession) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Session invariants violated");
        panic!("Session invariants violated: {}", descriptions);
    }
}
