//! Error types for the round state machine.
//!
//! Both errors are recoverable ordering bugs upstream (a double /listo,
//! a word arriving after time is up); the caller answers the user and
//! the game keeps running.

use super::state::{RoundState, Transition};

/// A state-machine operation was invoked from the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("cannot {attempted} while round state is {state}")]
pub struct TransitionError {
    /// The operation that was attempted.
    pub attempted: Transition,
    /// The state the game was actually in.
    pub state: RoundState,
}

impl std::error::Error for TransitionError {}

/// A word submission arrived while no round was active.
///
/// The core guarantees the words were not recorded; whether to notify
/// the sender is the caller's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("words can only be added while a round is active (state is {state})")]
pub struct NotActiveError {
    /// The state the game was in when the words arrived.
    pub state: RoundState,
}

impl std::error::Error for NotActiveError {}
