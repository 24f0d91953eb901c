//! Round lifecycle states and transition labels.

use serde::{Deserialize, Serialize};

/// Where a game sits in its round lifecycle.
///
/// `Waiting` -> `Active` -> `Stopped` -> `Waiting`, driven by
/// [`Game::start_round`](crate::Game::start_round),
/// [`Game::stop_round`](crate::Game::stop_round) and
/// [`Game::next_round`](crate::Game::next_round).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "lowercase")]
pub enum RoundState {
    /// No active round; players may ready up.
    Waiting,
    /// A round is collecting words.
    Active,
    /// The round ended and awaits evaluation.
    Stopped,
}

/// Label for a state-machine operation, used in transition errors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Begin collecting words (requires `Waiting`).
    StartRound,
    /// Stop collecting words (requires `Active`).
    StopRound,
    /// Re-open the readiness handshake (requires `Stopped`).
    NextRound,
}
