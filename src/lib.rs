//! Strictly Boggle - pure game logic for a round-based word-finding game.
//!
//! A 4x4 board of lettered tiles is rolled from a fixed dice catalog;
//! players submit words during a timed round, and the engine decides
//! which words trace a valid path on the board, deduplicates words
//! found by several players, and keeps per-round and cumulative scores.
//!
//! # Architecture
//!
//! - **Board**: dice distribution, adjacency graph, and the glyph-aware
//!   backtracking search behind [`Board::exists`]
//! - **Game**: round lifecycle state machine, word ingestion, word
//!   evaluation, and scoring
//! - **Dictionary**: injected membership test over the host's vocabulary
//! - **Registry**: chat-to-game and player-to-game lookup for the
//!   dispatch layer
//!
//! The chat transport, timers, and dictionary loading live outside this
//! crate; it only exchanges plain data with them.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use strictly_boggle::{Board, Game, Player};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(vec![Player::new("ana")], "some-chat".into());
//! game.start_round(Board::new())?;
//! game.add_text("ana", "casa PERRO")?;
//! game.stop_round()?;
//!
//! let dictionary: HashSet<String> = ["casa", "perro"].map(String::from).into_iter().collect();
//! let results = game.evaluate_words(&dictionary);
//! let round_scores = game.summarize_scores(&results);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod dictionary;
mod game;
mod registry;

// Crate-level exports - Board types
pub use board::{AdjacencyGraph, Board, DICE, Die, Distribution, GRID_SIZE, LocatedGlyph};

// Crate-level exports - Dictionary seam
pub use dictionary::Dictionary;

// Crate-level exports - Game types
pub use game::{
    CEILING_SCORE, ChatId, Game, MAX_TABLE_LENGTH, MIN_SCORING_LENGTH, NotActiveError, Player,
    ResultWords, RoundState, Transition, TransitionError, length_score, normalize_words,
    word_score,
};

// Crate-level exports - Registry
pub use registry::{GameHandle, GameRegistry, RegistryError};
