mod error;
mod evaluation;
mod game;
mod scoring;
mod state;
mod words;

pub use error::{NotActiveError, TransitionError};
pub use evaluation::ResultWords;
pub use game::{ChatId, Game, Player};
pub use scoring::{
    CEILING_SCORE, MAX_TABLE_LENGTH, MIN_SCORING_LENGTH, length_score, word_score,
};
pub use state::{RoundState, Transition};
pub use words::normalize_words;
