//! The game: players, round lifecycle, word collection, and scores.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::error::{NotActiveError, TransitionError};
use super::evaluation::{ResultWords, mark_repeated};
use super::scoring::word_score;
use super::state::{RoundState, Transition};
use super::words::normalize_words;
use crate::board::Board;
use crate::dictionary::Dictionary;

/// Opaque handle to a chat where messages can be delivered.
///
/// The core never sends anything itself; the handle only travels back
/// out to the messaging layer.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct ChatId(String);

impl From<&str> for ChatId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A participant in one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique username; the registry keys players by it.
    pub username: String,
    /// Whether the player said ready for the upcoming round.
    pub ready: bool,
    /// Private chat handle, learned when the player first says ready.
    pub private_chat: Option<ChatId>,
}

impl Player {
    /// Creates a player who has not readied up yet.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ready: false,
            private_chat: None,
        }
    }
}

/// A complete game, composed of several rounds, bound to one chat.
///
/// Mutated only through its own state-machine operations; the host is
/// responsible for serializing access per game (see
/// [`GameRegistry`](crate::GameRegistry)).
#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    chat: ChatId,
    state: RoundState,
    board: Option<Board>,
    full_scores: HashMap<String, u32>,
    round_words: HashMap<String, HashSet<String>>,
}

impl Game {
    /// Creates a game in the `Waiting` state.
    ///
    /// Every player starts with an accumulated score of zero.
    #[instrument(skip(players), fields(chat = %chat, players = players.len()))]
    pub fn new(players: Vec<Player>, chat: ChatId) -> Self {
        info!("Creating new game");
        let full_scores = players
            .iter()
            .map(|player| (player.username.clone(), 0))
            .collect();
        Self {
            players,
            chat,
            state: RoundState::Waiting,
            board: None,
            full_scores,
            round_words: HashMap::new(),
        }
    }

    /// Adds a player mid-game, seeding their accumulated score at zero.
    #[instrument(skip(self, player), fields(chat = %self.chat, username = %player.username))]
    pub fn add_player(&mut self, player: Player) {
        info!("Adding player");
        self.full_scores.entry(player.username.clone()).or_insert(0);
        self.players.push(player);
    }

    /// Returns the players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the chat this game belongs to.
    pub fn chat(&self) -> &ChatId {
        &self.chat
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the active board, present while a round is active or just stopped.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Returns the accumulated scores, keyed by username.
    pub fn full_scores(&self) -> &HashMap<String, u32> {
        &self.full_scores
    }

    /// Returns the words collected so far this round, keyed by username.
    pub fn round_words(&self) -> &HashMap<String, HashSet<String>> {
        &self.round_words
    }

    // ─────────────────────────────────────────────────────────────
    //  Readiness handshake
    // ─────────────────────────────────────────────────────────────

    /// Marks a player ready and records their private chat handle.
    ///
    /// Returns false if the username does not belong to this game.
    #[instrument(skip(self, private_chat), fields(chat = %self.chat))]
    pub fn mark_ready(&mut self, username: &str, private_chat: Option<ChatId>) -> bool {
        match self.players.iter_mut().find(|p| p.username == username) {
            Some(player) => {
                player.ready = true;
                if private_chat.is_some() {
                    player.private_chat = private_chat;
                }
                debug!(username, "Player is ready");
                true
            }
            None => {
                warn!(username, "Unknown player tried to ready up");
                false
            }
        }
    }

    /// Returns the usernames still missing from the readiness handshake.
    pub fn pending_players(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| !p.ready)
            .map(|p| p.username.as_str())
            .collect()
    }

    /// Returns true once every player said ready.
    pub fn all_ready(&self) -> bool {
        self.players.iter().all(|p| p.ready)
    }

    // ─────────────────────────────────────────────────────────────
    //  Round lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Starts a round on the given board and begins collecting words.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the game is `Waiting`.
    #[instrument(skip(self, board), fields(chat = %self.chat, state = %self.state))]
    pub fn start_round(&mut self, board: Board) -> Result<(), TransitionError> {
        if self.state != RoundState::Waiting {
            warn!("Rejected start_round");
            return Err(TransitionError {
                attempted: Transition::StartRound,
                state: self.state,
            });
        }
        self.round_words = HashMap::new();
        self.board = Some(board);
        self.state = RoundState::Active;
        info!("Round started");
        Ok(())
    }

    /// Stops the round so no more words are received.
    ///
    /// The board stays in place for evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the game is `Active`.
    #[instrument(skip(self), fields(chat = %self.chat, state = %self.state))]
    pub fn stop_round(&mut self) -> Result<(), TransitionError> {
        if self.state != RoundState::Active {
            warn!("Rejected stop_round");
            return Err(TransitionError {
                attempted: Transition::StopRound,
                state: self.state,
            });
        }
        self.state = RoundState::Stopped;
        info!("Round stopped");
        Ok(())
    }

    /// Goes back to waiting for every player before the next round.
    ///
    /// Resets each player's ready flag and discards the spent board.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the game is `Stopped`.
    #[instrument(skip(self), fields(chat = %self.chat, state = %self.state))]
    pub fn next_round(&mut self) -> Result<(), TransitionError> {
        if self.state != RoundState::Stopped {
            warn!("Rejected next_round");
            return Err(TransitionError {
                attempted: Transition::NextRound,
                state: self.state,
            });
        }
        for player in &mut self.players {
            player.ready = false;
        }
        self.board = None;
        self.state = RoundState::Waiting;
        info!("Waiting for players to ready up");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Word ingestion
    // ─────────────────────────────────────────────────────────────

    /// Adds the words in a text message to the submitting user's round set.
    ///
    /// The text is normalized (lower-cased, punctuation and accents
    /// stripped) and split on whitespace; resubmitting a word is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NotActiveError`] when no round is collecting words; in
    /// that case nothing is recorded and the caller decides whether to
    /// tell the sender the words arrived too late or too early.
    #[instrument(skip(self, text), fields(chat = %self.chat, state = %self.state))]
    pub fn add_text(&mut self, username: &str, text: &str) -> Result<(), NotActiveError> {
        if self.state != RoundState::Active {
            warn!(username, "Words arrived outside an active round");
            return Err(NotActiveError { state: self.state });
        }
        let words = normalize_words(text);
        debug!(username, count = words.len(), "Adding words");
        self.round_words
            .entry(username.to_string())
            .or_default()
            .extend(words);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Evaluation and scoring
    // ─────────────────────────────────────────────────────────────

    /// Classifies every user's round words against the dictionary and board.
    ///
    /// Words absent from the dictionary go to `not_in_language`;
    /// dictionary words tracing no board path go to `not_in_board`; the
    /// rest are `valid` until the cross-player pass moves words found
    /// by two or more users into everyone's `repeated` set. Total over
    /// any reachable game state: with no submissions the result is
    /// simply empty.
    #[instrument(skip(self, dictionary), fields(chat = %self.chat))]
    pub fn evaluate_words<D: Dictionary>(&self, dictionary: &D) -> HashMap<String, ResultWords> {
        let mut results: HashMap<String, ResultWords> = HashMap::new();
        for (username, words) in &self.round_words {
            let result = results.entry(username.clone()).or_default();
            for word in words {
                if !dictionary.is_word(word) {
                    result.not_in_language.insert(word.clone());
                } else if !self.board.as_ref().is_some_and(|board| board.exists(word)) {
                    result.not_in_board.insert(word.clone());
                } else {
                    result.valid.insert(word.clone());
                }
            }
            debug!(
                username,
                valid = result.valid.len(),
                not_in_language = result.not_in_language.len(),
                not_in_board = result.not_in_board.len(),
                "Classified round words"
            );
        }
        mark_repeated(&mut results);
        results
    }

    /// Computes round scores and folds them into the accumulated totals.
    ///
    /// Only `valid` words score; the round-only scores are returned
    /// while `full_scores` grows by the same amounts (entries are
    /// created at zero for users never scored before).
    #[instrument(skip(self, results), fields(chat = %self.chat))]
    pub fn summarize_scores(
        &mut self,
        results: &HashMap<String, ResultWords>,
    ) -> HashMap<String, u32> {
        let mut round_scores = HashMap::new();
        for (username, result) in results {
            let score: u32 = result.valid.iter().map(|word| word_score(word)).sum();
            *self.full_scores.entry(username.clone()).or_insert(0) += score;
            round_scores.insert(username.clone(), score);
        }
        info!(users = round_scores.len(), "Summarized round scores");
        round_scores
    }
}
