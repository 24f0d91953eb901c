//! Registry mapping chats to games and usernames to their chat.
//!
//! The dispatch layer owns one registry for the whole process and asks
//! it for the game behind an incoming message. Games are handed out as
//! shared handles; locking a game serializes its state-machine
//! transitions, which is the concurrency contract the core relies on.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, instrument, warn};

use crate::game::{ChatId, Game};

/// Shared, lockable handle to one game.
pub type GameHandle = Arc<Mutex<Game>>;

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RegistryError {
    /// The chat already hosts a running game.
    #[display("chat {_0} already has a running game")]
    ChatBusy(ChatId),
    /// The player is already part of another running game.
    #[display("player {_0} is already in a running game")]
    PlayerBusy(String),
}

impl std::error::Error for RegistryError {}

/// Tracks every running game in the process.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    games: HashMap<ChatId, GameHandle>,
    chat_by_username: HashMap<String, ChatId>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    /// Registers a game for its chat and claims its players' usernames.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ChatBusy`] if the chat already hosts a
    /// game, or [`RegistryError::PlayerBusy`] if any player is part of
    /// another running game. Nothing is registered on failure.
    #[instrument(skip(self, game), fields(chat = %game.chat()))]
    pub fn register_game(&self, game: Game) -> Result<GameHandle, RegistryError> {
        let mut inner = self.inner.lock().unwrap();

        let chat = game.chat().clone();
        if inner.games.contains_key(&chat) {
            warn!("Chat already has a game");
            return Err(RegistryError::ChatBusy(chat));
        }
        for player in game.players() {
            if inner.chat_by_username.contains_key(&player.username) {
                warn!(username = %player.username, "Player already in a game");
                return Err(RegistryError::PlayerBusy(player.username.clone()));
            }
        }

        for player in game.players() {
            inner
                .chat_by_username
                .insert(player.username.clone(), chat.clone());
        }
        let handle = Arc::new(Mutex::new(game));
        inner.games.insert(chat, Arc::clone(&handle));
        info!("Game registered");
        Ok(handle)
    }

    /// Returns the game running in a chat, if any.
    #[instrument(skip(self))]
    pub fn game(&self, chat: &ChatId) -> Option<GameHandle> {
        let inner = self.inner.lock().unwrap();
        let handle = inner.games.get(chat).cloned();
        if handle.is_none() {
            debug!(%chat, "No game in chat");
        }
        handle
    }

    /// Returns the game a player currently belongs to, if any.
    #[instrument(skip(self))]
    pub fn game_for_player(&self, username: &str) -> Option<GameHandle> {
        let inner = self.inner.lock().unwrap();
        inner
            .chat_by_username
            .get(username)
            .and_then(|chat| inner.games.get(chat))
            .cloned()
    }

    /// Removes a finished game and releases its players' usernames.
    ///
    /// Returns the removed handle so the caller can still read final
    /// scores.
    #[instrument(skip(self))]
    pub fn remove_game(&self, chat: &ChatId) -> Option<GameHandle> {
        let mut inner = self.inner.lock().unwrap();
        let handle = inner.games.remove(chat)?;
        inner.chat_by_username.retain(|_, c| c != chat);
        info!(%chat, "Game removed");
        Some(handle)
    }

    /// Lists the chats with a running game.
    pub fn chats(&self) -> Vec<ChatId> {
        let inner = self.inner.lock().unwrap();
        inner.games.keys().cloned().collect()
    }
}
