//! Tests for the game registry.

use strictly_boggle::{Game, GameRegistry, Player, RegistryError, RoundState};

fn game_in(chat: &str, players: &[&str]) -> Game {
    let players = players.iter().map(|name| Player::new(*name)).collect();
    Game::new(players, chat.into())
}

#[test]
fn test_register_and_look_up_by_chat() {
    let registry = GameRegistry::new();
    registry
        .register_game(game_in("chat-1", &["ana", "bob"]))
        .expect("fresh chat registers");

    let handle = registry.game(&"chat-1".into()).expect("game is registered");
    assert_eq!(handle.lock().unwrap().state(), RoundState::Waiting);
    assert!(registry.game(&"chat-2".into()).is_none());
}

#[test]
fn test_look_up_by_player() {
    let registry = GameRegistry::new();
    registry
        .register_game(game_in("chat-1", &["ana", "bob"]))
        .unwrap();

    let handle = registry.game_for_player("bob").expect("bob is playing");
    assert_eq!(handle.lock().unwrap().chat(), &"chat-1".into());
    assert!(registry.game_for_player("carla").is_none());
}

#[test]
fn test_one_game_per_chat() {
    let registry = GameRegistry::new();
    registry.register_game(game_in("chat-1", &["ana"])).unwrap();

    let err = registry
        .register_game(game_in("chat-1", &["bob"]))
        .unwrap_err();
    assert_eq!(err, RegistryError::ChatBusy("chat-1".into()));
}

#[test]
fn test_player_cannot_join_two_simultaneous_games() {
    let registry = GameRegistry::new();
    registry
        .register_game(game_in("chat-1", &["ana", "bob"]))
        .unwrap();

    let err = registry
        .register_game(game_in("chat-2", &["bob", "eva"]))
        .unwrap_err();
    assert_eq!(err, RegistryError::PlayerBusy("bob".to_string()));
    // the failed registration claimed nothing
    assert!(registry.game(&"chat-2".into()).is_none());
    assert!(registry.game_for_player("eva").is_none());
}

#[test]
fn test_remove_game_frees_chat_and_players() {
    let registry = GameRegistry::new();
    registry
        .register_game(game_in("chat-1", &["ana", "bob"]))
        .unwrap();

    registry
        .remove_game(&"chat-1".into())
        .expect("game was registered");
    assert!(registry.game(&"chat-1".into()).is_none());
    assert!(registry.game_for_player("ana").is_none());

    // the chat and the players are free to start over
    registry
        .register_game(game_in("chat-1", &["ana"]))
        .expect("chat is free again");
}

#[test]
fn test_chats_lists_every_running_game() {
    let registry = GameRegistry::new();
    assert!(registry.chats().is_empty());

    registry.register_game(game_in("chat-1", &["ana"])).unwrap();
    registry.register_game(game_in("chat-2", &["bob"])).unwrap();

    let mut chats = registry.chats();
    chats.sort_by_key(|chat| chat.to_string());
    assert_eq!(chats, vec!["chat-1".into(), "chat-2".into()]);

    registry.remove_game(&"chat-1".into()).unwrap();
    assert_eq!(registry.chats(), vec!["chat-2".into()]);
}

#[test]
fn test_mutating_a_game_through_its_handle() {
    let registry = GameRegistry::new();
    let handle = registry
        .register_game(game_in("chat-1", &["ana"]))
        .unwrap();

    {
        let mut game = handle.lock().unwrap();
        assert!(game.mark_ready("ana", Some("ana-private".into())));
        assert!(game.all_ready());
    }

    let same = registry.game(&"chat-1".into()).expect("still registered");
    assert!(same.lock().unwrap().all_ready());
}
