//! Shared helpers for integration tests.

#![allow(dead_code)]

use memory_lab::{CardUid, Game, GameConfig, GameRng, MemoryStore, RecordStore, RecordingSink};

pub type TestGame = Game<RecordingSink, MemoryStore>;

pub const LETTERS: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
];

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Config with `pairs` pairs drawn from exactly `pairs` letters, so every
/// letter is dealt.
pub fn letters_config(pairs: usize) -> GameConfig {
    GameConfig::new()
        .with_pair_target(pairs)
        .with_icon_pool(LETTERS[..pairs].iter().copied())
        .with_storage_key("test-best")
}

pub fn new_game(pairs: usize, seed: u64) -> TestGame {
    new_game_with_store(pairs, seed, MemoryStore::new())
}

pub fn new_game_with_store(pairs: usize, seed: u64, store: MemoryStore) -> TestGame {
    init_logging();
    Game::with_rng(letters_config(pairs), GameRng::new(seed), RecordingSink::new(), store)
        .expect("valid test config")
}

/// Generic constructor for tests with their own store type.
pub fn new_game_on<S: RecordStore>(pairs: usize, seed: u64, store: S) -> Game<RecordingSink, S> {
    init_logging();
    Game::with_rng(letters_config(pairs), GameRng::new(seed), RecordingSink::new(), store)
        .expect("valid test config")
}

/// The two cards showing `icon`, in grid order.
pub fn pair_of<S: RecordStore>(game: &Game<RecordingSink, S>, icon: &str) -> [CardUid; 2] {
    let uids: Vec<_> = game
        .state()
        .deck
        .iter()
        .filter(|card| card.icon == icon)
        .map(|card| card.uid)
        .collect();
    assert_eq!(uids.len(), 2, "icon {icon} should be dealt exactly twice");
    [uids[0], uids[1]]
}

/// Every pair in the deck, by icon in first-appearance order.
pub fn all_pairs<S: RecordStore>(game: &Game<RecordingSink, S>) -> Vec<[CardUid; 2]> {
    let mut icons: Vec<String> = Vec::new();
    for card in game.state().deck.iter() {
        if !icons.contains(&card.icon) {
            icons.push(card.icon.clone());
        }
    }
    icons.iter().map(|icon| pair_of(game, icon)).collect()
}

/// Match every pair with no misses.
pub fn solve<S: RecordStore>(game: &mut Game<RecordingSink, S>) {
    for [a, b] in all_pairs(game) {
        game.select(a);
        game.select(b);
    }
}
