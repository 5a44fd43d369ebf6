//! Deterministic random number generation for dealing and cosmetics.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Forkable**: Cosmetic randomness draws from a fork so it never shifts
//!   the dealing sequence
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use memory_lab::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut items = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut items);
//!
//! let mut replay = GameRng::new(42);
//! let mut again = vec![1, 2, 3, 4, 5];
//! replay.shuffle(&mut again);
//! assert_eq!(items, again);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing the deck builder.
///
/// Uses ChaCha8 for speed while keeping high-quality uniform output.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Uniform 64-bit value.
    pub fn gen_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform float in `[0, upper)`.
    pub fn gen_unit_scaled(&mut self, upper: f64) -> f64 {
        self.inner.gen::<f64>() * upper
    }

    /// Fisher-Yates shuffle: walk from the last index down, swapping each
    /// slot with a uniformly chosen slot in `[0, i]`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }

    /// Move `amount` uniformly chosen, distinct elements to the front of
    /// `slice` and return them.
    ///
    /// This is the first `amount` steps of a forward Fisher-Yates pass, so
    /// every `amount`-subset (and its order) is equally likely.
    pub fn partial_shuffle<'a, T>(&mut self, slice: &'a mut [T], amount: usize) -> &'a mut [T] {
        let amount = amount.min(slice.len());
        for i in 0..amount {
            let j = i + self.gen_index(slice.len() - 1 - i);
            slice.swap(i, j);
        }
        &mut slice[..amount]
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.gen_index(slice.len() - 1);
        slice.get(index)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state, enough to replay a deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(999), rng2.gen_index(999));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_u64()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_u64()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_u64()).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_u64()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_does_not_advance_parent_stream() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let _ = rng1.fork();

        assert_eq!(rng1.gen_u64(), rng2.gen_u64());
    }

    #[test]
    fn test_gen_index_bounds() {
        let mut rng = GameRng::new(3);
        for _ in 0..1000 {
            assert!(rng.gen_index(4) <= 4);
        }
        assert_eq!(rng.gen_index(0), 0);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(1);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_partial_shuffle_distinct() {
        let mut rng = GameRng::new(11);
        let mut pool: Vec<u32> = (0..16).collect();

        let picked = rng.partial_shuffle(&mut pool, 8).to_vec();
        assert_eq!(picked.len(), 8);

        let mut sorted = picked.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);

        let mut all = pool.clone();
        all.sort();
        assert_eq!(all, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_shuffle_clamps() {
        let mut rng = GameRng::new(11);
        let mut pool = vec!['a', 'b'];
        assert_eq!(rng.partial_shuffle(&mut pool, 5).len(), 2);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_u64();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(999)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(999)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
