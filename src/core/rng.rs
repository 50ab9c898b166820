//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Forkable**: Each player's deck gets its own independent stream
//! - **Injectable**: Tests pass a seeded `GameRng`, production seeds from entropy
//!
//! ```
//! use circle_of_life::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck_a = rng.fork();
//! let mut deck_b = rng.fork();
//!
//! // Sibling forks produce different sequences
//! assert_ne!(deck_a.next_seed(), deck_b.next_seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Create an RNG from OS entropy.
    ///
    /// The chosen seed is still recorded, so the game can be replayed
    /// by passing `seed()` back to `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
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

    /// Draw a fresh seed, e.g. for the next game served from a base seed.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
