//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawns and food
//! - **Context streams**: Independent sequences for snake spawns, the opening
//!   food batch and runtime food
//! - **Cheap to clone**: every `GameState` carries its own copy, so the same
//!   state and action always yield the same successor
//!
//! ```
//! use snek_engine::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut spawns = root.for_context("spawn");
//! let mut spawns_again = GameRng::new(42).for_context("spawn");
//!
//! assert_eq!(spawns.gen_range_usize(0..100), spawns_again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// Sub-seeds come from `FxHasher`, whose output is fixed by the
    /// `rustc-hash` version rather than the toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Draw `amount` distinct indices from `0..length`.
    ///
    /// The caller must ensure `amount <= length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        debug_assert!(amount <= length, "cannot sample {amount} of {length}");
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("spawn");
        let mut ctx2 = rng.for_context("food");

        let seq1: Vec<_> = (0..10).map(|_| ctx1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| ctx2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let ctx1 = GameRng::new(7).for_context("food");
        let ctx2 = GameRng::new(7).for_context("food");
        assert_eq!(ctx1.seed(), ctx2.seed());
    }

    #[test]
    fn test_context_seed_is_stable() {
        let mut hasher = FxHasher::default();
        7u64.hash(&mut hasher);
        "food".hash(&mut hasher);
        let expected = hasher.finish();

        assert_eq!(GameRng::new(7).for_context("food").seed(), expected);
        assert_ne!(
            GameRng::new(7).for_context("food").seed(),
            GameRng::new(8).for_context("food").seed()
        );
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = GameRng::new(9);
        let mut drawn = rng.sample_indices(49, 49);
        drawn.sort_unstable();
        assert_eq!(drawn, (0..49).collect::<Vec<_>>());

        let partial = rng.sample_indices(10, 3);
        assert_eq!(partial.len(), 3);
        assert!(partial.iter().all(|&i| i < 10));
    }
}
