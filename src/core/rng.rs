//! Deterministic random number generation.
//!
//! Randomness only enters the crate through opponent policies; the engine
//! and the search are fully deterministic. Same seed, same sequence:
//!
//! ```
//! use rust_ttt::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! let items = [1, 2, 3, 4, 5];
//! assert_eq!(a.choose(&items), b.choose(&items));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let items: Vec<u32> = (0..100).collect();
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);

        for _ in 0..50 {
            assert_eq!(a.choose(&items), b.choose(&items));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let items: Vec<u32> = (0..1000).collect();
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let seq_a: Vec<_> = (0..20).map(|_| *a.choose(&items).unwrap()).collect();
        let seq_b: Vec<_> = (0..20).map(|_| *b.choose(&items).unwrap()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(0);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.seed(), 0);
    }
}
