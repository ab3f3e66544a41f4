//! RNG module - random source for obstacle generation
//!
//! Obstacle size, position and speed are drawn through [`RandomSource`] so
//! that spawning can be made deterministic. [`SeededRng`] is the production
//! source; tests may plug in scripted sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Uniform integer in `[lo, hi]`. Returns `lo` when the range is empty.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32;
}

/// Seedable RNG backed by `rand::rngs::StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: StdRng,
}

impl SeededRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SeededRng {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).range_inclusive(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SeededRng::new(12345);
        let mut rng2 = SeededRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(
                rng1.range_inclusive(0, 1000),
                rng2.range_inclusive(0, 1000)
            );
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SeededRng::new(12345);
        let mut rng2 = SeededRng::new(54321);

        let a: Vec<i32> = (0..16).map(|_| rng1.range_inclusive(0, 1_000_000)).collect();
        let b: Vec<i32> = (0..16).map(|_| rng2.range_inclusive(0, 1_000_000)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_range_is_inclusive_and_bounded() {
        let mut rng = SeededRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2000 {
            let v = rng.range_inclusive(2, 6);
            assert!((2..=6).contains(&v));
            seen_lo |= v == 2;
            seen_hi |= v == 6;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_empty_range_returns_lo() {
        let mut rng = SeededRng::new(7);
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(5, -3), 5);
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(SeededRng::new(99).seed(), 99);
    }
}
