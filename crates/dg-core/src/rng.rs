//! Random number generation for floor layout.
//!
//! Uses a seeded ChaCha RNG so a floor can be regenerated exactly from
//! its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Floor layout random number generator
///
/// One instance is threaded through a whole generation run; it is never
/// reseeded mid-run.
#[derive(Debug, Clone)]
pub struct FloorRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl FloorRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a value in 0..n
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns a value in 1..=n
    ///
    /// Returns 0 if n is 0.
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }
}

impl Default for FloorRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
