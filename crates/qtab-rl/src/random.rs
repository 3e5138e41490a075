//! Random source used for exploration

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for epsilon-greedy selection
pub trait RandomSource {
    /// Uniform draw in [0, 1)
    fn uniform(&mut self) -> f64;

    /// Uniform index in [0, n). `n` is never zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Default random source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandomSource {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
