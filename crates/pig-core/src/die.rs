//! The six-sided die.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A six-sided die that owns its random source.
///
/// Owning the generator keeps rolls free of global state: two dice with
/// the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct Die {
    rng: StdRng,
}

impl Die {
    /// Create a die seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a die with a fixed seed for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll the die, producing a value in 1..=6.
    pub fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}
