//! Configuration for a game of Pig.

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Score a player must reach or exceed to win.
    pub target_score: u32,
    /// RNG seed for reproducible rolls. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the target score (at least 1).
    pub fn with_target(mut self, target: u32) -> Self {
        self.target_score = target.max(1);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
