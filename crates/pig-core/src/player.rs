//! Player identity and committed totals.

use crate::error::{GameError, GameResult};

/// A participant in the game.
///
/// The name is fixed at creation. Score and roll count only ever grow,
/// and only through [`Player::commit_score`]: a turn's running score is
/// invisible here until the turn ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
    rolls: u32,
}

impl Player {
    /// Create a player with zero score and zero rolls.
    ///
    /// The name is trimmed; a name that is empty after trimming is
    /// rejected.
    pub fn new(name: &str) -> GameResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        Ok(Self {
            name: name.to_string(),
            score: 0,
            rolls: 0,
        })
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total score banked so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rolls taken across all turns, busted ones included.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Bank a finished turn: add its points and roll count to the totals.
    pub fn commit_score(&mut self, points: u32, rolls: u32) {
        self.score += points;
        self.rolls += rolls;
    }
}
