//! Turn order over the seated players.
//!
//! Players sit in a fixed order and take turns in a cycle. Advancing
//! moves the pointer one seat; the seating itself never changes, so
//! every call site observes the same player order and the leaderboard
//! can use it for tie-breaking.

use crate::error::{GameError, GameResult};
use crate::player::Player;

/// A cyclic turn order over two or more players.
#[derive(Debug, Clone)]
pub struct Rotation {
    players: Vec<Player>,
    current: usize,
}

impl Rotation {
    /// Create a rotation from players in seating order.
    ///
    /// At least two players are required.
    pub fn new(players: Vec<Player>) -> GameResult<Self> {
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(players.len()));
        }
        Ok(Self {
            players,
            current: 0,
        })
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Move on to the next seat and return the new current player.
    pub fn advance(&mut self) -> &Player {
        self.current = (self.current + 1) % self.players.len();
        self.current()
    }

    /// All players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}
