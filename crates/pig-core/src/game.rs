//! Match orchestration: rotation, turns, and the win condition.
//!
//! `Game` is driven one input line at a time. Each decision from the
//! current player becomes an [`Event`] describing what happened; the
//! caller renders events however it likes. After a hold or bust the
//! rotation advances and a fresh turn begins; a win freezes the game
//! with the winner as current player.

use std::cmp::Reverse;

use crate::config::GameConfig;
use crate::die::Die;
use crate::error::{GameError, GameResult};
use crate::player::Player;
use crate::rotation::Rotation;
use crate::turn::{TurnAction, TurnEnd, TurnEngine, TurnStep};

/// What one applied action did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The current player rolled and the turn continues.
    Rolled {
        /// Player who rolled.
        player: String,
        /// Value rolled.
        value: u8,
        /// Points accumulated so far this turn.
        turn_score: u32,
        /// What the banked total would be after holding now.
        would_total: u32,
    },
    /// The current player rolled a 1 and lost the turn's points.
    Busted {
        /// Player who busted.
        player: String,
        /// Rolls taken in the busted turn.
        rolls: u32,
        /// Banked total, unchanged by the bust.
        total: u32,
    },
    /// The current player banked the turn's points.
    Held {
        /// Player who held.
        player: String,
        /// Points banked.
        points: u32,
        /// Rolls taken this turn.
        rolls: u32,
        /// New banked total.
        total: u32,
    },
    /// The current player reached the target and won.
    Won {
        /// The winner.
        player: String,
        /// The winning roll.
        value: u8,
        /// Final banked total.
        total: u32,
    },
}

/// One row of the final leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Player name.
    pub name: String,
    /// Final banked score.
    pub score: u32,
    /// Total rolls across the match.
    pub rolls: u32,
}

/// A full match of Pig, driven one action at a time.
pub struct Game {
    rotation: Rotation,
    die: Die,
    turn: TurnEngine,
    target: u32,
    over: bool,
}

impl Game {
    /// Start a game with the given players and configuration.
    pub fn new(players: Vec<Player>, config: GameConfig) -> GameResult<Self> {
        let rotation = Rotation::new(players)?;
        let die = match config.seed {
            Some(seed) => Die::seeded(seed),
            None => Die::new(),
        };
        Ok(Self {
            rotation,
            die,
            turn: TurnEngine::new(config.target_score),
            target: config.target_score,
            over: false,
        })
    }

    /// The player whose turn it is. Once the game is over, the winner.
    pub fn current_player(&self) -> &Player {
        self.rotation.current()
    }

    /// The score a player must reach to win.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Whether a player has won.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        self.over.then(|| self.rotation.current())
    }

    /// Process one line of input from the current player.
    ///
    /// Unrecognized input is rejected without touching the turn, so the
    /// caller can re-prompt at the same decision point.
    pub fn process(&mut self, input: &str) -> GameResult<Event> {
        let action = TurnAction::parse(input)
            .ok_or_else(|| GameError::InvalidAction(input.trim().to_string()))?;
        self.apply(action)
    }

    /// Apply one action for the current player.
    pub fn apply(&mut self, action: TurnAction) -> GameResult<Event> {
        if self.over {
            return Err(GameError::GameOver);
        }

        let step = self
            .turn
            .apply(action, &mut self.die, self.rotation.current_mut());

        let current = self.rotation.current();
        let player = current.name().to_string();
        let total = current.score();

        let event = match step {
            TurnStep::Continued {
                value,
                turn_score,
                would_total,
            } => Event::Rolled {
                player,
                value,
                turn_score,
                would_total,
            },
            TurnStep::Ended(TurnEnd::Busted { rolls }) => Event::Busted {
                player,
                rolls,
                total,
            },
            TurnStep::Ended(TurnEnd::Held { points, rolls }) => Event::Held {
                player,
                points,
                rolls,
                total,
            },
            TurnStep::Ended(TurnEnd::Won { value, .. }) => Event::Won {
                player,
                value,
                total,
            },
        };

        match event {
            Event::Busted { .. } | Event::Held { .. } => {
                self.rotation.advance();
                self.turn = TurnEngine::new(self.target);
            }
            Event::Won { .. } => self.over = true,
            Event::Rolled { .. } => {}
        }

        Ok(event)
    }

    /// Final standings: descending score, ties keep seating order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .rotation
            .players()
            .iter()
            .map(|player| Standing {
                name: player.name().to_string(),
                score: player.score(),
                rolls: player.rolls(),
            })
            .collect();
        rows.sort_by_key(|row| Reverse(row.score));
        rows
    }
}
