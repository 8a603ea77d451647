//! One player's turn: the roll/hold decision loop.
//!
//! A turn accumulates points roll by roll. Rolling a 1 busts the turn
//! and forfeits the accumulation. Holding banks it, and a roll that
//! carries the banked total to the target wins the game outright. The
//! engine commits the finished turn to the player before answering, so
//! totals are never left half-updated.

use crate::die::Die;
use crate::player::Player;

/// A decision made by the player at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Roll the die again.
    Roll,
    /// Bank the turn's running score and end the turn.
    Hold,
}

impl TurnAction {
    /// Parse an action from player input ("r" or "h", any case).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "r" => Some(Self::Roll),
            "h" => Some(Self::Hold),
            _ => None,
        }
    }
}

/// How a turn ended, with everything needed to narrate and total it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// A 1 came up. No points bank, but the rolls still count.
    Busted {
        /// Rolls taken this turn, the fatal 1 included.
        rolls: u32,
    },
    /// The player stopped and banked the running score.
    Held {
        /// Points banked (0 when holding before any roll).
        points: u32,
        /// Rolls taken this turn.
        rolls: u32,
    },
    /// The last roll pushed the banked total to the target.
    Won {
        /// The winning roll.
        value: u8,
        /// Points banked, the winning roll included.
        points: u32,
        /// Rolls taken this turn.
        rolls: u32,
    },
}

impl TurnEnd {
    /// Points committed by this ending (0 for a bust).
    pub fn points(&self) -> u32 {
        match self {
            Self::Busted { .. } => 0,
            Self::Held { points, .. } | Self::Won { points, .. } => *points,
        }
    }

    /// Rolls committed by this ending.
    pub fn rolls(&self) -> u32 {
        match self {
            Self::Busted { rolls } | Self::Held { rolls, .. } | Self::Won { rolls, .. } => *rolls,
        }
    }
}

/// The engine's answer to one applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    /// The turn goes on; the same player decides again.
    Continued {
        /// Value just rolled.
        value: u8,
        /// Points accumulated so far this turn.
        turn_score: u32,
        /// What the banked total would be after holding now.
        would_total: u32,
    },
    /// The turn is over; its points and rolls are already committed.
    Ended(TurnEnd),
}

/// State machine for a single turn.
///
/// Feed it one [`TurnAction`] at a time via [`TurnEngine::apply`]. The
/// engine calls [`Player::commit_score`] itself the moment the turn
/// ends, then goes inert: further actions return the same ending
/// without rolling or committing anything again.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    target: u32,
    turn_score: u32,
    rolls: u32,
    ended: Option<TurnEnd>,
}

impl TurnEngine {
    /// Begin a turn played toward the given target score.
    pub fn new(target: u32) -> Self {
        Self {
            target,
            turn_score: 0,
            rolls: 0,
            ended: None,
        }
    }

    /// Points accumulated so far this turn.
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// Rolls taken so far this turn.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// The ending, once the turn is over.
    pub fn ended(&self) -> Option<TurnEnd> {
        self.ended
    }

    /// Apply one action for `player`, rolling `die` if the action asks for it.
    pub fn apply(&mut self, action: TurnAction, die: &mut Die, player: &mut Player) -> TurnStep {
        if let Some(end) = self.ended {
            return TurnStep::Ended(end);
        }
        match action {
            TurnAction::Roll => {
                let value = die.roll();
                self.resolve_roll(value, player)
            }
            TurnAction::Hold => self.end_turn(
                TurnEnd::Held {
                    points: self.turn_score,
                    rolls: self.rolls,
                },
                player,
            ),
        }
    }

    /// Resolve a roll of `value` for `player`, as if the die produced it.
    ///
    /// Split out from [`TurnEngine::apply`] so callers with their own
    /// roll source can drive a turn through exact sequences.
    pub fn resolve_roll(&mut self, value: u8, player: &mut Player) -> TurnStep {
        if let Some(end) = self.ended {
            return TurnStep::Ended(end);
        }
        self.rolls += 1;
        if value == 1 {
            return self.end_turn(TurnEnd::Busted { rolls: self.rolls }, player);
        }
        self.turn_score += u32::from(value);
        let would_total = player.score() + self.turn_score;
        if would_total >= self.target {
            return self.end_turn(
                TurnEnd::Won {
                    value,
                    points: self.turn_score,
                    rolls: self.rolls,
                },
                player,
            );
        }
        TurnStep::Continued {
            value,
            turn_score: self.turn_score,
            would_total,
        }
    }

    fn end_turn(&mut self, end: TurnEnd, player: &mut Player) -> TurnStep {
        player.commit_score(end.points(), end.rolls());
        self.ended = Some(end);
        TurnStep::Ended(end)
    }
}
