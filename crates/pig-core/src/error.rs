//! Error types for the Pig rules engine.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while setting up or playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// Fewer than two players were supplied.
    #[error("at least two players are required, got {0}")]
    NotEnoughPlayers(usize),

    /// A player name was empty after trimming whitespace.
    #[error("player name must not be empty")]
    EmptyPlayerName,

    /// An input line was not a recognized action.
    #[error("unrecognized action '{0}': enter 'r' to roll or 'h' to hold")]
    InvalidAction(String),

    /// The input channel closed before the game finished.
    #[error("input closed unexpectedly before the game finished")]
    InputExhausted,

    /// An action arrived after a player had already won.
    #[error("the game is already over")]
    GameOver,
}
