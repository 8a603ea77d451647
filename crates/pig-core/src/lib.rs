//! Rules engine for Pig, the jeopardy dice game.
//!
//! Players take turns rolling a single six-sided die. Each roll either
//! adds to the turn's running score or, on a 1, busts the turn and
//! forfeits that score. Holding banks the running score instead. The
//! first player whose banked total reaches the target wins on the spot,
//! and the final standings rank everyone by score.

pub mod config;
pub mod die;
pub mod error;
pub mod game;
pub mod player;
pub mod rotation;
pub mod turn;

pub use config::GameConfig;
pub use die::Die;
pub use error::{GameError, GameResult};
pub use game::{Event, Game, Standing};
pub use player::Player;
pub use rotation::Rotation;
pub use turn::{TurnAction, TurnEnd, TurnEngine, TurnStep};
