//! Game sessions
//!
//! Attempt counting, win/loss transitions, outcome records and the settings
//! they run under.

mod config;
mod outcome;
mod session;

pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig};
pub use outcome::{GameOutcome, OutcomeError};
pub use session::{GameError, GameSession, GameStatus, GuessRecord};
