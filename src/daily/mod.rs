//! Daily answer selection
//!
//! Day keys, the rotation of unused answers, the per-day schedule built on
//! top of it and the one-result-per-day ledger. Everything here is in
//! memory; persisting it is left to the caller.

mod day;
mod results;
mod rotation;
mod schedule;

pub use day::{DayKey, DayKeyError};
pub use results::{ResultError, ResultLedger};
pub use rotation::WordRotation;
pub use schedule::DailySchedule;

use std::fmt;

/// Error type for answer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyError {
    /// The word pool is empty.
    NoWords,
}

impl fmt::Display for DailyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWords => write!(f, "No words available to choose from"),
        }
    }
}

impl std::error::Error for DailyError {}
