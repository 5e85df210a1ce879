//! Recorded results
//!
//! Each player gets one recorded result per day, and only for a day that
//! already has an answer.

use super::{DailySchedule, DayKey};
use crate::game::{GameOutcome, OutcomeError};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

/// Error type for rejected results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultError {
    /// The outcome itself is out of range.
    Invalid(OutcomeError),
    /// No answer has been assigned to the day.
    NoWordForDay(DayKey),
    /// The player already has a result for the day.
    AlreadyRecorded { player: String, day: DayKey },
}

impl fmt::Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "Invalid result: {e}"),
            Self::NoWordForDay(day) => write!(f, "No word assigned for {day}"),
            Self::AlreadyRecorded { player, day } => {
                write!(f, "Result for {player} on {day} was already recorded")
            }
        }
    }
}

impl std::error::Error for ResultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::NoWordForDay(_) | Self::AlreadyRecorded { .. } => None,
        }
    }
}

impl From<OutcomeError> for ResultError {
    fn from(e: OutcomeError) -> Self {
        Self::Invalid(e)
    }
}

/// Finished games per player and day
#[derive(Debug, Clone, Default)]
pub struct ResultLedger {
    players: FxHashMap<String, BTreeMap<DayKey, GameOutcome>>,
}

impl ResultLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `player`'s finished game for `day`
    ///
    /// Checks run in order: the outcome must be valid for `max_attempts`,
    /// the day must have an answer in `schedule`, and the player must not
    /// have a result for the day yet. Nothing is stored on error.
    ///
    /// # Errors
    /// Returns `ResultError::Invalid`, `ResultError::NoWordForDay` or
    /// `ResultError::AlreadyRecorded`.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_daily::daily::{DailySchedule, DayKey, ResultError, ResultLedger, WordRotation};
    /// use wordle_daily::game::GameOutcome;
    /// use wordle_daily::wordlists::loader::words_from_slice;
    ///
    /// let day: DayKey = "2024-05-01".parse().unwrap();
    /// let mut schedule = DailySchedule::new(WordRotation::new(words_from_slice(&["perro"])));
    /// schedule.word_for(day, &mut StdRng::seed_from_u64(1)).unwrap();
    ///
    /// let mut ledger = ResultLedger::new();
    /// let outcome = GameOutcome { attempts: 3, seconds: 80, solved: true };
    /// ledger.record(&schedule, "ana", day, outcome, 6).unwrap();
    ///
    /// assert_eq!(ledger.result_for("ana", day), Some(&outcome));
    /// assert!(matches!(
    ///     ledger.record(&schedule, "ana", day, outcome, 6),
    ///     Err(ResultError::AlreadyRecorded { .. })
    /// ));
    /// ```
    pub fn record(
        &mut self,
        schedule: &DailySchedule,
        player: &str,
        day: DayKey,
        outcome: GameOutcome,
        max_attempts: u32,
    ) -> Result<(), ResultError> {
        outcome.validate(max_attempts)?;

        if schedule.assigned(day).is_none() {
            return Err(ResultError::NoWordForDay(day));
        }

        match self.players.entry(player.to_string()).or_default().entry(day) {
            Entry::Occupied(_) => Err(ResultError::AlreadyRecorded {
                player: player.to_string(),
                day,
            }),
            Entry::Vacant(entry) => {
                entry.insert(outcome);
                Ok(())
            }
        }
    }

    /// The result `player` recorded for `day`, if any
    #[must_use]
    pub fn result_for(&self, player: &str, day: DayKey) -> Option<&GameOutcome> {
        self.players.get(player)?.get(&day)
    }

    /// Check if `player` already has a result for `day`
    #[must_use]
    pub fn has_played(&self, player: &str, day: DayKey) -> bool {
        self.result_for(player, day).is_some()
    }
}
