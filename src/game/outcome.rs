//! Finished-game records
//!
//! The record a client reports once a game is over, and the checks applied
//! before it is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a finished game went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Guesses used, between 1 and the game's attempt limit
    pub attempts: u32,
    /// Time spent playing
    pub seconds: u64,
    pub solved: bool,
}

/// Error type for rejected outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeError {
    InvalidAttempts { attempts: u32, max_attempts: u32 },
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttempts {
                attempts,
                max_attempts,
            } => write!(
                f,
                "Attempts must be between 1 and {max_attempts}, got {attempts}"
            ),
        }
    }
}

impl std::error::Error for OutcomeError {}

impl GameOutcome {
    /// Check the record against the game's attempt limit
    ///
    /// # Errors
    /// Returns `OutcomeError::InvalidAttempts` if `attempts` is outside
    /// `1..=max_attempts`.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::game::GameOutcome;
    ///
    /// let outcome = GameOutcome { attempts: 4, seconds: 93, solved: true };
    /// assert!(outcome.validate(6).is_ok());
    ///
    /// let outcome = GameOutcome { attempts: 7, seconds: 93, solved: false };
    /// assert!(outcome.validate(6).is_err());
    /// ```
    pub const fn validate(&self, max_attempts: u32) -> Result<(), OutcomeError> {
        if self.attempts < 1 || self.attempts > max_attempts {
            return Err(OutcomeError::InvalidAttempts {
                attempts: self.attempts,
                max_attempts,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_attempts_within_limit() {
        for attempts in 1..=6 {
            let outcome = GameOutcome {
                attempts,
                seconds: 0,
                solved: attempts < 6,
            };
            assert!(outcome.validate(6).is_ok());
        }
    }

    #[test]
    fn rejects_zero_and_excess_attempts() {
        let zero = GameOutcome {
            attempts: 0,
            seconds: 10,
            solved: true,
        };
        assert_eq!(
            zero.validate(6),
            Err(OutcomeError::InvalidAttempts {
                attempts: 0,
                max_attempts: 6
            })
        );

        let excess = GameOutcome {
            attempts: 7,
            seconds: 10,
            solved: false,
        };
        assert!(excess.validate(6).is_err());
    }

    #[test]
    fn serializes_with_plain_fields() {
        let outcome = GameOutcome {
            attempts: 3,
            seconds: 42,
            solved: true,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"attempts":3,"seconds":42,"solved":true}"#);
    }

    #[test]
    fn negative_seconds_do_not_parse() {
        let parsed: Result<GameOutcome, _> =
            serde_json::from_str(r#"{"attempts":3,"seconds":-1,"solved":true}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn outcome_error_display() {
        let err = OutcomeError::InvalidAttempts {
            attempts: 9,
            max_attempts: 6,
        };
        assert_eq!(err.to_string(), "Attempts must be between 1 and 6, got 9");
    }
}
