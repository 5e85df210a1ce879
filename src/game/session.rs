//! A single player's game against one answer
//!
//! Tracks attempts, evaluates each submitted guess and moves the game from
//! playing to won or lost.

use super::{DEFAULT_MAX_ATTEMPTS, GameOutcome};
use crate::core::{EvaluateError, Evaluation, KeyboardState, Word, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: String,
    pub states: Evaluation,
}

/// Error type for rejected guesses
///
/// A rejected guess never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game is already won or lost.
    Finished(GameStatus),
    /// The guess is not a valid word.
    InvalidWord(WordError),
    /// The guess has the wrong number of letters.
    Evaluate(EvaluateError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(GameStatus::Won) => write!(f, "Game already won"),
            Self::Finished(_) => write!(f, "Game already over"),
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::Evaluate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Finished(_) => None,
            Self::InvalidWord(e) => Some(e),
            Self::Evaluate(e) => Some(e),
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<EvaluateError> for GameError {
    fn from(e: EvaluateError) -> Self {
        Self::Evaluate(e)
    }
}

/// One game in progress or finished
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    max_attempts: u32,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with the default attempt limit
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self::with_max_attempts(answer, DEFAULT_MAX_ATTEMPTS)
    }

    /// Start a game with a custom attempt limit
    ///
    /// A limit of zero is raised to one so the game can always be played.
    #[must_use]
    pub fn with_max_attempts(answer: Word, max_attempts: u32) -> Self {
        Self {
            answer,
            max_attempts: max_attempts.max(1),
            history: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    /// Submit a guess
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, the guess is not a valid word
    /// or it has the wrong length. Nothing changes in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::game::{GameSession, GameStatus};
    ///
    /// let mut game = GameSession::new(Word::new("perro").unwrap());
    /// game.submit("reina").unwrap();
    /// assert_eq!(game.status(), GameStatus::Playing);
    ///
    /// assert!(game.submit("gato").is_err());
    /// assert_eq!(game.attempts_used(), 1);
    ///
    /// game.submit("PERRO").unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit(&mut self, guess: &str) -> Result<&GuessRecord, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::Finished(self.status));
        }

        let guess = Word::new(guess)?;
        let states = Evaluation::calculate(&self.answer, &guess)?;

        if states.is_solved() {
            self.status = GameStatus::Won;
        } else if self.attempts_used() + 1 >= self.max_attempts {
            self.status = GameStatus::Lost;
        }

        self.history.push(GuessRecord {
            guess: guess.text().to_string(),
            states,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self.status, GameStatus::Playing)
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_used())
    }

    /// Keyboard hints built from every guess so far
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        self.history
            .iter()
            .map(|record| (record.guess.as_str(), &record.states))
            .collect()
    }

    /// The record to report once the game is over
    ///
    /// Returns `None` while the game is still being played.
    #[must_use]
    pub fn outcome(&self, seconds: u64) -> Option<GameOutcome> {
        if !self.is_finished() {
            return None;
        }
        Some(GameOutcome {
            attempts: self.attempts_used().min(self.max_attempts),
            seconds,
            solved: self.status == GameStatus::Won,
        })
    }
}
