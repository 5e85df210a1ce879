//! Guess evaluation
//!
//! Classifies every letter of a guess against the answer:
//! - Correct: same letter at the same position
//! - Present: letter occurs elsewhere in the answer, within its remaining count
//! - Absent: no unmatched occurrence of the letter is left in the answer
//!
//! Evaluation is two-pass. All exact matches are marked first, and only then
//! are the remaining answer letters handed out left to right as partial
//! matches. Collapsing this into a single pass misclassifies repeated letters.

use super::Word;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

impl LetterState {
    /// Ranking used when folding several observations of one letter
    ///
    /// Correct (3) beats Present (2) beats Absent (1).
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
        }
    }

    /// Square emoji for this state
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Lowercase name, matching the JSON representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a guess cannot be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluateError {
    /// The guess does not have as many letters as the answer.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must have {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Per-position feedback for one guess
///
/// Serializes as a JSON array of `"correct" | "present" | "absent"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evaluation(Vec<LetterState>);

impl Evaluation {
    /// Evaluate `guess` against `answer`
    ///
    /// # Errors
    /// Returns `EvaluateError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Evaluation, LetterState, Word};
    ///
    /// let answer = Word::new("perro").unwrap();
    /// let guess = Word::new("reina").unwrap();
    /// let evaluation = Evaluation::calculate(&answer, &guess).unwrap();
    ///
    /// assert_eq!(evaluation.states()[0], LetterState::Present);
    /// assert_eq!(evaluation.to_emoji(), "🟨🟩⬜⬜⬜");
    /// ```
    pub fn calculate(answer: &Word, guess: &Word) -> Result<Self, EvaluateError> {
        classify(answer.letters(), guess.letters())
    }

    /// The per-position states
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&state| state == LetterState::Correct)
    }

    /// Count the positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|state| state.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Evaluation;
    ///
    /// let e1 = Evaluation::parse("GY-GY").unwrap();
    /// let e2 = Evaluation::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(e1, e2);
    /// assert!(Evaluation::parse("GXG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .map(LetterState::from_symbol)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }
}

impl From<Evaluation> for Vec<LetterState> {
    fn from(evaluation: Evaluation) -> Self {
        evaluation.0
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Evaluate a raw guess against a raw answer, ignoring case
///
/// The inputs are not checked against any alphabet; use [`Word`] and
/// [`Evaluation::calculate`] when validation is needed.
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the lowercased inputs differ in
/// character count.
///
/// # Examples
/// ```
/// use wordle_daily::core::{evaluate, LetterState::*};
///
/// let evaluation = evaluate("aabbc", "ABABA").unwrap();
/// assert_eq!(evaluation.states(), &[Correct, Present, Present, Correct, Absent]);
///
/// assert!(evaluate("perro", "gato").is_err());
/// ```
pub fn evaluate(answer: &str, guess: &str) -> Result<Evaluation, EvaluateError> {
    let answer: Vec<char> = answer.to_lowercase().chars().collect();
    let guess: Vec<char> = guess.to_lowercase().chars().collect();
    classify(&answer, &guess)
}

fn classify(answer: &[char], guess: &[char]) -> Result<Evaluation, EvaluateError> {
    if answer.len() != guess.len() {
        return Err(EvaluateError::LengthMismatch {
            expected: answer.len(),
            actual: guess.len(),
        });
    }

    let mut states = vec![LetterState::Absent; answer.len()];
    let mut unmatched: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: exact matches; every other answer letter stays available
    for (i, (&expected, &actual)) in answer.iter().zip(guess).enumerate() {
        if expected == actual {
            states[i] = LetterState::Correct;
        } else {
            *unmatched.entry(expected).or_insert(0) += 1;
        }
    }

    // Second pass: hand out the available letters left to right
    for (state, letter) in states.iter_mut().zip(guess) {
        if *state == LetterState::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(letter)
            && *count > 0
        {
            *state = LetterState::Present;
            *count -= 1;
        }
    }

    Ok(Evaluation(states))
}
