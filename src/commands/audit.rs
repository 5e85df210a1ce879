//! Word list audit
//!
//! Evaluates every (answer, guess) pair of a word list in parallel and checks
//! the evaluator's guarantees on each result.

use crate::core::{EvaluateError, LetterState, Word, evaluate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// A guarantee the evaluator must keep for every pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// One state per letter.
    Length,
    /// A word evaluated against itself is all correct.
    Identity,
    /// A letter never earns more credit than it has copies in the answer.
    Multiplicity,
    /// The same pair always gives the same result.
    Determinism,
    /// A shortened guess is rejected as a length mismatch.
    LengthMismatch,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "result length",
            Self::Identity => "identity",
            Self::Multiplicity => "letter multiplicity",
            Self::Determinism => "determinism",
            Self::LengthMismatch => "length mismatch",
        };
        f.write_str(name)
    }
}

/// A pair that broke a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub answer: String,
    pub guess: String,
    pub property: Property,
}

/// Totals from auditing a word list
#[derive(Debug, Default)]
pub struct AuditStatistics {
    pub words: usize,
    pub pairs: usize,
    pub correct: usize,
    pub present: usize,
    pub absent: usize,
    /// Pairs keyed by number of correct letters
    pub correct_distribution: FxHashMap<usize, usize>,
    pub violations: Vec<Violation>,
    pub duration: Duration,
}

impl AuditStatistics {
    fn merge(mut self, other: Self) -> Self {
        self.pairs += other.pairs;
        self.correct += other.correct;
        self.present += other.present;
        self.absent += other.absent;
        for (greens, count) in other.correct_distribution {
            *self.correct_distribution.entry(greens).or_insert(0) += count;
        }
        self.violations.extend(other.violations);
        self
    }

    /// Check if every pair kept every property
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check one pair, returning every broken property
#[must_use]
pub fn check_pair(answer: &Word, guess: &Word) -> Vec<Property> {
    let mut broken = Vec::new();

    let Ok(evaluation) = evaluate(answer.text(), guess.text()) else {
        broken.push(Property::Length);
        return broken;
    };

    if evaluation.len() != answer.len() {
        broken.push(Property::Length);
    }

    if answer == guess && !evaluation.is_solved() {
        broken.push(Property::Identity);
    }

    let mut credited: FxHashMap<char, usize> = FxHashMap::default();
    for (&letter, &state) in guess.letters().iter().zip(evaluation.states()) {
        if state != LetterState::Absent {
            *credited.entry(letter).or_insert(0) += 1;
        }
    }
    let in_answer = answer.letter_counts();
    if credited
        .iter()
        .any(|(letter, &count)| count > in_answer.get(letter).copied().unwrap_or(0))
    {
        broken.push(Property::Multiplicity);
    }

    if evaluate(answer.text(), guess.text()).as_ref() != Ok(&evaluation) {
        broken.push(Property::Determinism);
    }

    if guess.len() > 1 {
        let shortened: String = guess.letters()[..guess.len() - 1].iter().collect();
        if !matches!(
            evaluate(answer.text(), &shortened),
            Err(EvaluateError::LengthMismatch { .. })
        ) {
            broken.push(Property::LengthMismatch);
        }
    }

    broken
}

fn audit_answer(answer: &Word, guesses: &[Word]) -> AuditStatistics {
    let mut stats = AuditStatistics::default();

    for guess in guesses.iter().filter(|guess| guess.len() == answer.len()) {
        stats.pairs += 1;
        for property in check_pair(answer, guess) {
            stats.violations.push(Violation {
                answer: answer.text().to_string(),
                guess: guess.text().to_string(),
                property,
            });
        }

        if let Ok(evaluation) = evaluate(answer.text(), guess.text()) {
            let greens = evaluation.count(LetterState::Correct);
            stats.correct += greens;
            stats.present += evaluation.count(LetterState::Present);
            stats.absent += evaluation.count(LetterState::Absent);
            *stats.correct_distribution.entry(greens).or_insert(0) += 1;
        }
    }

    stats
}

/// Audit every pair of `words` (or the first `limit` answers against all words)
///
/// Pairs of different lengths are skipped.
#[must_use]
pub fn run_audit(words: &[Word], limit: Option<usize>) -> AuditStatistics {
    let answers = &words[..limit.unwrap_or(words.len()).min(words.len())];

    println!(
        "🔍 Auditing {} answers against {} guesses...",
        answers.len(),
        words.len()
    );

    let pb = ProgressBar::new(answers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut stats = answers
        .par_iter()
        .map(|answer| {
            let stats = audit_answer(answer, words);
            pb.inc(1);
            stats
        })
        .reduce(AuditStatistics::default, AuditStatistics::merge);

    pb.finish_with_message("Complete!");

    stats.words = answers.len();
    stats.duration = start.elapsed();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EMBEDDED;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn correct_pairs_break_nothing() {
        assert!(check_pair(&word("perro"), &word("perro")).is_empty());
        assert!(check_pair(&word("aabbc"), &word("ababa")).is_empty());
        assert!(check_pair(&word("a"), &word("b")).is_empty());
    }

    #[test]
    fn mismatched_pair_reports_length() {
        assert_eq!(
            check_pair(&word("perro"), &word("gato")),
            vec![Property::Length]
        );
    }

    #[test]
    fn audit_of_small_list_passes() {
        let words = words_from_slice(&["perro", "gallo", "llama", "gato", "reina"]);
        let stats = run_audit(&words, None);

        assert!(stats.passed(), "{:?}", stats.violations);
        assert_eq!(stats.words, 5);
        // Four five-letter words pair with each other, "gato" only with itself
        assert_eq!(stats.pairs, 4 * 4 + 1);
        assert_eq!(stats.correct + stats.present + stats.absent, 4 * 4 * 5 + 4);
        assert_eq!(stats.correct_distribution.get(&5), Some(&4));
        assert_eq!(stats.correct_distribution.get(&4), Some(&1));
    }

    #[test]
    fn audit_respects_limit() {
        let words = words_from_slice(&EMBEDDED[..20]);
        let stats = run_audit(&words, Some(3));
        assert_eq!(stats.words, 3);
        assert_eq!(stats.pairs, 3 * 20);
        assert!(stats.passed());
    }

    #[test]
    fn audit_of_embedded_list_passes() {
        let words = words_from_slice(EMBEDDED);
        let stats = run_audit(&words, Some(25));
        assert!(stats.passed(), "{:?}", stats.violations);
    }

    #[test]
    fn property_names() {
        assert_eq!(Property::Multiplicity.to_string(), "letter multiplicity");
    }
}
