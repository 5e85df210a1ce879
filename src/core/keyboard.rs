//! Keyboard hints
//!
//! Folds the evaluated guesses of a game into the best known state of each
//! letter, so a player can see which keys are confirmed or ruled out.

use super::{Evaluation, LetterState};
use rustc_hash::FxHashMap;

/// Best known state per letter across a game's guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluated guess
    ///
    /// A letter only ever moves up in priority: once a letter is known to be
    /// correct somewhere, a later absent marking for a repeat does not hide it.
    pub fn record(&mut self, guess: &str, evaluation: &Evaluation) {
        for (letter, &state) in guess.chars().zip(evaluation.states()) {
            for lower in letter.to_lowercase() {
                self.letters
                    .entry(lower)
                    .and_modify(|current| {
                        if state.priority() > current.priority() {
                            *current = state;
                        }
                    })
                    .or_insert(state);
            }
        }
    }

    /// Best known state of `letter` (case-insensitive), if it was ever guessed
    #[must_use]
    pub fn state(&self, letter: char) -> Option<LetterState> {
        let lower = letter.to_lowercase().next()?;
        self.letters.get(&lower).copied()
    }

    /// Check if `letter` has been ruled out entirely
    #[must_use]
    pub fn is_absent(&self, letter: char) -> bool {
        self.state(letter) == Some(LetterState::Absent)
    }

    /// Letters with a known state, sorted alphabetically
    #[must_use]
    pub fn known_letters(&self) -> Vec<(char, LetterState)> {
        let mut known: Vec<_> = self.letters.iter().map(|(&c, &s)| (c, s)).collect();
        known.sort_unstable_by_key(|&(c, _)| c);
        known
    }
}

impl<'a> FromIterator<(&'a str, &'a Evaluation)> for KeyboardState {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a Evaluation)>>(iter: I) -> Self {
        let mut keyboard = Self::new();
        for (guess, evaluation) in iter {
            keyboard.record(guess, evaluation);
        }
        keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn record(keyboard: &mut KeyboardState, answer: &str, guess: &str) {
        let evaluation = evaluate(answer, guess).unwrap();
        keyboard.record(guess, &evaluation);
    }

    #[test]
    fn unseen_letters_have_no_state() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.state('a'), None);
        assert!(!keyboard.is_absent('a'));
        assert!(keyboard.known_letters().is_empty());
    }

    #[test]
    fn records_each_state() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "perro", "reina");

        assert_eq!(keyboard.state('r'), Some(LetterState::Present));
        assert_eq!(keyboard.state('e'), Some(LetterState::Correct));
        assert_eq!(keyboard.state('i'), Some(LetterState::Absent));
        assert!(keyboard.is_absent('n'));
        assert!(keyboard.is_absent('A'));
    }

    #[test]
    fn state_never_downgrades() {
        let mut keyboard = KeyboardState::new();
        // 'o' is correct at the end of "robot" against "floor"
        record(&mut keyboard, "floor", "robot");
        assert_eq!(keyboard.state('o'), Some(LetterState::Correct));

        // A later guess where 'o' is only present must not lower it
        record(&mut keyboard, "floor", "oxxxx");
        assert_eq!(keyboard.state('o'), Some(LetterState::Correct));
    }

    #[test]
    fn state_upgrades() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "gallo", "llama");
        assert_eq!(keyboard.state('l'), Some(LetterState::Present));

        record(&mut keyboard, "gallo", "gallo");
        assert_eq!(keyboard.state('l'), Some(LetterState::Correct));
    }

    #[test]
    fn repeated_letter_keeps_best_in_same_guess() {
        // Second 'a' is absent, first 'a' is present: the key shows present
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "bcdea", "aaxxx");
        assert_eq!(keyboard.state('a'), Some(LetterState::Present));
    }

    #[test]
    fn lookup_ignores_case() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "perro", "PERRO");
        assert_eq!(keyboard.state('P'), Some(LetterState::Correct));
        assert_eq!(keyboard.state('p'), Some(LetterState::Correct));
    }

    #[test]
    fn collects_from_history() {
        let first = evaluate("perro", "reina").unwrap();
        let second = evaluate("perro", "perro").unwrap();
        let keyboard: KeyboardState = [("reina", &first), ("perro", &second)]
            .into_iter()
            .collect();

        let known = keyboard.known_letters();
        assert_eq!(known.first(), Some(&('a', LetterState::Absent)));
        assert_eq!(keyboard.state('r'), Some(LetterState::Correct));
    }
}
