//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Load answer candidates from a file
///
/// Applies the same filtering as [`seed_words`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(seed_words(content.lines(), length))
}

/// Filter raw lines into answer candidates
///
/// Each line is trimmed and lowercased. Only words of exactly `length`
/// ASCII letters `a-z` are kept, and duplicates are dropped keeping the
/// first occurrence.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::seed_words;
///
/// let words = seed_words([" Perro", "perro", "niños", "gato", "queso"], 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["perro", "queso"]);
/// ```
pub fn seed_words<'a, I>(lines: I, length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();
    lines
        .into_iter()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.len() == length && word.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|word| seen.insert(word.clone()))
        .filter_map(|word| Word::new(word).ok())
        .collect()
}

/// Error type for word lists too small to play from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListError {
    TooFew { found: usize, required: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFew { found, required } => write!(
                f,
                "At least {required} valid unique words are required, found {found}"
            ),
        }
    }
}

impl std::error::Error for WordListError {}

/// Check a filtered list against a minimum size and keep at most `limit`
/// words, in their original order
///
/// # Errors
///
/// Returns `WordListError::TooFew` if fewer than `minimum` words remain.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::{select_words, seed_words};
///
/// let words = seed_words(["perro", "gallo", "reina"], 5);
/// assert_eq!(select_words(words.clone(), 2, Some(2)).unwrap().len(), 2);
/// assert!(select_words(words, 4, None).is_err());
/// ```
pub fn select_words(
    mut words: Vec<Word>,
    minimum: usize,
    limit: Option<usize>,
) -> Result<Vec<Word>, WordListError> {
    if words.len() < minimum {
        return Err(WordListError::TooFew {
            found: words.len(),
            required: minimum,
        });
    }
    if let Some(limit) = limit {
        words.truncate(limit);
    }
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::words_from_slice;
/// use wordle_daily::wordlists::EMBEDDED;
///
/// let words = words_from_slice(EMBEDDED);
/// assert_eq!(words.len(), EMBEDDED.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
