//! Answer rotation
//!
//! Draws answers at random from the words not used yet. Once every word has
//! been used the whole pool becomes available again.

use super::DailyError;
use crate::core::Word;
use rand::Rng;

/// Pool of candidate answers with a "used" flag per word
#[derive(Debug, Clone)]
pub struct WordRotation {
    words: Vec<Word>,
    used: Vec<bool>,
}

impl WordRotation {
    /// Create a rotation where every word is still unused
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let used = vec![false; words.len()];
        Self { words, used }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words not used since the last reset
    #[must_use]
    pub fn available(&self) -> usize {
        self.used.iter().filter(|&&used| !used).count()
    }

    /// Check whether `word` has been drawn since the last reset
    #[must_use]
    pub fn is_used(&self, word: &Word) -> bool {
        self.words
            .iter()
            .zip(&self.used)
            .any(|(candidate, &used)| used && candidate == word)
    }

    /// Mark every word as unused again
    pub fn reset(&mut self) {
        self.used.fill(false);
    }

    /// Draw the next answer
    ///
    /// Picks uniformly among the unused words, keeping insertion order for
    /// the index. An exhausted pool is reset first.
    ///
    /// # Errors
    /// Returns `DailyError::NoWords` if the pool is empty.
    pub fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Word, DailyError> {
        let index = self.draw(rng)?;
        Ok(self.words[index].clone())
    }

    /// Draw and discard one answer, consuming the same randomness as
    /// [`next_word`](Self::next_word)
    ///
    /// # Errors
    /// Returns `DailyError::NoWords` if the pool is empty.
    pub fn skip<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DailyError> {
        self.draw(rng).map(|_| ())
    }

    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, DailyError> {
        if self.words.is_empty() {
            return Err(DailyError::NoWords);
        }

        let mut available = self.available();
        if available == 0 {
            self.reset();
            available = self.words.len();
        }

        let skip = rng.random_range(0..available);
        let index = self
            .used
            .iter()
            .enumerate()
            .filter(|&(_, &used)| !used)
            .nth(skip)
            .map(|(index, _)| index)
            .ok_or(DailyError::NoWords)?;

        self.used[index] = true;
        Ok(index)
    }
}
