//! One answer per day
//!
//! The first request for a day draws a word from the rotation; every later
//! request for the same day gets the same word.

use super::{DailyError, DayKey, WordRotation};
use crate::core::Word;
use rand::Rng;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Day-to-answer assignments backed by a rotation
#[derive(Debug, Clone)]
pub struct DailySchedule {
    rotation: WordRotation,
    days: BTreeMap<DayKey, Word>,
}

impl DailySchedule {
    #[must_use]
    pub fn new(rotation: WordRotation) -> Self {
        Self {
            rotation,
            days: BTreeMap::new(),
        }
    }

    /// The answer for `day`, drawing one if the day has none yet
    ///
    /// # Errors
    /// Returns `DailyError::NoWords` if a draw is needed and the rotation is
    /// empty.
    pub fn word_for<R: Rng + ?Sized>(
        &mut self,
        day: DayKey,
        rng: &mut R,
    ) -> Result<&Word, DailyError> {
        match self.days.entry(day) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let word = self.rotation.next_word(rng)?;
                Ok(entry.insert(word))
            }
        }
    }

    /// Consume the draws of every unassigned day from `start` up to, but not
    /// including, `end`, without remembering them
    ///
    /// The rotation ends up as if each of those days had been requested in
    /// order, while only the days actually asked for are kept. Returns the
    /// number of draws made; nothing happens when `end` is not after `start`.
    ///
    /// # Errors
    /// Returns `DailyError::NoWords` if a draw is needed and the rotation is
    /// empty.
    pub fn skip_until<R: Rng + ?Sized>(
        &mut self,
        start: DayKey,
        end: DayKey,
        rng: &mut R,
    ) -> Result<u64, DailyError> {
        let mut drawn = 0;
        let mut day = start;
        while day < end {
            if !self.days.contains_key(&day) {
                self.rotation.skip(rng)?;
                drawn += 1;
            }
            day = day.next_day();
        }
        Ok(drawn)
    }

    /// The answer already assigned to `day`, if any
    #[must_use]
    pub fn assigned(&self, day: DayKey) -> Option<&Word> {
        self.days.get(&day)
    }

    /// Number of days with an answer
    #[must_use]
    pub fn days_assigned(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub const fn rotation(&self) -> &WordRotation {
        &self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const WORDS: &[&str] = &["perro", "gallo", "reina", "queso", "nieve", "lapiz"];

    fn schedule() -> DailySchedule {
        DailySchedule::new(WordRotation::new(words_from_slice(WORDS)))
    }

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_same_word() {
        let mut schedule = schedule();
        let mut rng = StdRng::seed_from_u64(11);

        let first = schedule.word_for(day("2024-05-01"), &mut rng).unwrap().clone();
        let again = schedule.word_for(day("2024-05-01"), &mut rng).unwrap().clone();
        assert_eq!(first, again);
        assert_eq!(schedule.days_assigned(), 1);
        assert_eq!(schedule.rotation().available(), WORDS.len() - 1);
    }

    #[test]
    fn skipping_matches_requesting_each_day() {
        let start = day("2024-02-26");
        let target = day("2024-03-10");

        let mut requested = schedule();
        let mut rng = StdRng::seed_from_u64(2);
        let mut current = start;
        while current < target {
            requested.word_for(current, &mut rng).unwrap();
            current = current.next_day();
        }
        let expected = requested.word_for(target, &mut rng).unwrap().clone();

        let mut skipped = schedule();
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(skipped.skip_until(start, target, &mut rng).unwrap(), 13);
        assert_eq!(skipped.days_assigned(), 0);
        assert_eq!(skipped.word_for(target, &mut rng).unwrap(), &expected);
        assert_eq!(skipped.days_assigned(), 1);
    }

    #[test]
    fn skip_passes_over_assigned_days() {
        let mut schedule = schedule();
        let mut rng = StdRng::seed_from_u64(9);
        let fixed = schedule.word_for(day("2024-01-02"), &mut rng).unwrap().clone();

        let drawn = schedule
            .skip_until(day("2024-01-01"), day("2024-01-04"), &mut rng)
            .unwrap();
        assert_eq!(drawn, 2);
        assert_eq!(schedule.assigned(day("2024-01-02")), Some(&fixed));
        assert_eq!(schedule.days_assigned(), 1);
        assert_eq!(schedule.rotation().available(), WORDS.len() - 3);
    }

    #[test]
    fn skip_with_reversed_range_does_nothing() {
        let mut schedule = schedule();
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(
            schedule
                .skip_until(day("2024-01-03"), day("2024-01-01"), &mut rng)
                .unwrap(),
            0
        );
        assert_eq!(schedule.rotation().available(), WORDS.len());
        assert_eq!(schedule.assigned(day("2024-01-01")), None);
    }

    #[test]
    fn consecutive_days_do_not_repeat_until_pool_is_used() {
        let mut schedule = schedule();
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = HashSet::new();
        let mut current = day("2024-02-26");
        for _ in 0..WORDS.len() {
            let word = schedule.word_for(current, &mut rng).unwrap();
            assert!(seen.insert(word.clone()), "{current} repeats {word}");
            current = current.next_day();
        }
        assert_eq!(schedule.rotation().available(), 0);
    }

    #[test]
    fn empty_rotation_fails() {
        let mut schedule = DailySchedule::new(WordRotation::new(Vec::new()));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            schedule.word_for(day("2024-01-01"), &mut rng),
            Err(DailyError::NoWords)
        );
    }
}
