//! Daily word command
//!
//! Replays the answer schedule from a fixed first day up to the requested
//! day with a seeded generator, so every run agrees on each day's word.

use crate::core::Word;
use crate::daily::{DailyError, DailySchedule, DayKey, ResultLedger, WordRotation};
use crate::game::{GameConfig, GameOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Default seed for the answer schedule
pub const DEFAULT_SEED: u64 = 0x5041_4c41_4252_4153;

/// First day of the default answer schedule
pub const SCHEDULE_START: DayKey = match DayKey::from_ymd(2024, 1, 1) {
    Some(day) => day,
    None => panic!("schedule start must be a calendar date"),
};

/// Configuration for looking up a day's word
pub struct DailyConfig {
    pub date: DayKey,
    /// First day of the schedule
    pub start: DayKey,
    pub seed: u64,
}

impl DailyConfig {
    /// Look up `date` with the default schedule
    #[must_use]
    pub const fn new(date: DayKey) -> Self {
        Self {
            date,
            start: SCHEDULE_START,
            seed: DEFAULT_SEED,
        }
    }
}

/// A day's game, as presented to a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWord {
    pub date: DayKey,
    pub length: usize,
    pub word: Word,
    pub already_played: bool,
    /// The player's recorded result for the day
    pub result: Option<GameOutcome>,
    pub max_attempts: u32,
}

impl DailyWord {
    /// Attach `player`'s recorded result for this day, if there is one
    #[must_use]
    pub fn with_result(mut self, results: &ResultLedger, player: &str) -> Self {
        self.result = results.result_for(player, self.date).copied();
        self.already_played = self.result.is_some();
        self
    }
}

/// Build the schedule with `config.date` assigned
///
/// The draws of the days from `config.start` up to the requested date are
/// consumed in order, so the rotation never repeats a word before the pool
/// runs out, but only the requested day is kept. A date before the start
/// is drawn on its own.
///
/// # Errors
///
/// Returns `DailyError::NoWords` if `words` is empty.
pub fn daily_schedule(words: &[Word], config: &DailyConfig) -> Result<DailySchedule, DailyError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut schedule = DailySchedule::new(WordRotation::new(words.to_vec()));

    schedule.skip_until(config.start, config.date, &mut rng)?;
    schedule.word_for(config.date, &mut rng)?;
    Ok(schedule)
}

/// Pick the word for `config.date`
///
/// # Errors
///
/// Returns `DailyError::NoWords` if `words` is empty.
pub fn daily_word(
    words: &[Word],
    config: &DailyConfig,
    game: GameConfig,
) -> Result<DailyWord, DailyError> {
    let schedule = daily_schedule(words, config)?;
    daily_word_from(&schedule, config.date, game)
}

/// Present the word `schedule` assigned to `date`
///
/// # Errors
///
/// Returns `DailyError::NoWords` if the schedule has no word for `date`.
pub fn daily_word_from(
    schedule: &DailySchedule,
    date: DayKey,
    game: GameConfig,
) -> Result<DailyWord, DailyError> {
    let word = schedule.assigned(date).cloned().ok_or(DailyError::NoWords)?;

    Ok(DailyWord {
        date,
        length: word.len(),
        word,
        already_played: false,
        result: None,
        max_attempts: game.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EMBEDDED;
    use crate::wordlists::loader::words_from_slice;
    use std::collections::HashSet;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn schedule_starts_on_first_day_of_2024() {
        assert_eq!(SCHEDULE_START.to_string(), "2024-01-01");
        assert_eq!(SCHEDULE_START.days_since_epoch(), 19_723);
        assert_eq!(DailyConfig::new(day("2024-06-15")).start, SCHEDULE_START);
    }

    #[test]
    fn same_date_same_word() {
        let words = words_from_slice(EMBEDDED);
        let config = DailyConfig::new(day("2024-06-15"));

        let first = daily_word(&words, &config, GameConfig::default()).unwrap();
        let second = daily_word(&words, &config, GameConfig::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.length, 5);
        assert_eq!(first.max_attempts, 6);
        assert_eq!(first.date, day("2024-06-15"));
        assert!(!first.already_played);
    }

    #[test]
    fn consecutive_days_differ_within_pool() {
        let words = words_from_slice(&["perro", "gallo", "reina", "queso"]);
        let mut seen = HashSet::new();
        let mut date = day("2024-01-01");
        for _ in 0..4 {
            let daily = daily_word(&words, &DailyConfig::new(date), GameConfig::default()).unwrap();
            assert!(seen.insert(daily.word.text().to_string()));
            date = date.next_day();
        }
    }

    #[test]
    fn schedule_keeps_only_requested_day() {
        let words = words_from_slice(EMBEDDED);
        let schedule = daily_schedule(&words, &DailyConfig::new(day("2199-12-31"))).unwrap();
        assert_eq!(schedule.days_assigned(), 1);
        assert!(schedule.assigned(day("2199-12-31")).is_some());
        assert_eq!(schedule.assigned(day("2199-12-30")), None);
    }

    #[test]
    fn skipped_days_match_day_by_day_requests() {
        let words = words_from_slice(&["perro", "gallo", "reina", "queso", "nieve"]);
        let target = day("2024-02-03");

        let mut schedule = DailySchedule::new(WordRotation::new(words.clone()));
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let mut current = SCHEDULE_START;
        while current < target {
            schedule.word_for(current, &mut rng).unwrap();
            current = current.next_day();
        }
        let expected = schedule.word_for(target, &mut rng).unwrap().clone();

        let daily = daily_word(&words, &DailyConfig::new(target), GameConfig::default()).unwrap();
        assert_eq!(daily.word, expected);
    }

    #[test]
    fn date_before_start_still_has_word() {
        let words = words_from_slice(&["perro", "gallo"]);
        let daily = daily_word(
            &words,
            &DailyConfig::new(day("2023-12-25")),
            GameConfig::default(),
        )
        .unwrap();
        assert!(["perro", "gallo"].contains(&daily.word.text()));
    }

    #[test]
    fn empty_list_fails() {
        let result = daily_word(&[], &DailyConfig::new(day("2024-01-01")), GameConfig::default());
        assert_eq!(result, Err(DailyError::NoWords));
    }

    #[test]
    fn serializes_like_daily_response() {
        let words = words_from_slice(&["perro"]);
        let daily = daily_word(
            &words,
            &DailyConfig::new(day("2024-01-01")),
            GameConfig::default(),
        )
        .unwrap();
        let json = serde_json::to_string(&daily).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-01-01","length":5,"word":"perro","alreadyPlayed":false,"result":null,"maxAttempts":6}"#
        );
    }

    #[test]
    fn recorded_result_marks_day_as_played() {
        let words = words_from_slice(&["perro", "gallo"]);
        let config = DailyConfig::new(day("2024-01-02"));
        let schedule = daily_schedule(&words, &config).unwrap();

        let outcome = GameOutcome {
            attempts: 2,
            seconds: 40,
            solved: true,
        };
        let mut results = ResultLedger::new();
        results
            .record(&schedule, "ana", config.date, outcome, 6)
            .unwrap();

        let daily = daily_word(&words, &config, GameConfig::default()).unwrap();
        let played = daily.clone().with_result(&results, "ana");
        assert!(played.already_played);
        assert_eq!(played.result, Some(outcome));

        let other = daily.with_result(&results, "luis");
        assert!(!other.already_played);
        assert_eq!(other.result, None);

        let json = serde_json::to_string(&played).unwrap();
        assert!(json.contains(r#""alreadyPlayed":true,"result":{"attempts":2,"seconds":40,"solved":true}"#));
    }
}
