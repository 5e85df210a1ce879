//! Calendar day keys
//!
//! A game day is identified by its `YYYY-MM-DD` string. Conversions to and
//! from days since 1970-01-01 use the proleptic Gregorian calendar.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// A calendar date identifying one game day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    year: i32,
    month: u8,
    day: u8,
}

/// Error type for invalid day keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKeyError {
    /// Not of the form `YYYY-MM-DD`.
    Format(String),
    /// Month or day outside the calendar.
    OutOfRange { year: i32, month: u8, day: u8 },
}

impl fmt::Display for DayKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(s) => write!(f, "Expected a date like 2024-01-31, got {s:?}"),
            Self::OutOfRange { year, month, day } => {
                write!(f, "No such date: {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl std::error::Error for DayKeyError {}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Whole days between 1970-01-01 and `time`, rounding down
///
/// A clock set before the epoch gives a negative count rather than day zero.
fn days_since_epoch_at(time: SystemTime) -> i64 {
    let whole_days = |days: u64| i64::try_from(days).unwrap_or(i64::MAX);
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => whole_days(elapsed.as_secs() / SECONDS_PER_DAY),
        Err(e) => {
            let before = e.duration();
            let seconds = before.as_secs() + u64::from(before.subsec_nanos() > 0);
            -whole_days(seconds.div_ceil(SECONDS_PER_DAY))
        }
    }
}

impl DayKey {
    /// Build a day key, checking that the date exists
    ///
    /// # Errors
    /// Returns `DayKeyError::OutOfRange` for dates like 2023-02-29.
    pub const fn new(year: i32, month: u8, day: u8) -> Result<Self, DayKeyError> {
        match Self::from_ymd(year, month, day) {
            Some(key) => Ok(key),
            None => Err(DayKeyError::OutOfRange { year, month, day }),
        }
    }

    /// Build a day key in const context, `None` if the date does not exist
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::daily::DayKey;
    ///
    /// const LEAP_DAY: Option<DayKey> = DayKey::from_ymd(2024, 2, 29);
    /// assert!(LEAP_DAY.is_some());
    /// assert!(DayKey::from_ymd(2023, 2, 29).is_none());
    /// ```
    #[must_use]
    pub const fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Today's date in UTC
    #[must_use]
    pub fn today() -> Self {
        Self::from_days_since_epoch(days_since_epoch_at(SystemTime::now()))
    }

    /// Convert a count of days since 1970-01-01
    #[must_use]
    pub fn from_days_since_epoch(days: i64) -> Self {
        let z = days + 719_468;
        let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Days since 1970-01-01 (negative before)
    #[must_use]
    pub fn days_since_epoch(self) -> i64 {
        let month = i64::from(self.month);
        let year = i64::from(self.year) - i64::from(month <= 2);
        let era = (if year >= 0 { year } else { year - 399 }) / 400;
        let yoe = year - era * 400;
        let mp = if month > 2 { month - 3 } else { month + 9 };
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// The following calendar day
    #[must_use]
    pub fn next_day(self) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch() + 1)
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || DayKeyError::Format(s.to_string());

        let parts: Vec<&str> = s.trim().split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(format_error());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(format_error());
        }
        if ![year, month, day]
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(format_error());
        }

        let year = year.parse().map_err(|_| format_error())?;
        let month = month.parse().map_err(|_| format_error())?;
        let day = day.parse().map_err(|_| format_error())?;
        Self::new(year, month, day)
    }
}
