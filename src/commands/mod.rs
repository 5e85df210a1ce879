//! Command implementations

pub mod audit;
pub mod daily;
pub mod evaluate;
pub mod play;

pub use audit::{AuditStatistics, Property, Violation, check_pair, run_audit};
pub use daily::{
    DEFAULT_SEED, DailyConfig, DailyWord, SCHEDULE_START, daily_schedule, daily_word,
    daily_word_from,
};
pub use evaluate::{EvaluateReport, evaluate_pair};
pub use play::{PlayReport, run_play};
