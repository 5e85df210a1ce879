//! Word lists for the daily game
//!
//! Provides the embedded answer list compiled into the binary and loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(EMBEDDED.len(), EMBEDDED_COUNT);
    }

    #[test]
    fn embedded_are_valid_words() {
        for &word in EMBEDDED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = EMBEDDED.iter().collect();
        assert_eq!(unique.len(), EMBEDDED.len());
    }

    #[test]
    fn embedded_survives_seed_filter() {
        let seeded = loader::seed_words(EMBEDDED.iter().copied(), 5);
        assert_eq!(seeded.len(), EMBEDDED_COUNT);
    }
}
