//! Game configuration

use std::fmt;

/// Default number of letters in an answer
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses a player gets per game
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Settings shared by every game of a given word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: u32,
}

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroMaxAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "word_length must be > 0"),
            Self::ZeroMaxAttempts => write!(f, "max_attempts must be > 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub fn new(word_length: usize, max_attempts: u32) -> Result<Self, ConfigError> {
        let config = Self {
            word_length,
            max_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_values() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::ZeroMaxAttempts));
        assert!(GameConfig::new(7, 8).is_ok());
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::ZeroMaxAttempts.to_string(),
            "max_attempts must be > 0"
        );
    }
}
