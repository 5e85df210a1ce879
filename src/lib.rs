//! Palabra del Día
//!
//! Core of a daily word-guessing game: guess evaluation, game sessions and
//! the daily answer rotation.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{evaluate, LetterState};
//!
//! // Classify each letter of a guess
//! let evaluation = evaluate("perro", "reina").unwrap();
//! assert_eq!(evaluation.states()[1], LetterState::Correct);
//!
//! // Ready to send to a client
//! let json = serde_json::to_string(&evaluation).unwrap();
//! assert_eq!(json, r#"["present","correct","absent","absent","absent"]"#);
//! ```

// Core domain types
pub mod core;

// Game sessions and outcomes
pub mod game;

// Daily answer selection
pub mod daily;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
