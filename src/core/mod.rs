//! Core domain types for the word game
//!
//! This module contains the pure domain types: words, guess evaluation and
//! keyboard hints. Nothing here touches storage, clocks or randomness.

mod evaluate;
mod keyboard;
mod word;

pub use evaluate::{EvaluateError, Evaluation, LetterState, evaluate};
pub use keyboard::KeyboardState;
pub use word::{Word, WordError};
