//! Formatting utilities for terminal output

use crate::core::{Evaluation, KeyboardState, LetterState};
use colored::{ColoredString, Colorize};

/// Keys shown on the on-screen keyboard, in QWERTY order with Ñ
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjklñ", "zxcvbnm"];

/// Style a single letter tile
#[must_use]
pub fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &str, evaluation: &Evaluation) -> String {
    guess
        .chars()
        .zip(evaluation.states())
        .map(|(letter, &state)| tile(letter, Some(state)).to_string())
        .collect()
}

/// Render the keyboard, one line per row, coloring the known letters
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|letter| tile(letter, keyboard.state(letter)).to_string())
                .collect()
        })
        .collect()
}

/// Format elapsed seconds as `m:ss`
#[must_use]
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
