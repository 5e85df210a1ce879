//! Interactive line-based game
//!
//! Reads one guess per line, prints colored feedback and the keyboard, and
//! ends with the outcome record.

use crate::core::Word;
use crate::game::{GameOutcome, GameSession, GameStatus};
use crate::output::formatters::{colored_row, format_time, keyboard_rows};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// How an interactive game ended
#[derive(Debug)]
pub struct PlayReport {
    pub session: GameSession,
    pub seconds: u64,
    /// Set when the player left before the game was over
    pub quit: bool,
}

impl PlayReport {
    /// The outcome to record, if the game was played to the end
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.session.outcome(self.seconds)
    }
}

/// Run an interactive game against `answer`, reading guesses from `input`
///
/// Typing `quit` or closing the input ends the game early.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_play<R: BufRead>(answer: Word, max_attempts: u32, input: &mut R) -> io::Result<PlayReport> {
    let mut session = GameSession::with_max_attempts(answer, max_attempts);
    let start = Instant::now();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Palabra del Día                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} attempts.",
        session.answer().len(),
        session.max_attempts()
    );
    println!("Commands: 'quit' to exit\n");

    let mut quit = false;
    while !session.is_finished() {
        let prompt = format!(
            "Attempt {}/{}",
            session.attempts_used() + 1,
            session.max_attempts()
        );
        let Some(line) = read_line(&prompt, input)? else {
            quit = true;
            break;
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                quit = true;
                break;
            }
            _ => {}
        }

        let keyboard = session.keyboard();
        if let Some(letter) = line.chars().find(|&c| keyboard.is_absent(c)) {
            println!(
                "{}\n",
                format!("❌ {} is not in the word", letter.to_uppercase()).red()
            );
            continue;
        }

        match session.submit(&line) {
            Ok(record) => {
                println!("\n  {}\n", colored_row(&record.guess, &record.states));
            }
            Err(e) => {
                println!("{}\n", format!("❌ {e}").red());
                continue;
            }
        }

        for (i, record) in session.history().iter().enumerate() {
            println!(
                "  {}. {}",
                (i + 1).to_string().bright_black(),
                colored_row(&record.guess, &record.states)
            );
        }
        println!();
        for row in keyboard_rows(&session.keyboard()) {
            println!("  {row}");
        }
        println!();
    }

    let seconds = start.elapsed().as_secs();
    print_summary(&session, seconds, quit);

    Ok(PlayReport {
        session,
        seconds,
        quit,
    })
}

fn print_summary(session: &GameSession, seconds: u64, quit: bool) {
    println!("{}", "═".repeat(64).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            println!(
                "{}",
                format!(
                    "🎉 Solved in {} {}!",
                    session.attempts_used(),
                    if session.attempts_used() == 1 {
                        "attempt"
                    } else {
                        "attempts"
                    }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{}",
                format!(
                    "Out of attempts. The word was {}.",
                    session.answer().text().to_uppercase()
                )
                .red()
                .bold()
            );
        }
        GameStatus::Playing if quit => {
            println!("👋 Game abandoned after {} attempts", session.attempts_used());
        }
        GameStatus::Playing => {}
    }
    println!("Time: {}", format_time(seconds));
    println!("{}", "═".repeat(64).bright_cyan());
}

/// Read one trimmed line, or `None` once the input is closed
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(answer: &str, max_attempts: u32, lines: &str) -> PlayReport {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        run_play(Word::new(answer).unwrap(), max_attempts, &mut input).unwrap()
    }

    #[test]
    fn solving_the_word_wins() {
        let report = play("perro", 6, "reina\nperro\n");
        assert_eq!(report.session.status(), GameStatus::Won);
        assert_eq!(report.session.attempts_used(), 2);
        assert!(!report.quit);

        let outcome = report.outcome().unwrap();
        assert_eq!(outcome.attempts, 2);
        assert!(outcome.solved);
    }

    #[test]
    fn invalid_lines_are_skipped() {
        let report = play("perro", 6, "\ngato\np3rro\nperro\n");
        assert_eq!(report.session.status(), GameStatus::Won);
        assert_eq!(report.session.attempts_used(), 1);
    }

    #[test]
    fn guesses_with_ruled_out_letters_are_refused() {
        // "reina" rules out i, n and a; "nieve" is refused without using an attempt
        let report = play("perro", 6, "reina\nnieve\nperro\n");
        assert_eq!(report.session.attempts_used(), 2);
        assert_eq!(report.session.status(), GameStatus::Won);
    }

    #[test]
    fn running_out_loses() {
        let report = play("perro", 2, "gallo\nqueso\n");
        assert_eq!(report.session.status(), GameStatus::Lost);
        let outcome = report.outcome().unwrap();
        assert_eq!(outcome.attempts, 2);
        assert!(!outcome.solved);
    }

    #[test]
    fn quitting_leaves_game_unfinished() {
        let report = play("perro", 6, "gallo\nquit\nperro\n");
        assert!(report.quit);
        assert_eq!(report.session.status(), GameStatus::Playing);
        assert_eq!(report.outcome(), None);
    }

    #[test]
    fn closed_input_counts_as_quit() {
        let report = play("perro", 6, "gallo\n");
        assert!(report.quit);
        assert_eq!(report.session.attempts_used(), 1);
    }
}
