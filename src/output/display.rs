//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{AuditStatistics, DailyWord, EvaluateReport};
use crate::game::GameOutcome;
use colored::Colorize;

/// Print an evaluated guess as tiles and emoji
pub fn print_evaluation(report: &EvaluateReport) {
    println!(
        "\n  {}   {}",
        colored_row(&report.guess, &report.states),
        report.states.to_emoji()
    );
    if report.states.is_solved() {
        println!("\n{}", "✅ Correct!".green().bold());
    }
}

/// Print the day's game details
pub fn print_daily(daily: &DailyWord, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word of the day: {}",
        daily.date.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("  Letters:      {}", daily.length);
    println!("  Max attempts: {}", daily.max_attempts);
    if let Some(result) = &daily.result {
        println!(
            "  Played:       {} in {} attempts ({}s)",
            if result.solved { "solved" } else { "not solved" },
            result.attempts,
            result.seconds
        );
    }
    if reveal {
        println!(
            "  Answer:       {}",
            daily.word.text().to_uppercase().bright_green().bold()
        );
    }
}

/// Print the record of a finished game as JSON
pub fn print_outcome(outcome: &GameOutcome) {
    match serde_json::to_string(outcome) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{}", format!("Could not encode outcome: {e}").red()),
    }
}

/// Print audit totals and any violations
pub fn print_audit_result(stats: &AuditStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUDIT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Answers audited:  {}", stats.words);
    println!("   Pairs evaluated:  {}", stats.pairs);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    let letters = stats.correct + stats.present + stats.absent;
    if letters > 0 {
        println!("\n🔤 {}", "Letter states:".bright_cyan().bold());
        for (label, count) in [
            ("correct", stats.correct),
            ("present", stats.present),
            ("absent ", stats.absent),
        ] {
            let pct = count as f64 / letters as f64 * 100.0;
            println!(
                "   {label}: {} {count:8} ({pct:5.1}%)",
                create_progress_bar(pct, 100.0, 30).green()
            );
        }
    }

    if !stats.correct_distribution.is_empty() {
        println!("\n📈 {}", "Correct letters per pair:".bright_cyan().bold());
        let mut greens: Vec<_> = stats.correct_distribution.iter().collect();
        greens.sort_unstable();
        for (count, pairs) in greens {
            let pct = *pairs as f64 / stats.pairs as f64 * 100.0;
            println!("   {count}: {pairs:8} ({pct:5.1}%)");
        }
    }

    println!();
    if stats.passed() {
        println!("{}", "✅ All properties hold".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violations", stats.violations.len()).red().bold()
        );
        for violation in stats.violations.iter().take(10) {
            println!(
                "   {} / {}: {}",
                violation.answer.to_uppercase(),
                violation.guess.to_uppercase(),
                violation.property
            );
        }
    }
}
