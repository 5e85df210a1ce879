//! Palabra del Día - CLI
//!
//! Play the daily word game in the terminal, evaluate single guesses and
//! audit word lists.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wordle_daily::{
    commands::{
        DailyConfig, daily_schedule, daily_word, daily_word_from, evaluate_pair, run_audit,
        run_play,
    },
    core::Word,
    daily::{DayKey, ResultLedger},
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    output::{print_audit_result, print_daily, print_evaluation, print_outcome},
    wordlists::{
        EMBEDDED,
        loader::{load_from_file, seed_words, select_words},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily word-guessing game: play, evaluate guesses, audit word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Letters per answer word
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Refuse word lists with fewer valid unique words than this
    #[arg(long, global = true, default_value_t = 1)]
    min_words: usize,

    /// Keep only the first N valid words of the list
    #[arg(long, global = true)]
    max_words: Option<usize>,
}

/// Word list settings shared by every command
struct WordSource<'a> {
    wordlist: &'a str,
    min_words: usize,
    max_words: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the word of the day (default)
    Play {
        /// Day to play, as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        date: Option<DayKey>,

        /// Play against this word instead of the daily one
        #[arg(long)]
        word: Option<String>,

        /// Name the daily result is recorded under
        #[arg(short, long, default_value = "local")]
        player: String,
    },

    /// Evaluate a single guess against an answer
    Evaluate {
        answer: String,
        guess: String,

        /// Print the states as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the word of the day
    Daily {
        /// Day to look up, as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        date: Option<DayKey>,

        /// Show the answer itself
        #[arg(long)]
        reveal: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the evaluator against every pair of the word list
    Audit {
        /// Limit number of answers to audit
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load answer words based on the -w flag
fn load_words(source: &WordSource<'_>, length: usize) -> Result<Vec<Word>> {
    let words = match source.wordlist {
        "embedded" => seed_words(EMBEDDED.iter().copied(), length),
        path => load_from_file(path, length)
            .with_context(|| format!("failed to read word list {path}"))?,
    };

    let words = select_words(words, source.min_words, source.max_words)
        .with_context(|| format!("word list '{}' is too small", source.wordlist))?;
    if let Some(max) = source.max_words
        && words.len() < max
    {
        eprintln!(
            "{}",
            format!(
                "Warning: only {} of the requested {max} words available",
                words.len()
            )
            .yellow()
        );
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.word_length, cli.max_attempts)?;

    let source = WordSource {
        wordlist: &cli.wordlist,
        min_words: cli.min_words,
        max_words: cli.max_words,
    };

    let command = cli.command.unwrap_or(Commands::Play {
        date: None,
        word: None,
        player: "local".to_string(),
    });

    match command {
        Commands::Play { date, word, player } => {
            run_play_command(&source, config, date, word, &player)
        }
        Commands::Evaluate {
            answer,
            guess,
            json,
        } => run_evaluate_command(&answer, &guess, json),
        Commands::Daily { date, reveal, json } => {
            run_daily_command(&source, config, date, reveal, json)
        }
        Commands::Audit { limit } => run_audit_command(&source, config, limit),
    }
}

fn run_evaluate_command(answer: &str, guess: &str, json: bool) -> Result<()> {
    let report = evaluate_pair(answer, guess)?;
    if json {
        println!("{}", serde_json::to_string(&report.states)?);
    } else {
        print_evaluation(&report);
    }
    Ok(())
}

fn run_daily_command(
    source: &WordSource<'_>,
    config: GameConfig,
    date: Option<DayKey>,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let words = load_words(source, config.word_length)?;
    let daily = daily_word(&words, &DailyConfig::new(date.unwrap_or_else(DayKey::today)), config)?;

    if json {
        println!("{}", serde_json::to_string(&daily)?);
    } else {
        print_daily(&daily, reveal);
    }
    Ok(())
}

fn run_play_command(
    source: &WordSource<'_>,
    config: GameConfig,
    date: Option<DayKey>,
    word: Option<String>,
    player: &str,
) -> Result<()> {
    let mut input = std::io::stdin().lock();

    if let Some(word) = word {
        let answer = Word::new(word).context("invalid answer word")?;
        let report = run_play(answer, config.max_attempts, &mut input)?;
        if let Some(outcome) = report.outcome() {
            outcome.validate(config.max_attempts)?;
            print_outcome(&outcome);
        }
        return Ok(());
    }

    let words = load_words(source, config.word_length)?;
    let daily_config = DailyConfig::new(date.unwrap_or_else(DayKey::today));
    let schedule = daily_schedule(&words, &daily_config)?;
    let daily = daily_word_from(&schedule, daily_config.date, config)?;

    let report = run_play(daily.word.clone(), config.max_attempts, &mut input)?;
    let Some(outcome) = report.outcome() else {
        return Ok(());
    };

    let mut results = ResultLedger::new();
    results.record(&schedule, player, daily_config.date, outcome, config.max_attempts)?;
    println!("{}", serde_json::to_string(&daily.with_result(&results, player))?);
    Ok(())
}

fn run_audit_command(source: &WordSource<'_>, config: GameConfig, limit: Option<usize>) -> Result<()> {
    let words = load_words(source, config.word_length)?;
    let stats = run_audit(&words, limit);
    print_audit_result(&stats);

    if !stats.passed() {
        bail!("{} property violations found", stats.violations.len());
    }
    Ok(())
}
