//! Build script to embed the answer list
//!
//! Reads `data/words.txt`, rejects entries the game could never use and
//! writes the remaining words as a const array.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const INPUT: &str = "data/words.txt";
const WORD_LENGTH: usize = 5;

fn main() {
    println!("cargo:rerun-if-changed={INPUT}");

    let content =
        fs::read_to_string(INPUT).unwrap_or_else(|e| panic!("Failed to read {INPUT}: {e}"));
    let words = answer_words(&content);

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, render(&words))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

/// Keep one copy of every well-formed answer, warning about the rest
fn answer_words(content: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.len() != WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            println!(
                "cargo:warning={INPUT}:{}: skipping '{word}', not {WORD_LENGTH} letters a-z",
                number + 1
            );
            continue;
        }
        if !seen.insert(word) {
            println!("cargo:warning={INPUT}:{}: skipping repeated '{word}'", number + 1);
            continue;
        }
        words.push(word);
    }

    words
}

fn render(words: &[&str]) -> String {
    let mut output = String::from("// Generated from data/words.txt by build.rs\n\n");
    output.push_str("/// Bundled five-letter Spanish answer words\n");
    output.push_str("pub const EMBEDDED: &[&str] = &[\n");
    for word in words {
        let _ = writeln!(output, "    \"{word}\",");
    }
    output.push_str("];\n\n");
    output.push_str("/// Number of words in EMBEDDED\n");
    let _ = writeln!(output, "pub const EMBEDDED_COUNT: usize = {};", words.len());
    output
}
