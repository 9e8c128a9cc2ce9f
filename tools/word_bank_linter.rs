/// Word Bank Linter: checks a word-bank file for overlaps and bad records.
///
/// Usage: word_bank_linter [word_banks.json]

use decodable_reader::core::word_bank::WordBanks;
use decodable_reader::schema::level::{DolchTier, Pattern, PhonicsLevel};
use std::collections::BTreeMap;
use std::path::Path;
use std::process;

const DEFAULT_WORD_BANKS: &str = "word_bank_data/word_banks.json";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: word_bank_linter [word_banks.json]");
        process::exit(0);
    }

    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_WORD_BANKS);

    let banks = match WordBanks::load_from_json(Path::new(path)) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("ERROR: Failed to load word banks: {}", e);
            process::exit(1);
        }
    };

    println!("Loaded word banks from {}", path);
    for level in PhonicsLevel::ALL {
        println!(
            "  {:<7} {:>4} decodable, {:>4} sight words",
            level.name(),
            banks.decodable_set(level).len(),
            banks.sight_word_set(level).len()
        );
    }

    let (errors, warnings) = lint_word_banks(&banks);

    println!("\n=== Word Bank Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    process::exit(if errors.is_empty() { 0 } else { 1 });
}

fn lint_word_banks(banks: &WordBanks) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Ladder must only ever grow
    for pair in PhonicsLevel::ALL.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if !banks.decodable_set(lower).is_subset(banks.decodable_set(upper)) {
            errors.push(format!(
                "decodable words at {} are not all decodable at {}",
                lower, upper
            ));
        }
        if !banks.sight_word_set(lower).is_subset(banks.sight_word_set(upper)) {
            errors.push(format!(
                "sight words at {} are not all sight words at {}",
                lower, upper
            ));
        }
    }

    // Words filed under more than one pattern resolve to the first one
    let patterns = [Pattern::Cvc, Pattern::Digraph, Pattern::Blend, Pattern::MagicE];
    let mut owners: BTreeMap<&str, Vec<Pattern>> = BTreeMap::new();
    for pattern in patterns {
        if let Some(set) = banks.pattern_set(pattern) {
            for word in set {
                owners.entry(word.as_str()).or_default().push(pattern);
            }
        }
    }
    for (word, found_in) in &owners {
        if found_in.len() > 1 {
            let names: Vec<&str> = found_in.iter().map(Pattern::name).collect();
            warnings.push(format!(
                "'{}' appears in several patterns ({}); classified as {}",
                word,
                names.join(", "),
                names[0]
            ));
        }
    }

    for pattern in patterns {
        if banks.pattern_set(pattern).map_or(true, |s| s.is_empty()) {
            warnings.push(format!("no {} words", pattern.name()));
        }
    }

    for tier in DolchTier::ALL {
        if banks.tier_set(tier).is_empty() {
            warnings.push(format!("Dolch tier '{}' is empty", tier));
        }
    }

    for hw in banks.heart_words() {
        if hw.tricky.is_empty() {
            errors.push(format!("heart word '{}' has no tricky part", hw.word));
        } else if !hw.word.contains(&hw.tricky) {
            errors.push(format!(
                "heart word '{}': tricky part '{}' does not occur in the word",
                hw.word, hw.tricky
            ));
        }
        if hw.sounds_like.is_empty() {
            warnings.push(format!("heart word '{}' has no sounds_like hint", hw.word));
        }
        if !banks.all_sight_words().contains(&hw.word) {
            warnings.push(format!("heart word '{}' is not in any Dolch tier", hw.word));
        }
    }

    (errors, warnings)
}
