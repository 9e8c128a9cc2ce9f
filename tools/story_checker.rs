/// Story Checker: validates a generated story against the phonics word banks.
///
/// Usage: story_checker <story.json> [--level <level>] [--word-banks <path>]
///                      [--config <path>] [--names <a,b>] [--json]

use decodable_reader::core::config::ValidationConfig;
use decodable_reader::core::validator::{StoryValidator, ValidationOptions};
use decodable_reader::core::word_bank::WordBanks;
use decodable_reader::schema::classification::WordCategory;
use decodable_reader::schema::level::PhonicsLevel;
use decodable_reader::schema::report::ValidationReport;
use decodable_reader::schema::story::StoryDocument;
use std::path::Path;
use std::process;

const DEFAULT_WORD_BANKS: &str = "word_bank_data/word_banks.json";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!(
            "Usage: story_checker <story.json> [--level <level>] [--word-banks <path>] [--config <path>] [--names <a,b>] [--json]"
        );
        process::exit(0);
    }

    let story_path = &args[1];
    let mut level = None;
    let mut word_banks_path = DEFAULT_WORD_BANKS.to_string();
    let mut config_path = None;
    let mut names = None;
    let mut as_json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--level" if i + 1 < args.len() => {
                i += 1;
                match args[i].parse::<PhonicsLevel>() {
                    Ok(l) => level = Some(l),
                    Err(e) => {
                        eprintln!("ERROR: {}", e);
                        process::exit(2);
                    }
                }
            }
            "--word-banks" if i + 1 < args.len() => {
                i += 1;
                word_banks_path = args[i].clone();
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--names" if i + 1 < args.len() => {
                i += 1;
                let list: Vec<String> = args[i]
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                names = Some(list);
            }
            "--json" => as_json = true,
            other => eprintln!("WARNING: ignoring argument '{}'", other),
        }
        i += 1;
    }

    let banks = match WordBanks::load_from_json(Path::new(&word_banks_path)) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("ERROR: Failed to load word banks from {}: {}", word_banks_path, e);
            process::exit(2);
        }
    };

    let config = match config_path {
        Some(ref path) => match ValidationConfig::load_from_ron(Path::new(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("ERROR: Failed to load config {}: {}", path, e);
                process::exit(2);
            }
        },
        None => ValidationConfig::default(),
    };

    let story = match StoryDocument::load_from_json(Path::new(story_path)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: Failed to load story {}: {}", story_path, e);
            process::exit(2);
        }
    };

    let mut options = ValidationOptions::new();
    options.level = level;
    options.character_names = names;

    let validator = StoryValidator::with_config(&banks, config);
    let report = validator.validate(&story, &options);

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("ERROR: Failed to serialize report: {}", e);
                process::exit(2);
            }
        }
    } else {
        print_report(&story, &report);
    }

    process::exit(if report.valid { 0 } else { 1 });
}

fn print_report(story: &StoryDocument, report: &ValidationReport) {
    println!("\n=== Story Check: {} ({}) ===\n", story.title, report.level);

    println!("Total words: {}", report.total_words);
    for category in WordCategory::ALL {
        println!("  {:<12} {}", category.name(), report.count(category));
    }
    println!("  {:<12} {}", "above_level", report.above_level_count);
    if report.skipped_tokens > 0 {
        println!("  {:<12} {}", "skipped", report.skipped_tokens);
    }

    println!();
    println!("Accessible:       {:.1}%", report.accessible_percent);
    println!("Strict decodable: {:.1}%", report.strict_decodable_percent);

    if !report.untracked_vocabulary.is_empty() {
        println!(
            "\nVocabulary not in topic list: {}",
            report.untracked_vocabulary.join(", ")
        );
    }

    if !report.issues.is_empty() {
        println!("\nIssues:");
        for issue in &report.issues {
            match (&issue.word, issue.page) {
                (Some(word), Some(page)) => println!("  page {:>2}: {}: {}", page, word, issue.issue),
                _ => println!("  {}", issue.issue),
            }
        }
    }

    println!("\nResult: {}", if report.valid { "VALID" } else { "INVALID" });
}
