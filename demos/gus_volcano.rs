//! Gus and the Volcano: classify some words and check a short story.
//!
//! Run with: cargo run --example gus_volcano

use decodable_reader::core::classifier::{AllowedNames, WordClassifier};
use decodable_reader::core::helpers::{rhyming_words, word_family};
use decodable_reader::core::validator::{StoryValidator, ValidationOptions};
use decodable_reader::core::word_bank::WordBanks;
use decodable_reader::schema::level::PhonicsLevel;
use decodable_reader::schema::story::{Page, PageType, StoryDocument};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let banks = WordBanks::load_from_json(Path::new("word_bank_data/word_banks.json"))?;
    let level = PhonicsLevel::Orange;

    println!("=== Word Classifications (level: {}) ===\n", level);
    let classifier = WordClassifier::new(&banks);
    let no_names = AllowedNames::default();
    for word in ["cat", "ship", "stop", "cake", "said", "volcano", "the"] {
        let c = classifier.classify(word, level, &no_names);
        print!("  {:<8} {}", word, c.category.name());
        if let Some(ref heart) = c.heart_info {
            print!(" (tricky: {})", heart.tricky);
        }
        if let Some(required) = c.requires_level {
            print!(" (needs level: {})", required);
        }
        println!();
    }

    println!("\nWords that rhyme with 'cat': {:?}", rhyming_words(&banks, "cat", level));
    println!("Word family '-op': {:?}", word_family(&banks, "op"));

    let story = StoryDocument::new(
        "Gus and the Volcano",
        vec![
            Page::new(1, PageType::Cover, "Gus and the Volcano"),
            Page::new(3, PageType::Story, "Gus ran up the hill."),
            Page::new(4, PageType::Story, "Gus saw a big hole."),
            Page::new(5, PageType::Story, "Red! Hot! Lava!"),
        ],
    );

    let options = ValidationOptions::new()
        .level(level)
        .character_names(["Gus"])
        .topic_words(["volcano", "lava"]);
    let report = StoryValidator::new(&banks).validate(&story, &options);

    println!("\n=== Story Validation ===\n");
    println!("  Valid: {}", report.valid);
    println!("  Accessible: {:.1}%", report.accessible_percent);
    println!("  Decodable: {:.1}%", report.strict_decodable_percent);
    println!("  Issues: {}", report.issues.len());
    for issue in &report.issues {
        println!("    - {:?}", issue);
    }

    Ok(())
}
