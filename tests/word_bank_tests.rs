/// Shipped word-bank data tests: loading, ladder invariants, and the
/// reference classification scenarios.

use decodable_reader::core::classifier::{AllowedNames, WordClassifier};
use decodable_reader::core::helpers::{rhyming_words, suggest_alternatives};
use decodable_reader::core::validator::{StoryValidator, ValidationOptions};
use decodable_reader::core::word_bank::WordBanks;
use decodable_reader::schema::classification::WordCategory;
use decodable_reader::schema::level::{DolchTier, Pattern, PhonicsLevel};
use decodable_reader::schema::story::{Page, PageType, StoryDocument};
use std::path::Path;

fn shipped_banks() -> WordBanks {
    let _ = env_logger::builder().is_test(true).try_init();
    WordBanks::load_from_json(Path::new("word_bank_data/word_banks.json")).unwrap()
}

fn one_page(text: &str) -> StoryDocument {
    StoryDocument::new("Test", vec![Page::new(3, PageType::Story, text)])
}

#[test]
fn shipped_word_banks_load() {
    let banks = shipped_banks();
    for pattern in [Pattern::Cvc, Pattern::Digraph, Pattern::Blend, Pattern::MagicE] {
        assert!(
            !banks.pattern_set(pattern).unwrap().is_empty(),
            "No {} words",
            pattern.name()
        );
    }
    for tier in DolchTier::ALL {
        assert!(!banks.tier_set(tier).is_empty(), "Empty tier {}", tier);
    }
    assert!(banks.heart_words().count() >= 20);
    assert!(!banks.topic_vocabulary("volcano", None).is_empty());
}

#[test]
fn shipped_ladder_is_monotonic() {
    let banks = shipped_banks();
    for pair in PhonicsLevel::ALL.windows(2) {
        assert!(banks.decodable_set(pair[0]).is_subset(banks.decodable_set(pair[1])));
        assert!(banks.sight_word_set(pair[0]).is_subset(banks.sight_word_set(pair[1])));
        assert!(banks.decodable_set(pair[0]).len() < banks.decodable_set(pair[1]).len());
    }
}

#[test]
fn shipped_heart_words_are_well_formed() {
    let banks = shipped_banks();
    for hw in banks.heart_words() {
        assert!(
            hw.word.contains(&hw.tricky),
            "Heart word '{}' does not contain '{}'",
            hw.word,
            hw.tricky
        );
        assert!(!hw.sounds_like.is_empty());
    }
}

#[test]
fn scenario_all_decodable_yellow() {
    let banks = shipped_banks();
    let report = StoryValidator::new(&banks).validate(
        &one_page("Gus ran up the hill."),
        &ValidationOptions::new()
            .level(PhonicsLevel::Yellow)
            .character_names(["Gus"]),
    );
    assert_eq!(report.total_words, 5);
    assert_eq!(report.word_breakdown["gus"].category, WordCategory::Character);
    for word in ["ran", "up", "the", "hill"] {
        let category = report.word_breakdown[word].category;
        assert!(
            matches!(category, WordCategory::Decodable | WordCategory::SightWord),
            "'{}' classified as {:?}",
            word,
            category
        );
    }
    assert_eq!(report.accessible_percent, 100.0);
    assert!(report.valid);
}

#[test]
fn scenario_heart_word_detection() {
    let banks = shipped_banks();
    let report = StoryValidator::new(&banks).validate(
        &one_page("Gus said hello"),
        &ValidationOptions::new()
            .level(PhonicsLevel::Yellow)
            .character_names(["Gus"]),
    );
    let said = &report.word_breakdown["said"];
    assert_eq!(said.category, WordCategory::HeartWord);
    assert_eq!(said.heart_info.as_ref().unwrap().tricky, "ai");
    assert_eq!(said.heart_info.as_ref().unwrap().sounds_like, "sed");
}

#[test]
fn scenario_requires_higher_level() {
    let banks = shipped_banks();
    let report = StoryValidator::new(&banks).validate(
        &one_page("The cake is hot."),
        &ValidationOptions::new().level(PhonicsLevel::Yellow),
    );
    let cake = &report.word_breakdown["cake"];
    assert_eq!(cake.category, WordCategory::Decodable);
    assert!(!cake.decodable_at_level);
    assert_eq!(cake.requires_level, Some(PhonicsLevel::Purple));
    assert!(report
        .word_issues()
        .any(|i| i.word.as_deref() == Some("cake")));
}

#[test]
fn scenario_vocabulary_passthrough() {
    let banks = shipped_banks();
    let report = StoryValidator::new(&banks).validate(
        &one_page("The volcano is big."),
        &ValidationOptions::new()
            .level(PhonicsLevel::Orange)
            .topic_words(["volcano"]),
    );
    assert_eq!(report.word_breakdown["volcano"].category, WordCategory::Vocabulary);
    assert_eq!(report.vocabulary_count, 1);
    assert!(report
        .word_issues()
        .all(|i| i.word.as_deref() != Some("volcano")));
}

#[test]
fn character_override_beats_every_category() {
    let banks = shipped_banks();
    let classifier = WordClassifier::new(&banks);
    for word in ["cat", "said", "cake", "the", "wow", "volcano", "woof"] {
        let names = AllowedNames::new([word]);
        for level in PhonicsLevel::ALL {
            assert_eq!(
                classifier.classify(word, level, &names).category,
                WordCategory::Character
            );
        }
    }
}

#[test]
fn helpers_on_shipped_data() {
    let banks = shipped_banks();
    let rhymes = rhyming_words(&banks, "cat", PhonicsLevel::Yellow);
    assert!(!rhymes.is_empty() && rhymes.len() <= 10);
    assert!(rhymes.iter().all(|w| w.ends_with("at") && w != "cat"));
    assert_eq!(suggest_alternatives(&banks, "large", PhonicsLevel::Yellow), vec!["big"]);
}
