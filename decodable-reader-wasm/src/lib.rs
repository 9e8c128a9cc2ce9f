//! WASM bindings for decodable-reader powering the in-browser story checker.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use decodable_reader::core::classifier::{AllowedNames, WordClassifier};
use decodable_reader::core::config::ValidationConfig;
use decodable_reader::core::helpers;
use decodable_reader::core::validator::{StoryValidator, ValidationOptions};
use decodable_reader::core::word_bank::WordBanks;
use decodable_reader::schema::level::PhonicsLevel;

// ---------------------------------------------------------------------------
// Embedded word banks, compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const WORD_BANKS: &str = include_str!("../../word_bank_data/word_banks.json");
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------
fn parse_level(s: &str) -> Result<PhonicsLevel, JsError> {
    s.parse::<PhonicsLevel>()
        .map_err(|e| JsError::new(&e.to_string()))
}

fn parse_names(names_json: &str) -> Result<Vec<String>, JsError> {
    if names_json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(names_json)
        .map_err(|e| JsError::new(&format!("Invalid names JSON: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

/// Word banks plus validation policy, held for the lifetime of the page.
#[wasm_bindgen]
pub struct ReaderChecker {
    banks: WordBanks,
    config: ValidationConfig,
}

#[wasm_bindgen]
impl ReaderChecker {
    /// Create a checker using the built-in word banks.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ReaderChecker, JsError> {
        Self::with_word_banks(data::WORD_BANKS)
    }

    /// Create a checker from word-bank JSON supplied by the page.
    pub fn with_word_banks(word_banks_json: &str) -> Result<ReaderChecker, JsError> {
        let banks = WordBanks::parse_json(word_banks_json)
            .map_err(|e| JsError::new(&format!("Word bank error: {e}")))?;
        Ok(ReaderChecker {
            banks,
            config: ValidationConfig::default(),
        })
    }

    /// Change the accessible-percentage threshold (0-100).
    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), JsError> {
        self.config = self
            .config
            .clone()
            .with_threshold(threshold)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(())
    }

    /// Validate a story document (JSON) at a level. Returns the report as JSON.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "title": "Gus and the Volcano",
    ///   "character": {"name": "Gus"},
    ///   "pages": [{"page": 3, "type": "story", "text": "Gus ran up the hill."}]
    /// }
    /// ```
    pub fn validate_story(&self, story_json: &str, level: &str) -> Result<String, JsError> {
        let options = ValidationOptions::new().level(parse_level(level)?);
        let report = StoryValidator::with_config(&self.banks, self.config.clone())
            .validate_json(story_json, &options)
            .map_err(|e| JsError::new(&format!("Invalid story: {e}")))?;
        to_json(&report)
    }

    /// Classify one word. `names_json` is a JSON array of character names.
    pub fn classify_word(&self, word: &str, level: &str, names_json: &str) -> Result<String, JsError> {
        let names = AllowedNames::new(parse_names(names_json)?);
        let classification = WordClassifier::new(&self.banks)
            .permissive_unknown_words(self.config.permissive_unknown_words)
            .classify(word, parse_level(level)?, &names);
        to_json(&classification)
    }

    /// Return a JSON array of rhymes decodable at the level.
    pub fn rhymes(&self, word: &str, level: &str) -> Result<String, JsError> {
        to_json(&helpers::rhyming_words(&self.banks, word, parse_level(level)?))
    }

    /// Return a seeded JSON word sample for writing a story at the level.
    pub fn sample_words(&self, level: &str, count: usize, seed: u64) -> Result<String, JsError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = helpers::words_for_story(&self.banks, parse_level(level)?, count, &mut rng);
        to_json(&sample)
    }

    /// Return JSON array of level names, lowest first.
    pub fn levels() -> String {
        serde_json::to_string(&PhonicsLevel::ALL).unwrap_or_else(|_| "[]".to_string())
    }
}
