/// Word classifier: maps one word to exactly one taxonomy category.
use log::trace;
use rustc_hash::FxHashSet;

use crate::core::word_bank::{normalize_word, WordBanks};
use crate::schema::classification::{WordCategory, WordClassification};
use crate::schema::level::PhonicsLevel;

/// Names that bypass every phonics constraint (story characters).
///
/// Stored normalized; multi-word names contribute each of their words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedNames {
    names: FxHashSet<String>,
}

impl AllowedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .flat_map(|name| {
                name.as_ref()
                    .split_whitespace()
                    .map(normalize_word)
                    .collect::<Vec<_>>()
            })
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.names.contains(&normalize_word(word))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Classifies words against a set of word banks.
///
/// Resolution is a strict priority chain: character name, exclamation,
/// decodable at level, sight word at level (promoted to heart word when
/// irregular), heart word at any level, sight word at any level, decodable
/// at a higher level, and finally the catch-all.
#[derive(Debug, Clone, Copy)]
pub struct WordClassifier<'a> {
    banks: &'a WordBanks,
    permissive_unknown_words: bool,
}

impl<'a> WordClassifier<'a> {
    /// A classifier whose catch-all is `vocabulary`.
    pub fn new(banks: &'a WordBanks) -> Self {
        Self {
            banks,
            permissive_unknown_words: true,
        }
    }

    /// With permissive mode off, unrecognized words resolve to `unknown`
    /// instead of `vocabulary`. Sound effects stay `vocabulary` either way.
    pub fn permissive_unknown_words(mut self, permissive: bool) -> Self {
        self.permissive_unknown_words = permissive;
        self
    }

    pub fn banks(&self) -> &'a WordBanks {
        self.banks
    }

    pub fn classify(
        &self,
        word: &str,
        level: PhonicsLevel,
        allowed: &AllowedNames,
    ) -> WordClassification {
        let word = normalize_word(word);
        let result = self.resolve(&word, level, allowed);
        trace!(
            "classified '{}' at {} as {}",
            word,
            level,
            result.category.name()
        );
        result
    }

    fn resolve(&self, word: &str, level: PhonicsLevel, allowed: &AllowedNames) -> WordClassification {
        let banks = self.banks;

        if allowed.contains(word) {
            return WordClassification::new(word, WordCategory::Character, true);
        }

        if banks.is_exclamation(word) {
            return WordClassification::new(word, WordCategory::Exclamation, true);
        }

        if banks.decodable_set(level).contains(word) {
            let mut result = WordClassification::new(word, WordCategory::Decodable, true);
            result.pattern = Some(banks.pattern_of(word));
            return result;
        }

        let heart_info = banks.heart_word_info(word).cloned();

        if banks.sight_word_set(level).contains(word) {
            let category = if heart_info.is_some() {
                WordCategory::HeartWord
            } else {
                WordCategory::SightWord
            };
            let mut result = WordClassification::new(word, category, true);
            result.heart_info = heart_info;
            return result;
        }

        if heart_info.is_some() {
            let mut result = WordClassification::new(word, WordCategory::HeartWord, false);
            result.heart_info = heart_info;
            return result;
        }

        if banks.all_sight_words().contains(word) {
            return WordClassification::new(word, WordCategory::SightWord, false);
        }

        if let Some(required) = level
            .higher()
            .iter()
            .find(|higher| banks.decodable_set(**higher).contains(word))
        {
            let mut result = WordClassification::new(word, WordCategory::Decodable, false);
            result.pattern = Some(banks.pattern_of(word));
            result.requires_level = Some(*required);
            return result;
        }

        if self.permissive_unknown_words || banks.is_sound_effect(word) {
            WordClassification::new(word, WordCategory::Vocabulary, false)
        } else {
            WordClassification::new(word, WordCategory::Unknown, false)
        }
    }
}
