use serde::{Deserialize, Serialize};

use super::level::{Pattern, PhonicsLevel};

/// The closed taxonomy a single word resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    Decodable,
    SightWord,
    HeartWord,
    Exclamation,
    Character,
    Vocabulary,
    Unknown,
}

impl WordCategory {
    pub const ALL: [WordCategory; 7] = [
        WordCategory::Decodable,
        WordCategory::SightWord,
        WordCategory::HeartWord,
        WordCategory::Exclamation,
        WordCategory::Character,
        WordCategory::Vocabulary,
        WordCategory::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Decodable => "decodable",
            Self::SightWord => "sight_word",
            Self::HeartWord => "heart_word",
            Self::Exclamation => "exclamation",
            Self::Character => "character",
            Self::Vocabulary => "vocabulary",
            Self::Unknown => "unknown",
        }
    }
}

/// A word with an irregular grapheme-phoneme mapping, memorized "by heart".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartWord {
    pub word: String,
    /// The part of the word that does not follow the usual rules.
    #[serde(default, alias = "tricky_substring")]
    pub tricky: String,
    #[serde(default)]
    pub sounds_like: String,
}

/// Result of classifying one word at one phonics level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordClassification {
    pub word: String,
    pub category: WordCategory,
    /// True when a reader at the requested level can handle the word.
    pub decodable_at_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_info: Option<HeartWord>,
    /// Lowest level at which a too-advanced decodable word becomes decodable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_level: Option<PhonicsLevel>,
}

impl WordClassification {
    pub(crate) fn new(word: &str, category: WordCategory, decodable_at_level: bool) -> Self {
        Self {
            word: word.to_string(),
            category,
            decodable_at_level,
            pattern: None,
            heart_info: None,
            requires_level: None,
        }
    }

    /// True for decodable words that only become decodable at a higher level.
    pub fn is_above_level(&self) -> bool {
        self.category == WordCategory::Decodable && self.requires_level.is_some()
    }
}
