use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::classification::{WordCategory, WordClassification};
use super::level::PhonicsLevel;

/// A single problem found in a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// The offending word, or `None` for story-level issues.
    pub word: Option<String>,
    pub issue: String,
    /// The page the word came from, or `None` for story-level issues.
    pub page: Option<u32>,
}

impl Issue {
    pub fn for_word(word: &str, issue: String, page: u32) -> Self {
        Self {
            word: Some(word.to_string()),
            issue,
            page: Some(page),
        }
    }

    pub fn for_story(issue: String) -> Self {
        Self {
            word: None,
            issue,
            page: None,
        }
    }
}

/// Outcome of validating one story at one phonics level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub level: PhonicsLevel,
    pub total_words: usize,
    pub decodable_count: usize,
    pub sight_word_count: usize,
    pub heart_word_count: usize,
    pub exclamation_count: usize,
    pub character_count: usize,
    pub vocabulary_count: usize,
    pub unknown_count: usize,
    /// Decodable words that need a higher level than requested.
    pub above_level_count: usize,
    /// Tokens without any letters, left out of `total_words`.
    pub skipped_tokens: usize,
    pub accessible_percent: f64,
    pub strict_decodable_percent: f64,
    /// Vocabulary words missing from the topic-word list, first occurrence order.
    pub untracked_vocabulary: Vec<String>,
    pub issues: Vec<Issue>,
    pub word_breakdown: BTreeMap<String, WordClassification>,
}

impl ValidationReport {
    pub(crate) fn empty(level: PhonicsLevel) -> Self {
        Self {
            valid: false,
            level,
            total_words: 0,
            decodable_count: 0,
            sight_word_count: 0,
            heart_word_count: 0,
            exclamation_count: 0,
            character_count: 0,
            vocabulary_count: 0,
            unknown_count: 0,
            above_level_count: 0,
            skipped_tokens: 0,
            accessible_percent: 0.0,
            strict_decodable_percent: 0.0,
            untracked_vocabulary: Vec::new(),
            issues: Vec::new(),
            word_breakdown: BTreeMap::new(),
        }
    }

    /// Count for one category.
    pub fn count(&self, category: WordCategory) -> usize {
        match category {
            WordCategory::Decodable => self.decodable_count,
            WordCategory::SightWord => self.sight_word_count,
            WordCategory::HeartWord => self.heart_word_count,
            WordCategory::Exclamation => self.exclamation_count,
            WordCategory::Character => self.character_count,
            WordCategory::Vocabulary => self.vocabulary_count,
            WordCategory::Unknown => self.unknown_count,
        }
    }

    /// Words a beginning reader at this level can handle.
    pub fn accessible_count(&self) -> usize {
        self.decodable_count
            + self.sight_word_count
            + self.heart_word_count
            + self.exclamation_count
            + self.character_count
    }

    /// Issues attached to a specific word.
    pub fn word_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.word.is_some())
    }
}
