/// Story validator: walks readable pages, classifies every word, and
/// scores the story for a target phonics level.
use log::debug;
use rustc_hash::FxHashSet;

use crate::core::classifier::{AllowedNames, WordClassifier};
use crate::core::config::ValidationConfig;
use crate::core::word_bank::{normalize_word, WordBanks};
use crate::schema::classification::WordCategory;
use crate::schema::level::PhonicsLevel;
use crate::schema::report::{Issue, ValidationReport};
use crate::schema::story::{StoryDocument, StoryError};

/// Per-call overrides. Anything left unset falls back to the config
/// (level) or to what the story document itself declares (names, topic words).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOptions {
    pub level: Option<PhonicsLevel>,
    pub character_names: Option<Vec<String>>,
    pub topic_words: Option<Vec<String>>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: PhonicsLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn character_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.character_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn topic_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topic_words = Some(words.into_iter().map(Into::into).collect());
        self
    }
}

/// A word pulled from a page, with the page it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryWord {
    pub word: String,
    pub page: u32,
}

/// Split narrative text into lowercase words.
///
/// All punctuation except apostrophes becomes a word break; apostrophes
/// wrapping a word are dropped so only contraction apostrophes remain.
pub fn extract_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| match c {
            '\u{2019}' => '\'',
            c if c.is_alphanumeric() || c == '_' || c == '\'' || c.is_whitespace() => c,
            _ => ' ',
        })
        .collect();

    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates stories against shared, immutable word banks.
///
/// Holds no mutable state, so one validator can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct StoryValidator<'a> {
    banks: &'a WordBanks,
    config: ValidationConfig,
}

impl<'a> StoryValidator<'a> {
    pub fn new(banks: &'a WordBanks) -> Self {
        Self::with_config(banks, ValidationConfig::default())
    }

    pub fn with_config(banks: &'a WordBanks, config: ValidationConfig) -> Self {
        Self { banks, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Parse a JSON story and validate it. Fails only when the document
    /// itself is malformed.
    pub fn validate_json(
        &self,
        input: &str,
        options: &ValidationOptions,
    ) -> Result<ValidationReport, StoryError> {
        let story = StoryDocument::parse_json(input)?;
        Ok(self.validate(&story, options))
    }

    /// Readable words of a story, in page order.
    pub fn story_words(story: &StoryDocument) -> Vec<StoryWord> {
        story
            .readable_pages()
            .flat_map(|page| {
                extract_words(&page.text)
                    .into_iter()
                    .map(move |word| StoryWord {
                        word,
                        page: page.page,
                    })
            })
            .collect()
    }

    pub fn validate(&self, story: &StoryDocument, options: &ValidationOptions) -> ValidationReport {
        let level = options.level.unwrap_or(self.config.default_level);

        let names = match &options.character_names {
            Some(names) => AllowedNames::new(names),
            None => {
                let derived = story.derived_character_names();
                if derived.is_empty() {
                    debug!("story '{}' declares no character name", story.title);
                }
                AllowedNames::new(derived)
            }
        };

        let topic_words: FxHashSet<String> = match &options.topic_words {
            Some(words) => words.iter().map(|w| normalize_word(w)).collect(),
            None => story
                .derived_topic_words()
                .iter()
                .map(|w| normalize_word(w))
                .collect(),
        };

        let classifier = WordClassifier::new(self.banks)
            .permissive_unknown_words(self.config.permissive_unknown_words);
        let mut report = ValidationReport::empty(level);
        let mut untracked_seen: FxHashSet<String> = FxHashSet::default();

        for StoryWord { word, page } in Self::story_words(story) {
            if !word.chars().any(char::is_alphabetic) {
                report.skipped_tokens += 1;
                continue;
            }
            report.total_words += 1;

            let classification = classifier.classify(&word, level, &names);

            match classification.category {
                WordCategory::Decodable => {
                    if let Some(required) = classification.requires_level {
                        report.above_level_count += 1;
                        report.issues.push(Issue::for_word(
                            &word,
                            format!("requires level '{}'", required),
                            page,
                        ));
                    } else {
                        report.decodable_count += 1;
                    }
                }
                WordCategory::SightWord => report.sight_word_count += 1,
                WordCategory::HeartWord => report.heart_word_count += 1,
                WordCategory::Exclamation => report.exclamation_count += 1,
                WordCategory::Character => report.character_count += 1,
                WordCategory::Vocabulary => {
                    report.vocabulary_count += 1;
                    let tracked = topic_words.contains(&classification.word)
                        || self.banks.is_sound_effect(&classification.word);
                    if !tracked {
                        if untracked_seen.insert(classification.word.clone()) {
                            report.untracked_vocabulary.push(classification.word.clone());
                        }
                        if self.config.flag_untracked_vocabulary {
                            report.issues.push(Issue::for_word(
                                &word,
                                "vocabulary word not in topic list".to_string(),
                                page,
                            ));
                        }
                    }
                }
                WordCategory::Unknown => {
                    report.unknown_count += 1;
                    report.issues.push(Issue::for_word(
                        &word,
                        "unknown word, not in any word bank".to_string(),
                        page,
                    ));
                }
            }

            report
                .word_breakdown
                .insert(classification.word.clone(), classification);
        }

        if report.total_words > 0 {
            let total = report.total_words as f64;
            report.accessible_percent = (report.accessible_count() * 100) as f64 / total;
            report.strict_decodable_percent = (report.decodable_count * 100) as f64 / total;
        }

        report.valid = report.total_words > 0 && self.config.accepts(report.accessible_percent);
        if !report.valid {
            report.issues.push(Issue::for_story(format!(
                "only {:.2}% accessible (target: {}%+)",
                report.accessible_percent, self.config.accessible_threshold
            )));
        }

        debug!(
            "validated '{}' at {}: {} words, {:.1}% accessible, {:.1}% decodable, {} issues, valid={}",
            story.title,
            level,
            report.total_words,
            report.accessible_percent,
            report.strict_decodable_percent,
            report.issues.len(),
            report.valid
        );

        report
    }
}
