/// Story documents produced by the text-generation side and consumed by the validator.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("malformed story: missing 'pages'")]
    MissingPages,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page role within a book. Only cover and story pages carry readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    Cover,
    Story,
    Wordlist,
    Copyright,
    Decorative,
    #[default]
    #[serde(other)]
    Other,
}

impl PageType {
    pub fn is_readable(&self) -> bool {
        matches!(self, Self::Cover | Self::Story)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, alias = "page_number")]
    pub page: u32,
    #[serde(default, rename = "type")]
    pub page_type: PageType,
    #[serde(default)]
    pub text: String,
}

impl Page {
    pub fn new(page: u32, page_type: PageType, text: &str) -> Self {
        Self {
            page,
            page_type,
            text: text.to_string(),
        }
    }
}

/// The `character` field: either a profile with a name or a free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterField {
    Description(String),
    Profile {
        #[serde(default)]
        name: Option<String>,
    },
    Other(serde_json::Value),
}

/// Topic vocabulary inside a word list: a flat list or `{ "topic": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicVocabulary {
    Flat(Vec<String>),
    Grouped {
        #[serde(default)]
        topic: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordList {
    #[serde(default)]
    pub new: Vec<String>,
    #[serde(default)]
    pub vocabulary: Option<TopicVocabulary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordListField {
    Structured(WordList),
    Other(serde_json::Value),
}

/// A generated story: title, optional metadata, and ordered pages.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StoryDocument {
    pub title: String,
    pub character: Option<CharacterField>,
    pub word_list: Option<WordListField>,
    pub pages: Vec<Page>,
}

#[derive(Deserialize)]
struct RawStory {
    #[serde(default)]
    title: String,
    #[serde(default)]
    character: Option<CharacterField>,
    #[serde(default)]
    word_list: Option<WordListField>,
    pages: Option<Vec<Page>>,
}

impl StoryDocument {
    pub fn new(title: &str, pages: Vec<Page>) -> Self {
        Self {
            title: title.to_string(),
            character: None,
            word_list: None,
            pages,
        }
    }

    /// Parse a story from JSON. A document without `pages` is rejected.
    pub fn parse_json(input: &str) -> Result<StoryDocument, StoryError> {
        let raw: RawStory = serde_json::from_str(input)?;
        Self::from_raw(raw)
    }

    /// Load a story from a JSON file.
    pub fn load_from_json(path: &Path) -> Result<StoryDocument, StoryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_json(&contents)
    }

    fn from_raw(raw: RawStory) -> Result<StoryDocument, StoryError> {
        let pages = raw.pages.ok_or(StoryError::MissingPages)?;
        Ok(StoryDocument {
            title: raw.title,
            character: raw.character,
            word_list: raw.word_list,
            pages,
        })
    }

    /// Pages whose text counts toward validation.
    pub fn readable_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages
            .iter()
            .filter(|p| p.page_type.is_readable() && !p.text.is_empty())
    }

    /// Best-effort character names from the `character` field.
    ///
    /// A profile contributes its `name`; a description contributes its first
    /// token when that token is capitalized.
    pub fn derived_character_names(&self) -> Vec<String> {
        match &self.character {
            Some(CharacterField::Profile { name: Some(name) }) if !name.trim().is_empty() => {
                vec![name.trim().to_string()]
            }
            Some(CharacterField::Description(text)) => text
                .split_whitespace()
                .next()
                .filter(|first| first.chars().next().is_some_and(char::is_uppercase))
                .map(|first| vec![first.to_string()])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Best-effort topic words from the `word_list` field (`new` plus topic vocabulary).
    pub fn derived_topic_words(&self) -> Vec<String> {
        let Some(WordListField::Structured(list)) = &self.word_list else {
            return Vec::new();
        };
        let mut words = list.new.clone();
        match &list.vocabulary {
            Some(TopicVocabulary::Flat(topic)) | Some(TopicVocabulary::Grouped { topic }) => {
                words.extend(topic.iter().cloned());
            }
            None => {}
        }
        words
    }
}
