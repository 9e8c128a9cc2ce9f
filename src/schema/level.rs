use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("unknown phonics level '{0}' (expected yellow, orange, red or purple)")]
    UnknownLevel(String),
    #[error("unknown sight-word tier '{0}'")]
    UnknownTier(String),
}

/// Phonics difficulty tier. Each level includes everything below it:
/// yellow ⊂ orange ⊂ red ⊂ purple.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PhonicsLevel {
    /// CVC words only.
    Yellow,
    /// Adds digraphs.
    #[default]
    Orange,
    /// Adds blends.
    Red,
    /// Adds magic e.
    Purple,
}

static LADDER: [PhonicsLevel; 4] = PhonicsLevel::ALL;

impl PhonicsLevel {
    /// All levels in ladder order.
    pub const ALL: [PhonicsLevel; 4] = [
        PhonicsLevel::Yellow,
        PhonicsLevel::Orange,
        PhonicsLevel::Red,
        PhonicsLevel::Purple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
        }
    }

    /// Position on the ladder, 0 for yellow.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Levels strictly above this one, in ladder order.
    pub fn higher(&self) -> &'static [PhonicsLevel] {
        &LADDER[self.index() + 1..]
    }

    /// The decodable pattern this level introduces.
    pub fn introduced_pattern(&self) -> Pattern {
        match self {
            Self::Yellow => Pattern::Cvc,
            Self::Orange => Pattern::Digraph,
            Self::Red => Pattern::Blend,
            Self::Purple => Pattern::MagicE,
        }
    }

    /// The highest Dolch tier a reader at this level is expected to know.
    pub fn dolch_tier(&self) -> DolchTier {
        match self {
            Self::Yellow => DolchTier::PrePrimer,
            Self::Orange => DolchTier::Primer,
            Self::Red => DolchTier::FirstGrade,
            Self::Purple => DolchTier::SecondGrade,
        }
    }
}

impl fmt::Display for PhonicsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhonicsLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yellow" => Ok(Self::Yellow),
            "orange" => Ok(Self::Orange),
            "red" => Ok(Self::Red),
            "purple" => Ok(Self::Purple),
            _ => Err(LevelError::UnknownLevel(s.to_string())),
        }
    }
}

/// Dolch sight-word tiers, cumulative in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DolchTier {
    PrePrimer,
    Primer,
    FirstGrade,
    SecondGrade,
}

impl DolchTier {
    pub const ALL: [DolchTier; 4] = [
        DolchTier::PrePrimer,
        DolchTier::Primer,
        DolchTier::FirstGrade,
        DolchTier::SecondGrade,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PrePrimer => "pre_primer",
            Self::Primer => "primer",
            Self::FirstGrade => "first_grade",
            Self::SecondGrade => "second_grade",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DolchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DolchTier {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pre_primer" => Ok(Self::PrePrimer),
            "primer" => Ok(Self::Primer),
            "first_grade" => Ok(Self::FirstGrade),
            "second_grade" => Ok(Self::SecondGrade),
            _ => Err(LevelError::UnknownTier(s.to_string())),
        }
    }
}

/// Phonics pattern of a decodable word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Cvc,
    Digraph,
    Blend,
    MagicE,
    Unknown,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cvc => "cvc",
            Self::Digraph => "digraph",
            Self::Blend => "blend",
            Self::MagicE => "magic_e",
            Self::Unknown => "unknown",
        }
    }
}
