/// Word bank repository: loading, normalization, and level-aware lookups.
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::classification::HeartWord;
use crate::schema::level::{DolchTier, Pattern, PhonicsLevel};

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("malformed word bank: missing required section '{0}'")]
    MissingSection(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Interjections that are always acceptable, whatever the level.
pub const DEFAULT_EXCLAMATIONS: &[&str] = &[
    "wow", "oh", "ooh", "ah", "uh", "hey", "yay", "boo", "ow", "oof", "whoa", "yikes", "oops",
    "phew", "hmm", "shh", "psst",
];

/// Case-fold a word and strip surrounding whitespace, punctuation and quote marks.
///
/// Inner apostrophes survive, so contractions like "don't" stay intact.
pub fn normalize_word(word: &str) -> String {
    word.trim()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .replace('\u{2019}', "'")
        .to_lowercase()
}

/// A category's words: either one flat list or lists keyed by position
/// ("initial", "final") or sub-pattern ("bl", "cr").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordGroup {
    Flat(Vec<String>),
    Positional(BTreeMap<String, Vec<String>>),
}

impl WordGroup {
    /// All words in the group, flattened.
    pub fn words(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        match self {
            Self::Flat(words) => Box::new(words.iter()),
            Self::Positional(map) => Box::new(map.values().flatten()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodableWords {
    /// Vowel pattern ("short_a") → words.
    #[serde(default)]
    pub cvc: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub digraphs: BTreeMap<String, WordGroup>,
    #[serde(default)]
    pub blends: BTreeMap<String, WordGroup>,
    /// Vowel key ("a_e") → words.
    #[serde(default)]
    pub magic_e: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DolchTiers {
    #[serde(default)]
    pub pre_primer: Vec<String>,
    #[serde(default)]
    pub primer: Vec<String>,
    #[serde(default)]
    pub first_grade: Vec<String>,
    #[serde(default)]
    pub second_grade: Vec<String>,
}

impl DolchTiers {
    pub fn tier(&self, tier: DolchTier) -> &[String] {
        match tier {
            DolchTier::PrePrimer => &self.pre_primer,
            DolchTier::Primer => &self.primer,
            DolchTier::FirstGrade => &self.first_grade,
            DolchTier::SecondGrade => &self.second_grade,
        }
    }

    fn tier_mut(&mut self, tier: DolchTier) -> &mut Vec<String> {
        match tier {
            DolchTier::PrePrimer => &mut self.pre_primer,
            DolchTier::Primer => &mut self.primer,
            DolchTier::FirstGrade => &mut self.first_grade,
            DolchTier::SecondGrade => &mut self.second_grade,
        }
    }
}

/// Normalized word-bank contents. Every word is case-folded and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBankData {
    pub decodable: DecodableWords,
    pub dolch: DolchTiers,
    pub heart_words: Vec<HeartWord>,
    #[serde(default)]
    pub sound_effects: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub topic_vocabulary: BTreeMap<String, WordGroup>,
    /// Extra exclamations on top of `DEFAULT_EXCLAMATIONS`.
    #[serde(default)]
    pub exclamations: Vec<String>,
}

// Source-file shapes. The published word-bank file mixes flat lists,
// position-keyed maps and free-text `_note` entries, so everything is
// read loosely here and normalized into `WordBankData`.

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Words(Vec<String>),
    Note(serde_json::Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGroup {
    Flat(Vec<String>),
    Positional(BTreeMap<String, RawEntry>),
    Note(serde_json::Value),
}

#[derive(Debug, Deserialize)]
struct RawDecodable {
    #[serde(default)]
    cvc: BTreeMap<String, RawGroup>,
    #[serde(default)]
    digraphs: BTreeMap<String, RawGroup>,
    #[serde(default)]
    blends: BTreeMap<String, RawGroup>,
    #[serde(default)]
    magic_e: BTreeMap<String, RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawSightWords {
    dolch: Option<DolchTiers>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawHeartWords {
    List(Vec<HeartWord>),
    Wrapped { words: Vec<HeartWord> },
}

#[derive(Debug, Deserialize)]
struct RawWordBank {
    decodable: Option<RawDecodable>,
    sight_words: Option<RawSightWords>,
    heart_words: Option<RawHeartWords>,
    #[serde(default)]
    sound_effects: BTreeMap<String, RawGroup>,
    #[serde(default)]
    topic_vocabulary: BTreeMap<String, RawGroup>,
    #[serde(default)]
    exclamations: Vec<String>,
}

fn normalize_list(words: Vec<String>) -> Vec<String> {
    words
        .iter()
        .map(|w| normalize_word(w))
        .filter(|w| !w.is_empty())
        .collect()
}

impl RawGroup {
    /// `None` for notes and other non-word entries.
    fn into_group(self) -> Option<WordGroup> {
        match self {
            Self::Flat(words) => Some(WordGroup::Flat(normalize_list(words))),
            Self::Positional(map) => {
                let positions: BTreeMap<String, Vec<String>> = map
                    .into_iter()
                    .filter_map(|(key, entry)| match entry {
                        RawEntry::Words(words) => Some((key, normalize_list(words))),
                        RawEntry::Note(_) => None,
                    })
                    .collect();
                Some(WordGroup::Positional(positions))
            }
            Self::Note(_) => None,
        }
    }

    fn into_flat(self) -> Option<Vec<String>> {
        self.into_group()
            .map(|group| group.words().cloned().collect())
    }
}

fn groups(raw: BTreeMap<String, RawGroup>) -> BTreeMap<String, WordGroup> {
    raw.into_iter()
        .filter_map(|(key, group)| group.into_group().map(|g| (key, g)))
        .collect()
}

fn flat_groups(raw: BTreeMap<String, RawGroup>) -> BTreeMap<String, Vec<String>> {
    raw.into_iter()
        .filter_map(|(key, group)| group.into_flat().map(|words| (key, words)))
        .collect()
}

impl WordBankData {
    /// Parse word-bank source JSON. `decodable`, `sight_words.dolch` and
    /// `heart_words` are required.
    pub fn parse_json(input: &str) -> Result<WordBankData, WordBankError> {
        let raw: RawWordBank = serde_json::from_str(input)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawWordBank) -> Result<WordBankData, WordBankError> {
        let decodable = raw
            .decodable
            .ok_or(WordBankError::MissingSection("decodable"))?;
        let sight_words = raw
            .sight_words
            .ok_or(WordBankError::MissingSection("sight_words"))?;
        let dolch = sight_words
            .dolch
            .ok_or(WordBankError::MissingSection("sight_words.dolch"))?;
        let heart_words = match raw
            .heart_words
            .ok_or(WordBankError::MissingSection("heart_words"))?
        {
            RawHeartWords::List(words) | RawHeartWords::Wrapped { words } => words,
        };

        let mut data = WordBankData {
            decodable: DecodableWords {
                cvc: flat_groups(decodable.cvc),
                digraphs: groups(decodable.digraphs),
                blends: groups(decodable.blends),
                magic_e: flat_groups(decodable.magic_e),
            },
            dolch: DolchTiers::default(),
            heart_words: heart_words
                .into_iter()
                .map(|hw| HeartWord {
                    word: normalize_word(&hw.word),
                    tricky: hw.tricky.trim().to_lowercase(),
                    sounds_like: hw.sounds_like.trim().to_string(),
                })
                .filter(|hw| !hw.word.is_empty())
                .collect(),
            sound_effects: flat_groups(raw.sound_effects),
            topic_vocabulary: groups(raw.topic_vocabulary),
            exclamations: normalize_list(raw.exclamations),
        };
        for tier in DolchTier::ALL {
            *data.dolch.tier_mut(tier) = normalize_list(dolch.tier(tier).to_vec());
        }
        Ok(data)
    }
}

/// Immutable, indexed word banks. Build once, then share by reference
/// across classifiers and validators.
#[derive(Debug, Clone)]
pub struct WordBanks {
    data: WordBankData,
    /// Words per pattern, indexed by the level that introduces the pattern.
    pattern_sets: [FxHashSet<String>; 4],
    /// Cumulative decodable words per level.
    level_decodable: [FxHashSet<String>; 4],
    tier_sets: [FxHashSet<String>; 4],
    /// Cumulative sight words per level.
    level_sight: [FxHashSet<String>; 4],
    all_sight: FxHashSet<String>,
    heart_words: FxHashMap<String, HeartWord>,
    exclamations: FxHashSet<String>,
    sound_effects: FxHashSet<String>,
}

impl WordBanks {
    /// Load word banks from a JSON file.
    pub fn load_from_json(path: &Path) -> Result<WordBanks, WordBankError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_json(&contents)
    }

    /// Parse word banks from a JSON string.
    pub fn parse_json(input: &str) -> Result<WordBanks, WordBankError> {
        Ok(Self::from_data(WordBankData::parse_json(input)?))
    }

    /// Build lookup tables from already-normalized data.
    pub fn from_data(data: WordBankData) -> WordBanks {
        let d = &data.decodable;
        let cvc: FxHashSet<String> = d.cvc.values().flatten().map(|w| normalize_word(w)).collect();
        let digraph: FxHashSet<String> = d
            .digraphs
            .values()
            .flat_map(WordGroup::words)
            .map(|w| normalize_word(w))
            .collect();
        let blend: FxHashSet<String> = d
            .blends
            .values()
            .flat_map(WordGroup::words)
            .map(|w| normalize_word(w))
            .collect();
        let magic_e: FxHashSet<String> =
            d.magic_e.values().flatten().map(|w| normalize_word(w)).collect();
        let pattern_sets = [cvc, digraph, blend, magic_e];

        let tier_sets: [FxHashSet<String>; 4] = std::array::from_fn(|i| {
            data.dolch
                .tier(DolchTier::ALL[i])
                .iter()
                .map(|w| normalize_word(w))
                .collect()
        });

        let level_decodable = cumulative(&pattern_sets);
        let level_sight = cumulative(&tier_sets);
        let all_sight = level_sight[3].clone();

        let mut heart_words = FxHashMap::default();
        for hw in &data.heart_words {
            let word = normalize_word(&hw.word);
            if hw.tricky.is_empty() {
                warn!("heart word '{}' has no tricky part", word);
            } else if !word.contains(&hw.tricky) {
                warn!(
                    "heart word '{}' has tricky part '{}' that does not occur in it",
                    word, hw.tricky
                );
            }
            heart_words.insert(word, hw.clone());
        }

        let exclamations: FxHashSet<String> = DEFAULT_EXCLAMATIONS
            .iter()
            .map(|w| w.to_string())
            .chain(data.exclamations.iter().map(|w| normalize_word(w)))
            .collect();
        let sound_effects: FxHashSet<String> = data
            .sound_effects
            .values()
            .flatten()
            .map(|w| normalize_word(w))
            .collect();

        debug!(
            "word banks loaded: cvc={} digraph={} blend={} magic_e={} sight={} heart={} sound_effects={}",
            pattern_sets[0].len(),
            pattern_sets[1].len(),
            pattern_sets[2].len(),
            pattern_sets[3].len(),
            all_sight.len(),
            heart_words.len(),
            sound_effects.len()
        );

        WordBanks {
            data,
            pattern_sets,
            level_decodable,
            tier_sets,
            level_sight,
            all_sight,
            heart_words,
            exclamations,
            sound_effects,
        }
    }

    pub fn data(&self) -> &WordBankData {
        &self.data
    }

    // ---------------------------------------------------------------------
    // Membership
    // ---------------------------------------------------------------------

    /// Every word decodable at `level`, including lower levels' patterns.
    pub fn decodable_set(&self, level: PhonicsLevel) -> &FxHashSet<String> {
        &self.level_decodable[level.index()]
    }

    /// Every sight word known at `level`, including lower tiers.
    pub fn sight_word_set(&self, level: PhonicsLevel) -> &FxHashSet<String> {
        &self.level_sight[level.index()]
    }

    /// Words belonging to one pattern only (not cumulative).
    pub fn pattern_set(&self, pattern: Pattern) -> Option<&FxHashSet<String>> {
        let level = PhonicsLevel::ALL
            .iter()
            .find(|l| l.introduced_pattern() == pattern)?;
        Some(&self.pattern_sets[level.index()])
    }

    /// Words of one Dolch tier only (not cumulative).
    pub fn tier_set(&self, tier: DolchTier) -> &FxHashSet<String> {
        &self.tier_sets[tier.index()]
    }

    /// Union of every Dolch tier.
    pub fn all_sight_words(&self) -> &FxHashSet<String> {
        &self.all_sight
    }

    pub fn is_decodable(&self, word: &str, level: PhonicsLevel) -> bool {
        self.decodable_set(level).contains(&normalize_word(word))
    }

    pub fn is_sight_word(&self, word: &str, level: PhonicsLevel) -> bool {
        self.sight_word_set(level).contains(&normalize_word(word))
    }

    pub fn is_heart_word(&self, word: &str) -> bool {
        self.heart_words.contains_key(&normalize_word(word))
    }

    pub fn heart_word_info(&self, word: &str) -> Option<&HeartWord> {
        self.heart_words.get(&normalize_word(word))
    }

    pub fn heart_words(&self) -> impl Iterator<Item = &HeartWord> {
        self.data.heart_words.iter()
    }

    pub fn is_exclamation(&self, word: &str) -> bool {
        self.exclamations.contains(&normalize_word(word))
    }

    pub fn is_sound_effect(&self, word: &str) -> bool {
        self.sound_effects.contains(&normalize_word(word))
    }

    /// Phonics pattern of a word. Precedence is cvc, digraph, blend, magic e.
    pub fn pattern_of(&self, word: &str) -> Pattern {
        let word = normalize_word(word);
        PhonicsLevel::ALL
            .iter()
            .find(|level| self.pattern_sets[level.index()].contains(&word))
            .map(|level| level.introduced_pattern())
            .unwrap_or(Pattern::Unknown)
    }

    // ---------------------------------------------------------------------
    // Listing
    // ---------------------------------------------------------------------

    /// CVC words for one vowel pattern ("short_a"), or all of them sorted.
    pub fn cvc_words(&self, vowel: Option<&str>) -> Vec<String> {
        match vowel {
            Some(v) => self.data.decodable.cvc.get(v).cloned().unwrap_or_default(),
            None => sorted(&self.pattern_sets[0]),
        }
    }

    /// Digraph words for one digraph ("sh"), or all of them sorted.
    pub fn digraph_words(&self, digraph: Option<&str>) -> Vec<String> {
        match digraph {
            Some(key) => group_words(self.data.decodable.digraphs.get(key)),
            None => sorted(&self.pattern_sets[1]),
        }
    }

    /// Blend words for one blend category ("initial_l"), or all of them sorted.
    pub fn blend_words(&self, category: Option<&str>) -> Vec<String> {
        match category {
            Some(key) => group_words(self.data.decodable.blends.get(key)),
            None => sorted(&self.pattern_sets[2]),
        }
    }

    /// Magic-e words for one vowel ("a_e"), or all of them sorted.
    pub fn magic_e_words(&self, vowel: Option<&str>) -> Vec<String> {
        match vowel {
            Some(v) => self.data.decodable.magic_e.get(v).cloned().unwrap_or_default(),
            None => sorted(&self.pattern_sets[3]),
        }
    }

    /// Words of a single Dolch tier, in source order.
    pub fn sight_words(&self, tier: DolchTier) -> Vec<String> {
        self.data.dolch.tier(tier).to_vec()
    }

    /// Sorted union of Dolch tiers up to and including `tier`.
    pub fn sight_words_up_to(&self, tier: DolchTier) -> Vec<String> {
        let mut words: FxHashSet<&String> = FxHashSet::default();
        for t in &DolchTier::ALL[..=tier.index()] {
            words.extend(self.tier_sets[t.index()].iter());
        }
        let mut words: Vec<String> = words.into_iter().cloned().collect();
        words.sort();
        words
    }

    /// Sound effects for one category, or every category in key order.
    pub fn sound_effects(&self, category: Option<&str>) -> Vec<String> {
        match category {
            Some(c) => self.data.sound_effects.get(c).cloned().unwrap_or_default(),
            None => self.data.sound_effects.values().flatten().cloned().collect(),
        }
    }

    /// Topic vocabulary for a category, optionally narrowed to a subcategory.
    pub fn topic_vocabulary(&self, category: &str, subcategory: Option<&str>) -> Vec<String> {
        match (self.data.topic_vocabulary.get(category), subcategory) {
            (None, _) => Vec::new(),
            (Some(WordGroup::Flat(words)), _) => words.clone(),
            (Some(WordGroup::Positional(map)), Some(sub)) => {
                map.get(sub).cloned().unwrap_or_default()
            }
            (Some(group), None) => group.words().cloned().collect(),
        }
    }
}

/// Running unions: entry `i` holds sets `0..=i`.
fn cumulative(sets: &[FxHashSet<String>; 4]) -> [FxHashSet<String>; 4] {
    let mut acc: FxHashSet<String> = FxHashSet::default();
    std::array::from_fn(|i| {
        acc.extend(sets[i].iter().cloned());
        acc.clone()
    })
}

fn sorted(set: &FxHashSet<String>) -> Vec<String> {
    let mut words: Vec<String> = set.iter().cloned().collect();
    words.sort();
    words
}

fn group_words(group: Option<&WordGroup>) -> Vec<String> {
    group
        .map(|g| g.words().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> WordBanks {
        let path = std::path::PathBuf::from("tests/fixtures/test_word_banks.json");
        WordBanks::load_from_json(&path).unwrap()
    }

    #[test]
    fn normalize_strips_wrapping_punctuation() {
        assert_eq!(normalize_word("  Cat! "), "cat");
        assert_eq!(normalize_word("'Hello'"), "hello");
        assert_eq!(normalize_word("Don\u{2019}t"), "don't");
        assert_eq!(normalize_word("\"said,\""), "said");
        assert_eq!(normalize_word("..."), "");
    }

    #[test]
    fn load_fixture_sets() {
        let wb = fixture();
        assert!(wb.pattern_set(Pattern::Cvc).unwrap().contains("cat"));
        assert!(wb.pattern_set(Pattern::Digraph).unwrap().contains("ship"));
        assert!(wb.pattern_set(Pattern::Digraph).unwrap().contains("back"));
        assert!(wb.pattern_set(Pattern::Blend).unwrap().contains("crab"));
        assert!(wb.pattern_set(Pattern::Blend).unwrap().contains("jump"));
        assert!(wb.pattern_set(Pattern::MagicE).unwrap().contains("cake"));
        assert!(wb.pattern_set(Pattern::Unknown).is_none());
    }

    #[test]
    fn notes_are_dropped() {
        let wb = fixture();
        assert!(!wb.data().decodable.cvc.contains_key("_note"));
        assert!(!wb.data().sound_effects.contains_key("_note"));
        assert_eq!(wb.digraph_words(Some("wh")), vec!["when", "whip", "whiz"]);
        assert_eq!(wb.topic_vocabulary("volcano", None).len(), 7);
    }

    #[test]
    fn stored_words_are_case_folded() {
        let wb = fixture();
        assert!(wb.is_decodable("red", PhonicsLevel::Yellow));
        assert!(wb.is_decodable("RED", PhonicsLevel::Yellow));
        assert!(wb.is_sight_word("i", PhonicsLevel::Yellow));
        assert!(wb.cvc_words(Some("short_e")).contains(&"red".to_string()));
    }

    #[test]
    fn decodable_levels_are_cumulative() {
        let wb = fixture();
        assert!(wb.is_decodable("cat", PhonicsLevel::Yellow));
        assert!(!wb.is_decodable("ship", PhonicsLevel::Yellow));
        assert!(wb.is_decodable("ship", PhonicsLevel::Orange));
        assert!(!wb.is_decodable("crab", PhonicsLevel::Orange));
        assert!(wb.is_decodable("crab", PhonicsLevel::Red));
        assert!(!wb.is_decodable("cake", PhonicsLevel::Red));
        assert!(wb.is_decodable("cake", PhonicsLevel::Purple));
        assert!(wb.is_decodable("cat", PhonicsLevel::Purple));
    }

    #[test]
    fn monotonic_inclusion_over_ladder() {
        let wb = fixture();
        for pair in PhonicsLevel::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            assert!(wb.decodable_set(lower).is_subset(wb.decodable_set(upper)));
            assert!(wb.sight_word_set(lower).is_subset(wb.sight_word_set(upper)));
        }
    }

    #[test]
    fn sight_words_follow_dolch_tiers() {
        let wb = fixture();
        assert!(wb.is_sight_word("the", PhonicsLevel::Yellow));
        assert!(!wb.is_sight_word("was", PhonicsLevel::Yellow));
        assert!(wb.is_sight_word("was", PhonicsLevel::Orange));
        assert!(!wb.is_sight_word("could", PhonicsLevel::Orange));
        assert!(wb.is_sight_word("could", PhonicsLevel::Red));
        assert!(!wb.is_sight_word("because", PhonicsLevel::Red));
        assert!(wb.is_sight_word("because", PhonicsLevel::Purple));
        assert!(wb.all_sight_words().contains("because"));
    }

    #[test]
    fn heart_word_lookup() {
        let wb = fixture();
        assert!(wb.is_heart_word("Said"));
        let info = wb.heart_word_info("said").unwrap();
        assert_eq!(info.tricky, "ai");
        assert_eq!(info.sounds_like, "sed");
        assert!(wb.heart_word_info("cat").is_none());
    }

    #[test]
    fn pattern_precedence() {
        let wb = fixture();
        assert_eq!(wb.pattern_of("cat"), Pattern::Cvc);
        assert_eq!(wb.pattern_of("fish"), Pattern::Digraph);
        assert_eq!(wb.pattern_of("stop"), Pattern::Blend);
        assert_eq!(wb.pattern_of("bike"), Pattern::MagicE);
        assert_eq!(wb.pattern_of("volcano"), Pattern::Unknown);

        let mut data = WordBankData::default();
        data.decodable.cvc.insert("short_i".into(), vec!["wish".into()]);
        data.decodable
            .digraphs
            .insert("sh".into(), WordGroup::Flat(vec!["wish".into()]));
        let wb = WordBanks::from_data(data);
        assert_eq!(wb.pattern_of("wish"), Pattern::Cvc);
    }

    #[test]
    fn missing_sections_are_fatal() {
        let no_decodable = r#"{"sight_words": {"dolch": {}}, "heart_words": []}"#;
        assert!(matches!(
            WordBanks::parse_json(no_decodable),
            Err(WordBankError::MissingSection("decodable"))
        ));

        let no_sight = r#"{"decodable": {}, "heart_words": []}"#;
        assert!(matches!(
            WordBanks::parse_json(no_sight),
            Err(WordBankError::MissingSection("sight_words"))
        ));

        let no_dolch = r#"{"decodable": {}, "sight_words": {}, "heart_words": []}"#;
        assert!(matches!(
            WordBanks::parse_json(no_dolch),
            Err(WordBankError::MissingSection("sight_words.dolch"))
        ));

        let no_heart = r#"{"decodable": {}, "sight_words": {"dolch": {}}}"#;
        assert!(matches!(
            WordBanks::parse_json(no_heart),
            Err(WordBankError::MissingSection("heart_words"))
        ));
    }

    #[test]
    fn unparseable_source_is_json_error() {
        assert!(matches!(
            WordBanks::parse_json("[1, 2"),
            Err(WordBankError::Json(_))
        ));
    }

    #[test]
    fn heart_words_as_plain_list() {
        let src = r#"{
            "decodable": {"cvc": {"short_a": ["cat"]}},
            "sight_words": {"dolch": {"pre_primer": ["the"]}},
            "heart_words": [{"word": "Said", "tricky_substring": "ai", "sounds_like": "sed"}],
            "exclamations": ["Zoinks"]
        }"#;
        let wb = WordBanks::parse_json(src).unwrap();
        assert_eq!(wb.heart_word_info("said").unwrap().tricky, "ai");
        assert!(wb.is_exclamation("zoinks"));
        assert!(wb.is_exclamation("wow"));
        assert!(wb.sight_words(DolchTier::Primer).is_empty());
    }

    #[test]
    fn heart_word_with_missing_hint_still_loads() {
        let src = r#"{
            "decodable": {"cvc": {"short_a": ["cat"]}},
            "sight_words": {"dolch": {"pre_primer": ["the"]}},
            "heart_words": [
                {"word": "said", "tricky": "ai"},
                {"word": "was", "tricky": "a", "sounds_like": "wuz"}
            ]
        }"#;
        let wb = WordBanks::parse_json(src).unwrap();
        let said = wb.heart_word_info("said").unwrap();
        assert_eq!(said.tricky, "ai");
        assert!(said.sounds_like.is_empty());
        assert_eq!(wb.heart_word_info("was").unwrap().sounds_like, "wuz");
        assert_eq!(wb.heart_words().count(), 2);
    }

    #[test]
    fn listing_queries() {
        let wb = fixture();
        assert_eq!(wb.cvc_words(Some("short_o")).len(), 9);
        assert!(wb.cvc_words(Some("short_y")).is_empty());
        let all_cvc = wb.cvc_words(None);
        assert!(all_cvc.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(wb.digraph_words(Some("sh")).len(), 8);
        assert_eq!(wb.digraph_words(Some("ck")).len(), 8);
        assert_eq!(wb.blend_words(Some("initial_r")).len(), 9);
        assert_eq!(wb.blend_words(Some("final")).len(), 8);
        assert_eq!(wb.magic_e_words(Some("u_e")), vec!["cute", "cube", "mule", "tube"]);
        assert_eq!(wb.sound_effects(Some("animals")).len(), 5);
        assert_eq!(wb.sound_effects(None).len(), 14);
        assert!(wb.is_sound_effect("woof"));
    }

    #[test]
    fn sight_words_up_to_is_cumulative() {
        let wb = fixture();
        let pre = wb.sight_words_up_to(DolchTier::PrePrimer);
        let primer = wb.sight_words_up_to(DolchTier::Primer);
        assert_eq!(pre.len(), wb.tier_set(DolchTier::PrePrimer).len());
        assert!(pre.iter().all(|w| primer.contains(w)));
        assert!(primer.contains(&"was".to_string()));
        assert!(!pre.contains(&"was".to_string()));
    }

    #[test]
    fn topic_vocabulary_lookup() {
        let wb = fixture();
        assert_eq!(wb.topic_vocabulary("volcano", Some("verbs")), vec!["erupt", "rumble", "flow"]);
        assert_eq!(wb.topic_vocabulary("jungle", None).len(), 4);
        assert_eq!(wb.topic_vocabulary("jungle", Some("anything")).len(), 4);
        assert!(wb.topic_vocabulary("space", None).is_empty());
        assert!(wb.topic_vocabulary("volcano", Some("adjectives")).is_empty());
    }
}
