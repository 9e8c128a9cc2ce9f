/// Story-writing helpers built on the word banks: rhymes, word families,
/// simpler alternatives, and seeded word samples for a story brief.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::core::word_bank::{normalize_word, WordBanks};
use crate::schema::level::PhonicsLevel;

const MAX_RHYMES: usize = 10;
const SOUND_EFFECT_SAMPLE: usize = 5;

/// Simpler synonyms for words beginning readers often trip on.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("beautiful", &["nice", "pretty"]),
    ("happy", &["glad"]),
    ("scared", &["sad"]),
    ("quickly", &["fast"]),
    ("slowly", &["slow"]),
    ("large", &["big"]),
    ("small", &["little"]),
    ("begin", &["start"]),
    ("finish", &["end", "stop"]),
    ("want", &["wish"]),
    ("because", &["so"]),
];

/// Words decodable at `level` sharing the last two letters of `word`.
pub fn rhyming_words(banks: &WordBanks, word: &str, level: PhonicsLevel) -> Vec<String> {
    let word = normalize_word(word);
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return Vec::new();
    }
    let ending: String = chars[chars.len() - 2..].iter().collect();

    let mut rhymes: Vec<String> = banks
        .decodable_set(level)
        .iter()
        .filter(|w| **w != word && w.ends_with(&ending))
        .cloned()
        .collect();
    rhymes.sort();
    rhymes.truncate(MAX_RHYMES);
    rhymes
}

/// CVC words ending in `ending` ("at", "op"), sorted.
pub fn word_family(banks: &WordBanks, ending: &str) -> Vec<String> {
    let ending = ending.trim_start_matches('-').to_lowercase();
    banks
        .cvc_words(None)
        .into_iter()
        .filter(|w| w.ends_with(&ending))
        .collect()
}

/// Simpler words a reader at `level` can handle in place of `word`.
pub fn suggest_alternatives(banks: &WordBanks, word: &str, level: PhonicsLevel) -> Vec<String> {
    let word = normalize_word(word);
    SYNONYMS
        .iter()
        .find(|(hard, _)| *hard == word)
        .map(|(_, easy)| {
            easy.iter()
                .filter(|s| banks.is_decodable(s, level) || banks.is_sight_word(s, level))
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// A balanced word sample handed to the story writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryWordSample {
    pub decodable: Vec<String>,
    pub sight: Vec<String>,
    pub sound_effects: Vec<String>,
}

/// Sample `count` decodable words, `count / 2` sight words and a few sound
/// effects for `level`. Each sample is capped by the size of its pool.
pub fn words_for_story(
    banks: &WordBanks,
    level: PhonicsLevel,
    count: usize,
    rng: &mut StdRng,
) -> StoryWordSample {
    let mut decodable_pool: Vec<&String> = banks.decodable_set(level).iter().collect();
    decodable_pool.sort();
    let mut sight_pool: Vec<&String> = banks.sight_word_set(level).iter().collect();
    sight_pool.sort();
    let sound_pool = banks.sound_effects(None);

    StoryWordSample {
        decodable: decodable_pool
            .choose_multiple(rng, count)
            .map(|w| (*w).clone())
            .collect(),
        sight: sight_pool
            .choose_multiple(rng, count / 2)
            .map(|w| (*w).clone())
            .collect(),
        sound_effects: sound_pool
            .choose_multiple(rng, SOUND_EFFECT_SAMPLE)
            .cloned()
            .collect(),
    }
}
