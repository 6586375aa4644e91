//! Word lists used by the signal extractor.
//!
//! Matching is exact against lower-cased whitespace tokens, so punctuation
//! glued to a word ("night,") keeps it from matching.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that pull sentiment toward "bright"
pub const BRIGHT_WORDS: &[&str] = &[
    "light", "gold", "sun", "shine", "rise", "glow", "open", "warm", "alive", "breathe", "hope",
    "lift", "clear", "day", "summer", "sweet", "soft", "bright", "peace", "calm", "yes", "up",
    "dream", "wide", "free", "bloom", "steady", "hold", "grace", "faith",
];

/// Words that pull sentiment toward "dark"
pub const DARK_WORDS: &[&str] = &[
    "dark", "cold", "night", "shadow", "fall", "down", "alone", "lose", "broken", "hurt", "pain",
    "dust", "grave", "ash", "storm", "fear", "empty", "bleed", "heavy", "quiet", "fade", "no",
    "gone", "crash", "low", "wound", "drift", "burn", "wait", "weak",
];

/// Personal pronouns counted toward a linear narrative
pub const PRONOUNS: &[&str] = &["i", "me", "we", "you", "he", "she", "they"];

static BRIGHT: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BRIGHT_WORDS.iter().copied().collect());
static DARK: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DARK_WORDS.iter().copied().collect());
static PRONOUN_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PRONOUNS.iter().copied().collect());

/// Tallies gathered in a single pass over the word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconHits {
    pub bright: usize,
    pub dark: usize,
    pub pronouns: usize,
    pub past_tense: usize,
}

impl LexiconHits {
    /// Scan lower-cased words once.
    pub fn scan<S: AsRef<str>>(words: &[S]) -> Self {
        let mut hits = Self::default();
        for word in words {
            let word = word.as_ref();
            if BRIGHT.contains(word) {
                hits.bright += 1;
            }
            if DARK.contains(word) {
                hits.dark += 1;
            }
            if PRONOUN_SET.contains(word) {
                hits.pronouns += 1;
            }
            if word.ends_with("ed") {
                hits.past_tense += 1;
            }
        }
        hits
    }
}
