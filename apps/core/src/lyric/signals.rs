//! Signal Extraction.
//!
//! Turns normalized lyric text into eight categorical signals. Extraction runs
//! in two steps: [`extract_scores`] computes the continuous intermediate
//! scalars, [`SignalScores::classify`] buckets each of them against a fixed
//! pair of thresholds. Both steps are pure and total; empty text lands in the
//! lowest bucket of every score-based field.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::lexicon::LexiconHits;
use super::normalizer::{
    count_lines, count_stanzas, count_words, normalize, split_words, trim_space,
};

/// Low / medium / high scale shared by density, repetition and volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Structure {
    Short,
    Balanced,
    Extended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    Medium,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bright,
    Neutral,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Narrative {
    Linear,
    Fragmented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    Low,
    Mid,
    High,
}

macro_rules! labelled {
    ($ty:ty { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the lowercase label used in exports and stored results
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled!(Level { Low => "low", Medium => "medium", High => "high" });
labelled!(Structure { Short => "short", Balanced => "balanced", Extended => "extended" });
labelled!(Pace { Slow => "slow", Medium => "medium", Fast => "fast" });
labelled!(Sentiment { Bright => "bright", Neutral => "neutral", Dark => "dark" });
labelled!(Narrative { Linear => "linear", Fragmented => "fragmented" });
labelled!(Register { Low => "low", Mid => "mid", High => "high" });

/// The categorical description of a lyric. Every field always holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XSignals {
    pub structure: Structure,
    pub pace: Pace,
    pub density: Level,
    pub repetition: Level,
    pub sentiment: Sentiment,
    pub volatility: Level,
    pub narrative: Narrative,
    pub register: Register,
}

const DENSITY_THRESHOLDS: [f64; 2] = [6.0, 10.0];
const PACE_THRESHOLDS: [f64; 2] = [0.35, 0.65];
const VOLATILITY_THRESHOLDS: [f64; 2] = [0.35, 0.7];
const SENTIMENT_THRESHOLDS: [f64; 2] = [-2.0, 2.0];
const REGISTER_THRESHOLDS: [f64; 2] = [0.35, 0.7];
const STRUCTURE_THRESHOLDS: [f64; 2] = [2.0, 4.0];
const REPETITION_THRESHOLDS: [f64; 2] = [0.3, 0.6];
const NARRATIVE_LINEAR_ABOVE: f64 = 0.18;

const PUNCTUATION: &[char] = &['.', '!', '?', ';', ','];

/// Continuous scalars behind each signal, kept for auditing the classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    pub word_count: usize,
    pub line_count: usize,
    pub stanza_count: usize,
    pub words_per_line: f64,
    /// Mean line length in UTF-16 code units
    pub avg_line_length: f64,
    /// Population variance of line length
    pub line_length_variance: f64,
    pub punctuation_rate: f64,
    pub bright_count: usize,
    pub dark_count: usize,
    pub pronoun_count: usize,
    pub past_tense_count: usize,
    pub density: f64,
    pub pace: f64,
    pub volatility: f64,
    pub sentiment: f64,
    pub register: f64,
    pub structure: f64,
    pub repetition: f64,
    pub narrative: f64,
}

/// Clamp `value` into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Map a score onto three ordered labels. Both thresholds are inclusive upper bounds.
pub fn bucketize<T: Copy>(value: f64, thresholds: [f64; 2], labels: [T; 3]) -> T {
    if value <= thresholds[0] {
        labels[0]
    } else if value <= thresholds[1] {
        labels[1]
    } else {
        labels[2]
    }
}

/// Divide by `count`, or by 1 when the count is zero
fn per(value: f64, count: usize) -> f64 {
    value / count.max(1) as f64
}

fn line_stats(lines: &[&str]) -> (f64, f64) {
    // UTF-16 lengths keep scores identical to results computed by the web client.
    let lengths: Vec<f64> = lines
        .iter()
        .map(|line| line.encode_utf16().count() as f64)
        .collect();
    let avg = per(lengths.iter().sum(), lengths.len());
    let variance = per(
        lengths.iter().map(|len| (len - avg).powi(2)).sum(),
        lengths.len(),
    );
    (avg, variance)
}

fn repetition_score(lines: &[&str], words: &[String]) -> f64 {
    if lines.is_empty() || words.is_empty() {
        return 0.0;
    }

    let normalized_lines: Vec<String> = lines
        .iter()
        .map(|line| trim_space(&line.to_lowercase()).to_string())
        .collect();
    let unique_lines: HashSet<&String> = normalized_lines.iter().collect();
    let line_repeat_ratio =
        (lines.len() - unique_lines.len()) as f64 / lines.len() as f64;

    let bigrams: Vec<(&str, &str)> = words
        .windows(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();
    let unique_bigrams: HashSet<&(&str, &str)> = bigrams.iter().collect();
    let bigram_repeat_ratio = if bigrams.is_empty() {
        0.0
    } else {
        (bigrams.len() - unique_bigrams.len()) as f64 / bigrams.len() as f64
    };

    clamp((line_repeat_ratio + bigram_repeat_ratio) / 2.0, 0.0, 1.0)
}

/// Compute every intermediate scalar for a text.
///
/// The input is normalized again first, which is a no-op for text that
/// already went through [`normalize`].
pub fn extract_scores(text: &str) -> SignalScores {
    let normalized = normalize(text);
    let lines: Vec<&str> = if normalized.is_empty() {
        Vec::new()
    } else {
        normalized.split('\n').collect()
    };
    let lowered = normalized.to_lowercase();
    let words: Vec<String> = split_words(&lowered).map(str::to_string).collect();

    let word_count = count_words(&normalized);
    let line_count = count_lines(&normalized);
    let stanza_count = count_stanzas(&normalized);
    let words_per_line = if line_count > 0 {
        word_count as f64 / line_count as f64
    } else {
        0.0
    };

    let (avg_line_length, variance) = line_stats(&lines);

    let punctuation = normalized.chars().filter(|c| PUNCTUATION.contains(c)).count();
    let punctuation_rate = if word_count > 0 {
        punctuation as f64 / word_count as f64
    } else {
        0.0
    };

    let hits = LexiconHits::scan(&words);

    SignalScores {
        word_count,
        line_count,
        stanza_count,
        words_per_line,
        avg_line_length,
        line_length_variance: variance,
        punctuation_rate,
        bright_count: hits.bright,
        dark_count: hits.dark,
        pronoun_count: hits.pronouns,
        past_tense_count: hits.past_tense,
        density: words_per_line + word_count as f64 / 60.0,
        pace: clamp(
            0.5 + (punctuation_rate - 0.08) * 2.0 - variance / 400.0,
            0.0,
            1.0,
        ),
        volatility: clamp(punctuation_rate * 4.0 + variance / 300.0, 0.0, 1.0),
        sentiment: hits.bright as f64 - hits.dark as f64,
        register: clamp(
            avg_line_length / 48.0 + per((hits.bright + hits.dark) as f64, word_count),
            0.0,
            1.0,
        ),
        structure: stanza_count as f64 + line_count as f64 / 8.0,
        repetition: repetition_score(&lines, &words),
        narrative: per(hits.pronouns as f64, word_count)
            + per(hits.past_tense as f64, word_count),
    }
}

impl SignalScores {
    /// Bucket every scalar into its categorical label.
    pub fn classify(&self) -> XSignals {
        use Level::{High, Low, Medium};

        XSignals {
            structure: bucketize(
                self.structure,
                STRUCTURE_THRESHOLDS,
                [Structure::Short, Structure::Balanced, Structure::Extended],
            ),
            pace: bucketize(self.pace, PACE_THRESHOLDS, [Pace::Slow, Pace::Medium, Pace::Fast]),
            density: bucketize(self.density, DENSITY_THRESHOLDS, [Low, Medium, High]),
            repetition: bucketize(self.repetition, REPETITION_THRESHOLDS, [Low, Medium, High]),
            sentiment: bucketize(
                self.sentiment,
                SENTIMENT_THRESHOLDS,
                [Sentiment::Dark, Sentiment::Neutral, Sentiment::Bright],
            ),
            volatility: bucketize(self.volatility, VOLATILITY_THRESHOLDS, [Low, Medium, High]),
            narrative: if self.narrative > NARRATIVE_LINEAR_ABOVE {
                Narrative::Linear
            } else {
                Narrative::Fragmented
            },
            register: bucketize(
                self.register,
                REGISTER_THRESHOLDS,
                [Register::Low, Register::Mid, Register::High],
            ),
        }
    }
}

/// Classify normalized text into its eight signals
pub fn extract_signals(text: &str) -> XSignals {
    extract_scores(text).classify()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(count: usize, line: &str) -> String {
        vec![line; count].join("\n")
    }

    #[test]
    fn test_empty_text_lowest_buckets() {
        let x = extract_signals("");
        assert_eq!(x.structure, Structure::Short);
        assert_eq!(x.pace, Pace::Slow);
        assert_eq!(x.density, Level::Low);
        assert_eq!(x.repetition, Level::Low);
        assert_eq!(x.sentiment, Sentiment::Neutral);
        assert_eq!(x.volatility, Level::Low);
        assert_eq!(x.narrative, Narrative::Fragmented);
        assert_eq!(x.register, Register::Low);
    }

    #[test]
    fn test_empty_scores_are_zero() {
        let scores = extract_scores("   \n  ");
        assert_eq!(scores.word_count, 0);
        assert_eq!(scores.avg_line_length, 0.0);
        assert_eq!(scores.line_length_variance, 0.0);
        assert_eq!(scores.repetition, 0.0);
        // 0.5 + (0 - 0.08) * 2
        assert!((scores.pace - 0.34).abs() < 1e-12);
    }

    #[test]
    fn test_bucketize_boundaries() {
        let labels = [Level::Low, Level::Medium, Level::High];
        assert_eq!(bucketize(6.0, DENSITY_THRESHOLDS, labels), Level::Low);
        assert_eq!(bucketize(6.0001, DENSITY_THRESHOLDS, labels), Level::Medium);
        assert_eq!(bucketize(10.0, DENSITY_THRESHOLDS, labels), Level::Medium);
        assert_eq!(bucketize(10.5, DENSITY_THRESHOLDS, labels), Level::High);
    }

    #[test]
    fn test_density_boundary_from_text() {
        // 12 lines x 5 words: 60/12 + 60/60 = 6.0 exactly.
        let text = lines_of(12, "a b c d e");
        let scores = extract_scores(&text);
        assert_eq!(scores.density, 6.0);
        assert_eq!(scores.classify().density, Level::Low);

        // One extra word pushes it over.
        let text = format!("{text} f");
        assert_eq!(extract_signals(&text).density, Level::Medium);
    }

    #[test]
    fn test_repetition_high_for_repeated_lines() {
        let text = lines_of(6, "la la la");
        let scores = extract_scores(&text);
        assert!(scores.repetition > 0.6, "got {}", scores.repetition);
        assert_eq!(scores.classify().repetition, Level::High);
    }

    #[test]
    fn test_repetition_ignores_case_and_edges() {
        let scores = extract_scores("Hold on\nhold on");
        // One duplicate line out of two; bigrams: hold-on, on-hold, hold-on.
        let expected = (0.5 + 1.0 / 3.0) / 2.0;
        assert!((scores.repetition - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sentiment_buckets() {
        assert_eq!(
            extract_signals("sun gold light shine").sentiment,
            Sentiment::Bright
        );
        assert_eq!(extract_signals("night cold dark").sentiment, Sentiment::Dark);
        // The lower threshold is inclusive, so -2 is already dark.
        assert_eq!(extract_signals("night cold").sentiment, Sentiment::Dark);
        assert_eq!(extract_signals("night sun cold").sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_narrative_linear() {
        let x = extract_signals("I walked home\nyou waited there");
        assert_eq!(x.narrative, Narrative::Linear);
    }

    #[test]
    fn test_punctuation_drives_volatility() {
        let x = extract_signals("Stop! Wait, no; go. Now? Run!");
        assert_eq!(x.volatility, Level::High);
        assert_eq!(x.pace, Pace::Fast);
    }

    #[test]
    fn test_structure_extended() {
        let text = ["a\nb\nc\nd"; 4].join("\n\n");
        // 4 stanzas + 19 lines / 8
        assert_eq!(extract_signals(&text).structure, Structure::Extended);
    }

    #[test]
    fn test_line_length_counts_utf16_units() {
        let scores = extract_scores("é🎵");
        assert_eq!(scores.avg_line_length, 3.0);
    }

    #[test]
    fn test_byte_order_mark_does_not_hide_first_word() {
        let scores = extract_scores("\u{FEFF}light gold sun");
        assert_eq!(scores.bright_count, 3);
        assert_eq!(scores.word_count, 3);
        assert_eq!(scores.avg_line_length, 14.0);
    }

    #[test]
    fn test_next_line_joins_words() {
        let scores = extract_scores("sun\u{85}rise");
        assert_eq!(scores.word_count, 1);
        assert_eq!(scores.bright_count, 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Level::Medium.to_string(), "medium");
        assert_eq!(Register::Mid.label(), "mid");
        assert_eq!(
            serde_json::to_string(&Narrative::Fragmented).unwrap(),
            "\"fragmented\""
        );
    }
}
