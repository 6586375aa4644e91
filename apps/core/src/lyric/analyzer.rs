//! Interpreter - Main orchestrator for the lyric pipeline.
//!
//! Runs normalization, fingerprinting, signal extraction, rule evaluation and
//! export composition in one pass, and optionally memoizes whole
//! interpretations by normalized text.

use chrono::Utc;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing::{debug, info};

use super::exports::{build_exports, Exports};
use super::fingerprint::fingerprint;
use super::normalizer::{normalize, TextCounts};
use super::rules_engine::{apply_rules, EkkoResult};
use super::signals::{extract_scores, SignalScores};
use crate::snapshot::LockedResult;

/// Everything derived from one draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Normalized text the analysis ran on
    pub normalized: String,
    /// Fingerprint of `normalized`
    pub fingerprint: String,
    pub counts: TextCounts,
    pub scores: SignalScores,
    pub result: EkkoResult,
    pub exports: Exports,
}

impl Interpretation {
    /// Freeze this result against the text it was computed from
    pub fn lock(&self, session_id: Option<String>) -> LockedResult {
        LockedResult {
            result: self.result.clone(),
            locked_text_hash: Some(self.fingerprint.clone()),
            session_id,
            locked_at: Some(Utc::now()),
        }
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let x = &self.result.signals;
        format!(
            "Words: {}, Lines: {}, Stanzas: {}, Structure: {}, Pace: {}, Sentiment: {}, Rules: {}",
            self.counts.words,
            self.counts.lines,
            self.counts.stanzas,
            x.structure,
            x.pace,
            x.sentiment,
            self.result.rules.len()
        )
    }
}

/// Run the full pipeline on raw text
pub fn interpret(raw: &str) -> Interpretation {
    let normalized = normalize(raw);
    let fingerprint = fingerprint(&normalized);
    let counts = TextCounts::of(&normalized);

    let scores = extract_scores(&normalized);
    debug!(?scores, "signal scores");
    let result = apply_rules(scores.classify());
    let exports = build_exports(&result);

    Interpretation {
        normalized,
        fingerprint,
        counts,
        scores,
        result,
        exports,
    }
}

/// Pipeline front end with an LRU memo keyed by normalized text
pub struct Interpreter {
    cache: LruCache<String, Interpretation>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CACHE_SIZE)
    }
}

impl Interpreter {
    pub const DEFAULT_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
        Some(size) => size,
        None => panic!("Cache size must be non-zero"),
    };

    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Interpret `raw`, reusing a cached result for identical normalized text
    pub fn interpret(&mut self, raw: &str) -> Interpretation {
        let normalized = normalize(raw);
        if let Some(hit) = self.cache.get(&normalized) {
            debug!(fingerprint = %hit.fingerprint, "interpretation cache hit");
            return hit.clone();
        }

        let interpretation = interpret(&normalized);
        info!("{}", interpretation.summary());
        self.cache.put(normalized, interpretation.clone());
        interpretation
    }

    /// Number of memoized interpretations
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSE: &str = "I walked the night alone\nthe cold was in my bones\n\nI waited for the light\nI waited for the light";

    #[test]
    fn test_interpret_populates_everything() {
        let it = interpret(VERSE);
        assert_eq!(it.normalized, VERSE);
        assert_eq!(it.fingerprint, fingerprint(VERSE));
        assert_eq!(it.counts.stanzas, 2);
        assert_eq!(it.counts.lines, 5);
        assert_eq!(it.result.version, "0.1.0");
        assert!(it.exports.learning_summary.contains("Rules fired:"));
    }

    #[test]
    fn test_interpret_normalizes_raw_input() {
        let messy = "  I walked the night   alone\r\nthe cold was in my bones \r\n\r\nI waited for the light\nI waited for the light\n";
        assert_eq!(interpret(messy), interpret(VERSE));
    }

    #[test]
    fn test_interpreter_cache_hit_is_identical() {
        let mut interpreter = Interpreter::default();
        let first = interpreter.interpret(VERSE);
        let second = interpreter.interpret(&format!("{VERSE}\n\n"));
        assert_eq!(first, second);
        assert_eq!(interpreter.cached(), 1);
    }

    #[test]
    fn test_interpreter_evicts_oldest() {
        let mut interpreter = Interpreter::new(NonZeroUsize::new(2).unwrap());
        interpreter.interpret("one");
        interpreter.interpret("two");
        interpreter.interpret("three");
        assert_eq!(interpreter.cached(), 2);
    }

    #[test]
    fn test_lock_records_fingerprint() {
        let it = interpret(VERSE);
        let locked = it.lock(Some("session-1".to_string()));
        assert_eq!(locked.locked_text_hash.as_deref(), Some(it.fingerprint.as_str()));
        assert_eq!(locked.result, it.result);
        assert!(!locked.is_stale(VERSE));
    }

    #[test]
    fn test_summary() {
        let summary = interpret(VERSE).summary();
        assert!(summary.contains("Words:"));
        assert!(summary.contains("Rules:"));
    }
}
