//! # Lyric Module
//!
//! Deterministic, non-ML interpretation of lyric text into production intent.
//!
//! ## Components
//! - `normalizer`: line endings, whitespace, word/line/stanza counts
//! - `lexicon`: bright, dark and pronoun word lists
//! - `signals`: continuous scores bucketed into categorical signals
//! - `intent`: the eight guidance sections and their baseline
//! - `ruleset`: the fixed rule catalog and its version
//! - `rules_engine`: applies matching rules and records the trace
//! - `exports`: fixed-template text summaries
//! - `fingerprint`: staleness hash over normalized text
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod exports;
pub mod fingerprint;
pub mod intent;
pub mod lexicon;
pub mod normalizer;
pub mod rules_engine;
pub mod ruleset;
pub mod signals;

pub use analyzer::{interpret, Interpretation, Interpreter};
pub use exports::{build_exports, Exports};
pub use fingerprint::fingerprint;
pub use intent::{baseline_intent, Section, YIntent, YIntentSection};
pub use normalizer::{
    count_lines, count_stanzas, count_words, normalize, split_words, trim_space, TextCounts,
};
pub use rules_engine::{apply_rules, apply_ruleset, EkkoResult, RuleFired};
pub use ruleset::{RuleDefinition, RuleStatus, RULES, RULESET_VERSION};
pub use signals::{
    extract_scores, extract_signals, Level, Narrative, Pace, Register, Sentiment, SignalScores,
    Structure, XSignals,
};
