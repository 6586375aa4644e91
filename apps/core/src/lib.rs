//! Ekko core: interprets lyric text into musical-production intent.
//!
//! The pipeline is pure and synchronous:
//! raw text → [`normalize`] → [`extract_signals`] → [`apply_rules`] → [`build_exports`],
//! with [`fingerprint`] marking which text a locked result belongs to.

pub mod config;
pub mod error;
pub mod logging;
pub mod lyric;
pub mod snapshot;

pub use config::{Config, LogFormat};
pub use error::AppError;
pub use lyric::{
    apply_rules, build_exports, count_lines, count_stanzas, count_words, extract_signals,
    fingerprint, interpret, normalize, EkkoResult, Exports, Interpretation, Interpreter,
    RuleFired, XSignals, YIntent, YIntentSection, RULESET_VERSION,
};
pub use snapshot::{LockCheck, LockedResult};

#[cfg(test)]
mod tests;
