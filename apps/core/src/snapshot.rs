//! Locked results.
//!
//! A `LockedResult` pairs an [`EkkoResult`] with the fingerprint of the text it
//! was computed from, in the same JSON shape the web client stores
//! (`{ "result": ..., "lockedTextHash": ... }`). Callers use it to notice when
//! the draft has been edited since interpretation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::lyric::{fingerprint, normalize, EkkoResult, RULESET_VERSION};

/// Outcome of comparing a draft with a locked result stored on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockCheck {
    Missing,
    /// The file exists but could not be read or parsed
    Unreadable(String),
    Fresh { version: String, current_ruleset: bool },
    Stale { version: String, current_ruleset: bool },
}

impl LockCheck {
    pub fn is_fresh(&self) -> bool {
        matches!(self, LockCheck::Fresh { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedResult {
    pub result: EkkoResult,
    /// Fingerprint of the normalized text; `None` when it was never recorded
    pub locked_text_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_at: Option<DateTime<Utc>>,
}

impl LockedResult {
    /// Strict parse; malformed JSON is a validation error.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse stored state, treating anything unreadable as absent
    pub fn restore(json: &str) -> Option<Self> {
        match Self::parse(json) {
            Ok(locked) => Some(locked),
            Err(e) => {
                warn!("Discarding malformed locked result: {}", e);
                None
            }
        }
    }

    /// Strict read from disk
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::parse(&json)
    }

    /// Read stored state from disk. A missing or malformed file yields `None`.
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(locked) => Some(locked),
            Err(e) => {
                warn!("Discarding locked result at {:?}: {}", path, e);
                None
            }
        }
    }

    /// Strict read of `path` followed by a staleness check of `draft`
    pub fn check(path: impl AsRef<Path>, draft: &str) -> LockCheck {
        let locked = match Self::read(path) {
            Ok(locked) => locked,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                return LockCheck::Missing
            }
            Err(e) => return LockCheck::Unreadable(e.to_string()),
        };

        let version = locked.result.version.clone();
        let current_ruleset = locked.is_current_ruleset();
        if locked.is_stale(draft) {
            LockCheck::Stale {
                version,
                current_ruleset,
            }
        } else {
            LockCheck::Fresh {
                version,
                current_ruleset,
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether `draft` (raw, unnormalized) no longer matches the locked text
    pub fn is_stale(&self, draft: &str) -> bool {
        match &self.locked_text_hash {
            Some(hash) => *hash != fingerprint(&normalize(draft)),
            None => true,
        }
    }

    /// Whether the result was produced by the ruleset compiled into this build
    pub fn is_current_ruleset(&self) -> bool {
        self.result.version == RULESET_VERSION
    }
}
