//! Runtime configuration read from the environment.
//!
//! | Variable          | Default  | Meaning                                  |
//! |-------------------|----------|------------------------------------------|
//! | `EKKO_LOG_FORMAT` | `pretty` | `pretty` or `json` log lines on stderr   |
//! | `EKKO_LOG`        | `info`   | `tracing` filter directive               |
//! | `EKKO_CACHE_SIZE` | `64`     | interpretations memoized per process     |

use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;
use validator::Validate;

use crate::error::{AppError, Result};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "EKKO_LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    pub log_format: LogFormat,
    /// Filter directive, e.g. `info` or `ekko_core=debug`
    #[validate(length(min = 1))]
    pub log_filter: String,
    #[validate(range(min = 1, max = 10_000))]
    pub cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_filter: "info".to_string(),
            cache_size: 64,
        }
    }
}

impl Config {
    /// Build from `EKKO_*` variables, falling back to defaults for unset ones
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_format = match env::var("EKKO_LOG_FORMAT") {
            Ok(raw) => raw.parse::<LogFormat>()?,
            Err(_) => defaults.log_format,
        };
        let log_filter = env::var("EKKO_LOG").unwrap_or(defaults.log_filter);
        let cache_size = match env::var("EKKO_CACHE_SIZE") {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("EKKO_CACHE_SIZE must be a number: {}", e))
            })?,
            Err(_) => defaults.cache_size,
        };

        let config = Self {
            log_format,
            log_filter,
            cache_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cache_size).unwrap_or(NonZeroUsize::MIN)
    }
}
