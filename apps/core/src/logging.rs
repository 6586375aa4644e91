//! `tracing` subscriber setup. Logs always go to stderr.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::{Config, LogFormat};
use crate::error::{AppError, Result};

/// Install the global subscriber.
///
/// Returns an error if the filter directive is invalid. A subscriber that is
/// already installed is left in place.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", config.log_filter, e)))?;

    let registry = Registry::default().with(filter);
    let installed = match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let config = Config::default();
        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_bad_filter_is_config_error() {
        let config = Config {
            log_filter: "ekko_core=notalevel".to_string(),
            ..Config::default()
        };
        assert!(matches!(init(&config), Err(AppError::Config(_))));
    }
}
