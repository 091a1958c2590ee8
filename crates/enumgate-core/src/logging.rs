//! Tracing subscriber setup for binaries and services embedding enumgate.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// Builds the filter: `RUST_LOG` wins, otherwise `logging.level`.
///
/// ## Errors
/// Returns an error if neither `RUST_LOG` nor the configured level is a valid
/// filter directive.
pub fn env_filter(config: &LoggingConfig) -> CoreResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| CoreError::LoggingError(err.to_string()))
}

/// ## Summary
/// Installs a global fmt subscriber filtered per [`env_filter`].
///
/// ## Errors
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> CoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .try_init()
        .map_err(|err| CoreError::LoggingError(err.to_string()))?;

    tracing::debug!(level = %config.level, "Logging initialised");

    Ok(())
}
