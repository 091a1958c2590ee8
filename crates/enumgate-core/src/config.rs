use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DESERIALIZATION_PATH_KEY, ENV_PREFIX};
use crate::error::CoreResult;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub conversion: ConversionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    /// Context key the structural path is read from.
    pub path_key: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            path_key: DESERIALIZATION_PATH_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder with every default set and no sources.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("conversion.path_key", DESERIALIZATION_PATH_KEY)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Environment source: `ENUMGATE_`-prefixed variables with `__` between
    /// section and key, so `ENUMGATE_CONVERSION__PATH_KEY` sets
    /// `conversion.path_key`.
    #[must_use]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
    }

    /// ## Summary
    /// Loads configuration from an optional `enumgate.toml` and the process
    /// environment. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::load_from(
            config::File::with_name(CONFIG_FILE_NAME).required(false),
            Self::environment(),
        )
    }

    /// ## Summary
    /// Loads configuration from `file` and then `env`, on top of the defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from<F>(file: F, env: config::Environment) -> CoreResult<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        Ok(Self::builder()?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Ok(Settings::load()?)
}
