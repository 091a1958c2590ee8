/// Context key carrying the structural path of the value being converted.
pub const DESERIALIZATION_PATH_KEY: &str = "deserialization_path";

/// Prefix for environment variables read by the configuration loader.
pub const ENV_PREFIX: &str = "ENUMGATE";

pub const CONFIG_FILE_STEM: &str = "enumgate";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");

pub const DEFAULT_LOG_LEVEL: &str = "info";
