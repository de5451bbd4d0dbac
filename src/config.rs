//! Runtime settings read from the environment.
//!
//! `main` loads a `.env` file first (dotenv), so every value may come from
//! either the process environment or that file.

use crate::output::OutputFormat;
use log::LevelFilter;
use std::error::Error;
use std::path::PathBuf;

pub const ENV_LOG_CONFIG: &str = "IPV4_CALC_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "IPV4_CALC_LOG_LEVEL";
pub const ENV_OUTPUT: &str = "IPV4_CALC_OUTPUT";

/// Settings shared by the binary and the integration tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// log4rs YAML file; a stderr logger is used when it does not exist.
    pub log_config: PathBuf,
    /// Level for the fallback stderr logger.
    pub log_level: LevelFilter,
    /// Default output format, overridden by `--output`.
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from("log4rs.yml"),
            log_level: LevelFilter::Warn,
            output: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            settings.log_config = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            settings.log_level = level
                .trim()
                .parse()
                .map_err(|_| format!("Invalid {ENV_LOG_LEVEL} '{level}'"))?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            settings.output = output.parse()?;
        }
        Ok(settings)
    }
}
