//! log4rs initialisation.

use crate::config::Settings;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Fallback configuration: everything at `settings.log_level` to stderr.
pub fn stderr_config(settings: &Settings) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(
            Root::builder()
                .appender("stderr")
                .build(settings.log_level),
        )?;
    Ok(config)
}

/// Initialise logging from the configured YAML file, or stderr when it is missing.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if settings.log_config.exists() {
        log4rs::init_file(&settings.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                settings.log_config.display()
            )
        })?;
        log::debug!("Logging configured from {}", settings.log_config.display());
    } else {
        log4rs::init_config(stderr_config(settings)?)?;
        log::debug!(
            "{} not found, logging to stderr at {}",
            settings.log_config.display(),
            settings.log_level
        );
    }
    Ok(())
}
