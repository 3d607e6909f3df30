//! Structured logging setup
//!
//! One `tracing` subscriber for the whole process. Filter directives come
//! from the `WSC_LOG` environment variable when set, otherwise from the
//! configured level; output is human-readable or JSON lines per the
//! configuration.

use tracing::{Level, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use wsc_domain::error::{Error, Result};

use crate::config::LoggingConfig;

/// Environment variable consulted for filter directives
pub const LOG_FILTER_ENV: &str = "WSC_LOG";

/// Install the global subscriber. Call once per process.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    info!(level = %level, json = config.json, "Logging initialized");
    Ok(())
}

/// Parse a level name, case-insensitively.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!("Invalid log level: {level}"))),
    }
}
