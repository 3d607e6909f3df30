//! Layered runtime configuration
//!
//! Sources are merged in priority order: compiled defaults, then an
//! optional TOML file, then `WSC_*` environment variables. Nested keys
//! follow the `WSC_SECTION_FIELD` convention, e.g. `WSC_STATE_BACKEND`
//! or `WSC_LOGGING_LEVEL`. The merged result is validated before use.

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use wsc_domain::error::{Error, Result};
use wsc_providers::resolve_world_state;

use crate::logging::parse_log_level;

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "WSC";

/// Default chaincode name
pub const DEFAULT_CHAINCODE_NAME: &str = "wsc";

/// Default chaincode version
pub const DEFAULT_CHAINCODE_VERSION: &str = "0.0.1";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Identity of the deployed bundle
    pub chaincode: ChaincodeIdentity,
    /// World-state backend selection
    pub state: StateConfig,
    /// Logging behavior
    pub logging: LoggingConfig,
}

/// Name and version the bundle reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaincodeIdentity {
    /// Bundle name
    pub name: String,
    /// Bundle version
    pub version: String,
}

impl Default for ChaincodeIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_CHAINCODE_NAME.to_string(),
            version: DEFAULT_CHAINCODE_VERSION.to_string(),
        }
    }
}

/// World-state backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Backend name understood by the provider resolver
    pub backend: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            backend: wsc_providers::MEMORY_BACKEND.to_string(),
        }
    }
}

/// Logging behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level emitted: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

/// Merges configuration sources and validates the result.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader with no file source and the stock `WSC` prefix
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Merge a TOML file between defaults and the environment
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Override the environment prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Merge all sources and validate the result.
    pub fn load(&self) -> Result<RuntimeConfig> {
        let mut figment = Figment::from(Serialized::defaults(RuntimeConfig::default()));
        if let Some(path) = &self.config_path {
            figment = figment.merge(Toml::file(path));
        }
        let prefix = format!("{}_", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split("_"));

        let config: RuntimeConfig = figment
            .extract()
            .map_err(|source| Error::configuration_with_source("Failed to load configuration", source))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &RuntimeConfig) -> Result<()> {
        if config.chaincode.name.trim().is_empty() {
            return Err(Error::configuration("Chaincode name must not be empty"));
        }
        parse_log_level(&config.logging.level)?;
        resolve_world_state(&config.state.backend)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
