//! Development host for contract execution
//!
//! A deployed chaincode runs inside a ledger platform that owns the world
//! state and assigns transaction ids. This host stands in for the
//! platform during development and testing: it resolves the configured
//! backend once and mints a fresh transaction context per invocation.

use std::sync::Arc;

use tracing::info;

use wsc_contracts::ChaincodeInfo;
use wsc_domain::TransactionContext;
use wsc_domain::error::Result;
use wsc_domain::ports::WorldState;
use wsc_providers::resolve_world_state;

use crate::config::{ConfigLoader, RuntimeConfig};

/// Holds the resolved backend and mints transaction contexts.
pub struct Runtime {
    config: RuntimeConfig,
    state: Arc<dyn WorldState>,
}

impl Runtime {
    /// Resolve the configured backend and stand the host up
    pub fn from_config(config: RuntimeConfig) -> Result<Self> {
        let state = resolve_world_state(&config.state.backend)?;
        info!(
            backend = %config.state.backend,
            chaincode = %config.chaincode.name,
            "World state backend resolved"
        );
        Ok(Self { config, state })
    }

    /// Load configuration from defaults and environment, then stand up
    pub fn from_env() -> Result<Self> {
        Self::from_config(ConfigLoader::new().load()?)
    }

    /// Host a caller-supplied backend instead of resolving one
    pub fn with_state(config: RuntimeConfig, state: Arc<dyn WorldState>) -> Self {
        Self { config, state }
    }

    /// The configuration the host was stood up with
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Shared handle to the hosted world state
    pub fn state(&self) -> Arc<dyn WorldState> {
        Arc::clone(&self.state)
    }

    /// Mint the context for one invocation
    pub fn transaction(&self) -> TransactionContext {
        TransactionContext::new(self.state())
    }

    /// Bundle metadata derived from the configured identity
    pub fn chaincode_info(&self) -> ChaincodeInfo {
        ChaincodeInfo::new(
            format!("{} chaincode", self.config.chaincode.name),
            self.config.chaincode.version.clone(),
        )
    }
}
