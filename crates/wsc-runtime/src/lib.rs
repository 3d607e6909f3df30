//! Runtime Layer - World State Contracts
//!
//! Everything a deployment needs around the contracts themselves:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: structured logging setup over `tracing`
//! - [`runtime`]: the development host that resolves a world-state
//!   backend and mints per-invocation transaction contexts
//!
//! In production the surrounding ledger platform supplies state and
//! transaction identity; the host here stands in for it during
//! development and testing.

pub mod config;
pub mod logging;
pub mod runtime;

pub use config::{
    ChaincodeIdentity, ConfigLoader, LoggingConfig, RuntimeConfig, StateConfig,
};
pub use logging::{init_logging, parse_log_level};
pub use runtime::Runtime;
