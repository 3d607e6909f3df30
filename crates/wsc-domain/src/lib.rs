//! Domain Layer - World State Contracts
//!
//! This crate contains the core domain of the World State Contracts
//! workspace: the record value objects managed by the contracts, the
//! error taxonomy shared by every layer, and the ports through which
//! contract logic reaches the hosting ledger platform.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines the record shapes ([`Rr`], [`Dong`]) and their update
//!   payloads
//! - Defines the [`WorldState`] port for the platform's key-value store
//! - Carries the per-invocation [`TransactionContext`]
//! - Has no dependencies on providers or runtime concerns
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result`], backed by the single
//! [`Error`] enum in [`error`]. Contract-level failures (missing or
//! duplicate assets, undecodable state) are distinct variants so callers
//! can match on them rather than parse messages.

pub mod context;
pub mod error;
pub mod ports;
pub mod record;

pub use context::TransactionContext;
pub use error::{Error, Result};
pub use ports::WorldState;
pub use record::{Dong, DongPatch, Record, Rr, RrPatch};
