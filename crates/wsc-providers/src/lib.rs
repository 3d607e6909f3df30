//! World-State Providers - World State Contracts
//!
//! Implementations of the [`WorldState`](wsc_domain::WorldState) port.
//! None of them require a running ledger platform:
//!
//! - [`InMemoryWorldState`]: process-local store for development and tests
//! - [`NullWorldState`]: accepts writes and stores nothing
//! - [`FaultyWorldState`]: wraps another backend and injects failures for
//!   chosen keys, for exercising error paths
//!
//! [`resolve_world_state`] maps a configured backend name to a provider
//! instance.

pub mod faulty;
pub mod memory;
pub mod null;
pub mod resolver;

pub use faulty::FaultyWorldState;
pub use memory::InMemoryWorldState;
pub use null::NullWorldState;
pub use resolver::{MEMORY_BACKEND, NULL_BACKEND, list_world_state_backends, resolve_world_state};
