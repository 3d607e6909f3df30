//! World-state backend resolution
//!
//! Maps a configured backend name to a provider instance. The fault
//! injector is not listed here: it wraps another backend and is built
//! directly by the code that needs it.

use std::sync::Arc;

use wsc_domain::error::{Error, Result};
use wsc_domain::ports::WorldState;

use crate::memory::InMemoryWorldState;
use crate::null::NullWorldState;

/// Backend name for [`InMemoryWorldState`]
pub const MEMORY_BACKEND: &str = "memory";

/// Backend name for [`NullWorldState`]
pub const NULL_BACKEND: &str = "null";

/// Resolve a backend name to a world-state provider.
pub fn resolve_world_state(name: &str) -> Result<Arc<dyn WorldState>> {
    match name {
        MEMORY_BACKEND => Ok(Arc::new(InMemoryWorldState::new())),
        NULL_BACKEND => Ok(Arc::new(NullWorldState::new())),
        other => Err(Error::configuration(format!(
            "Unknown world state backend '{other}'. Available backends: {:?}",
            [MEMORY_BACKEND, NULL_BACKEND]
        ))),
    }
}

/// Names and descriptions of the resolvable backends.
pub fn list_world_state_backends() -> Vec<(&'static str, &'static str)> {
    vec![
        (MEMORY_BACKEND, "Process-local store, nothing persisted"),
        (NULL_BACKEND, "Discards writes, reads always absent"),
    ]
}
