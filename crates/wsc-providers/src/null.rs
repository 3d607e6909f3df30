//! Null world-state provider
//!
//! Accepts every call and stores nothing. Reads always report absence.
//! Useful as a placeholder when contract logic is exercised without any
//! interest in persisted state.

use async_trait::async_trait;

use wsc_domain::error::Result;
use wsc_domain::ports::WorldState;

/// World state that discards writes and reads nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullWorldState;

impl NullWorldState {
    /// Create the null provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorldState for NullWorldState {
    async fn get_state(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn put_state(&self, _key: &str, _value: &[u8]) -> Result<()> {
        Ok(())
    }

    async fn delete_state(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}
