//! In-memory world-state provider
//!
//! Process-local backend for development and testing. Entries live in a
//! concurrent map shared by all clones, so a test can hold one handle
//! while contract code writes through another. Nothing is persisted.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use wsc_domain::error::Result;
use wsc_domain::ports::WorldState;

/// World state held entirely in process memory.
#[derive(Clone, Default)]
pub struct InMemoryWorldState {
    entries: Arc<DashMap<String, Vec<u8>>>,
}

impl InMemoryWorldState {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl WorldState for InMemoryWorldState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete_state(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
