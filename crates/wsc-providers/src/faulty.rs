//! Fault-injecting world-state wrapper
//!
//! Wraps another backend and fails selected keys on demand. Error-path
//! behavior of the contract layer (read failures before writes, no
//! partial mutations) is exercised with this provider rather than with a
//! real misbehaving ledger.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashSet;

use wsc_domain::error::{Error, Result};
use wsc_domain::ports::WorldState;

/// World state that injects failures for chosen keys.
///
/// Keys not marked for failure pass straight through to the wrapped
/// backend.
pub struct FaultyWorldState {
    inner: Arc<dyn WorldState>,
    failing_reads: DashSet<String>,
    failing_writes: DashSet<String>,
    failing_deletes: DashSet<String>,
}

impl FaultyWorldState {
    /// Wrap a backend with no failures configured yet
    pub fn new(inner: Arc<dyn WorldState>) -> Self {
        Self {
            inner,
            failing_reads: DashSet::new(),
            failing_writes: DashSet::new(),
            failing_deletes: DashSet::new(),
        }
    }

    /// Fail every `get_state` call for `key`
    pub fn with_failing_reads<S: Into<String>>(self, key: S) -> Self {
        self.failing_reads.insert(key.into());
        self
    }

    /// Fail every `put_state` call for `key`
    pub fn with_failing_writes<S: Into<String>>(self, key: S) -> Self {
        self.failing_writes.insert(key.into());
        self
    }

    /// Fail every `delete_state` call for `key`
    pub fn with_failing_deletes<S: Into<String>>(self, key: S) -> Self {
        self.failing_deletes.insert(key.into());
        self
    }
}

#[async_trait]
impl WorldState for FaultyWorldState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.failing_reads.contains(key) {
            return Err(Error::backend(format!(
                "Injected read failure for key '{key}'"
            )));
        }
        self.inner.get_state(key).await
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<()> {
        if self.failing_writes.contains(key) {
            return Err(Error::backend(format!(
                "Injected write failure for key '{key}'"
            )));
        }
        self.inner.put_state(key, value).await
    }

    async fn delete_state(&self, key: &str) -> Result<()> {
        if self.failing_deletes.contains(key) {
            return Err(Error::backend(format!(
                "Injected delete failure for key '{key}'"
            )));
        }
        self.inner.delete_state(key).await
    }
}
