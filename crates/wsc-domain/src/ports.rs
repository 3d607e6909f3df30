//! Ports for platform-supplied capabilities
//!
//! The hosting ledger platform owns the world state; contract code only
//! ever reaches it through the [`WorldState`] port carried by the
//! transaction context. Providers implement this trait; contract logic
//! stays backend-agnostic.

use async_trait::async_trait;

use crate::error::Result;

/// Key-value world-state access for one transaction.
///
/// Keys are caller-chosen strings, values are raw bytes. Absence is
/// reported as `Ok(None)`; a stored empty value is treated as absence by
/// the contract layer. Backend failures surface as
/// [`Error::Backend`](crate::error::Error::Backend) and are wrapped into
/// read or write failures by the caller.
#[async_trait]
pub trait WorldState: Send + Sync {
    /// Read the bytes stored for a key, if any
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write or overwrite the bytes stored for a key
    async fn put_state(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove a key and whatever bytes it held
    async fn delete_state(&self, key: &str) -> Result<()>;
}

// Debug for the trait object only, so containers like
// `Arc<dyn WorldState>` are debuggable without imposing a `Debug`
// supertrait on implementors.
impl std::fmt::Debug for dyn WorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn WorldState")
    }
}
