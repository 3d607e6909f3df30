//! Per-invocation transaction context
//!
//! The hosting platform hands every contract operation a transaction
//! context: the world-state capability scoped to that transaction plus
//! the transaction id for correlation. Operations receive the context
//! explicitly and hold no state between invocations.

use std::sync::Arc;

use uuid::Uuid;

use crate::ports::WorldState;

/// Handle passed to every contract operation.
#[derive(Clone)]
pub struct TransactionContext {
    state: Arc<dyn WorldState>,
    tx_id: String,
}

impl TransactionContext {
    /// Create a context with a freshly generated transaction id
    pub fn new(state: Arc<dyn WorldState>) -> Self {
        Self {
            state,
            tx_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create a context with a platform-assigned transaction id
    pub fn with_tx_id<S: Into<String>>(state: Arc<dyn WorldState>, tx_id: S) -> Self {
        Self {
            state,
            tx_id: tx_id.into(),
        }
    }

    /// World-state capability of this transaction
    pub fn state(&self) -> &dyn WorldState {
        self.state.as_ref()
    }

    /// Transaction id for log correlation
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }
}

impl std::fmt::Debug for TransactionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionContext")
            .field("tx_id", &self.tx_id)
            .finish_non_exhaustive()
    }
}
