//! Contract trait
//!
//! A contract is a named bundle of operations over the world state. The
//! typed methods on each contract are the first-class Rust API; `invoke`
//! is the string-typed entry point the chaincode router uses when an
//! invocation arrives by name.

use async_trait::async_trait;
use serde_json::Value;

use wsc_domain::context::TransactionContext;
use wsc_domain::error::{Error, Result};

use crate::metadata::ContractInfo;

/// One contract deployable inside a chaincode.
///
/// Implementations hold no per-transaction state; the context comes in
/// with every call.
#[async_trait]
pub trait Contract: Send + Sync {
    /// Namespace this contract registers under
    fn name(&self) -> &str;

    /// Metadata describing this contract
    fn info(&self) -> &ContractInfo;

    /// Operation names `invoke` accepts
    fn operations(&self) -> &'static [&'static str];

    /// Route a string-typed invocation to the matching operation.
    ///
    /// Returns the operation's result as JSON, or `None` for operations
    /// without a payload. Unrecognized operation names fail with
    /// [`Error::UnknownOperation`].
    async fn invoke(
        &self,
        ctx: &TransactionContext,
        operation: &str,
        args: &[String],
    ) -> Result<Option<Value>>;
}

/// Check an invocation's argument count against the operation's arity.
pub(crate) fn require_args(
    contract: &str,
    operation: &str,
    args: &[String],
    expected: usize,
) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "{contract}:{operation} expects {expected} argument(s), got {}",
            args.len()
        )))
    }
}
