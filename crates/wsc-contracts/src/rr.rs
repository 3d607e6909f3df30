//! Rr contract
//!
//! Existence-checked CRUD over [`Rr`] records. Create refuses occupied
//! keys; read, update, and delete refuse absent ones. An update replaces
//! the whole stored value.

use async_trait::async_trait;
use serde_json::Value;

use wsc_domain::context::TransactionContext;
use wsc_domain::error::{Error, Result};
use wsc_domain::record::{Record, Rr, RrPatch};

use crate::contract::{Contract, require_args};
use crate::metadata::{ContractInfo, LicenseInfo};
use crate::store::RecordStore;

const RR_OPERATIONS: &[&str] = &["RrExists", "CreateRr", "ReadRr", "UpdateRr", "DeleteRr"];

/// CRUD contract for single-value [`Rr`] records.
pub struct RrContract {
    info: ContractInfo,
    store: RecordStore<Rr>,
}

impl RrContract {
    /// Create the contract with its stock metadata
    pub fn new() -> Self {
        Self::with_info(
            ContractInfo::new("Rr contract", "0.0.1")
                .with_description("CRUD operations over single-value Rr records")
                .with_license(LicenseInfo::new("Apache-2.0")),
        )
    }

    /// Create the contract with caller-supplied metadata
    pub fn with_info(info: ContractInfo) -> Self {
        Self {
            info,
            store: RecordStore::new(),
        }
    }

    /// True iff a record is stored under `key`
    pub async fn rr_exists(&self, ctx: &TransactionContext, key: &str) -> Result<bool> {
        self.store.exists(ctx, key).await
    }

    /// Store a new record; fails when `key` is occupied
    pub async fn create_rr<S: Into<String>>(
        &self,
        ctx: &TransactionContext,
        key: &str,
        value: S,
    ) -> Result<()> {
        self.store.create(ctx, key, &Rr::new(value)).await
    }

    /// Fetch the record stored under `key`
    pub async fn read_rr(&self, ctx: &TransactionContext, key: &str) -> Result<Rr> {
        self.store.get(ctx, key).await
    }

    /// Replace the stored value; fails when `key` is absent
    pub async fn update_rr<S: Into<String>>(
        &self,
        ctx: &TransactionContext,
        key: &str,
        new_value: S,
    ) -> Result<()> {
        self.store
            .update(
                ctx,
                key,
                RrPatch {
                    value: new_value.into(),
                },
            )
            .await
    }

    /// Remove the record stored under `key`; fails when absent
    pub async fn delete_rr(&self, ctx: &TransactionContext, key: &str) -> Result<()> {
        self.store.delete(ctx, key).await
    }
}

impl Default for RrContract {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Contract for RrContract {
    fn name(&self) -> &str {
        "RrContract"
    }

    fn info(&self) -> &ContractInfo {
        &self.info
    }

    fn operations(&self) -> &'static [&'static str] {
        RR_OPERATIONS
    }

    async fn invoke(
        &self,
        ctx: &TransactionContext,
        operation: &str,
        args: &[String],
    ) -> Result<Option<Value>> {
        match operation {
            "RrExists" => {
                require_args(self.name(), operation, args, 1)?;
                let present = self.rr_exists(ctx, &args[0]).await?;
                Ok(Some(Value::Bool(present)))
            }
            "CreateRr" => {
                require_args(self.name(), operation, args, 2)?;
                self.create_rr(ctx, &args[0], args[1].as_str()).await?;
                Ok(None)
            }
            "ReadRr" => {
                require_args(self.name(), operation, args, 1)?;
                let record = self.read_rr(ctx, &args[0]).await?;
                let payload = serde_json::to_value(record)
                    .map_err(|source| Error::serialization(Rr::TYPE_NAME, source))?;
                Ok(Some(payload))
            }
            "UpdateRr" => {
                require_args(self.name(), operation, args, 2)?;
                self.update_rr(ctx, &args[0], args[1].as_str()).await?;
                Ok(None)
            }
            "DeleteRr" => {
                require_args(self.name(), operation, args, 1)?;
                self.delete_rr(ctx, &args[0]).await?;
                Ok(None)
            }
            _ => Err(Error::unknown_operation(self.name(), operation)),
        }
    }
}
