//! Dong contract
//!
//! Existence-checked CRUD over [`Dong`] records. Identity (`id`) and
//! credential (`token`) are fixed when a record is created; the only
//! thing an update can do is rename it, which the operation surface makes
//! explicit by accepting nothing but the new name.

use async_trait::async_trait;
use serde_json::Value;

use wsc_domain::context::TransactionContext;
use wsc_domain::error::{Error, Result};
use wsc_domain::record::{Dong, DongPatch, Record};

use crate::contract::{Contract, require_args};
use crate::metadata::{ContractInfo, LicenseInfo};
use crate::store::RecordStore;

const DONG_OPERATIONS: &[&str] = &[
    "DongExists",
    "CreateDong",
    "ReadDong",
    "UpdateDong",
    "DeleteDong",
];

/// CRUD contract for identity-bearing [`Dong`] records.
pub struct DongContract {
    info: ContractInfo,
    store: RecordStore<Dong>,
}

impl DongContract {
    /// Create the contract with its stock metadata
    pub fn new() -> Self {
        Self::with_info(
            ContractInfo::new("Dong contract", "0.0.1")
                .with_description("CRUD operations over identity-bearing Dong records")
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
    pub async fn dong_exists(&self, ctx: &TransactionContext, key: &str) -> Result<bool> {
        self.store.exists(ctx, key).await
    }

    /// Store a new record; fails when `key` is occupied
    pub async fn create_dong<I, N, T>(
        &self,
        ctx: &TransactionContext,
        key: &str,
        id: I,
        name: N,
        token: T,
    ) -> Result<()>
    where
        I: Into<String>,
        N: Into<String>,
        T: Into<String>,
    {
        self.store.create(ctx, key, &Dong::new(id, name, token)).await
    }

    /// Fetch the record stored under `key`
    pub async fn read_dong(&self, ctx: &TransactionContext, key: &str) -> Result<Dong> {
        self.store.get(ctx, key).await
    }

    /// Rename the stored record; `id` and `token` keep their values
    pub async fn update_dong<S: Into<String>>(
        &self,
        ctx: &TransactionContext,
        key: &str,
        new_name: S,
    ) -> Result<()> {
        self.store
            .update(
                ctx,
                key,
                DongPatch {
                    name: new_name.into(),
                },
            )
            .await
    }

    /// Remove the record stored under `key`; fails when absent
    pub async fn delete_dong(&self, ctx: &TransactionContext, key: &str) -> Result<()> {
        self.store.delete(ctx, key).await
    }
}

impl Default for DongContract {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Contract for DongContract {
    fn name(&self) -> &str {
        "DongContract"
    }

    fn info(&self) -> &ContractInfo {
        &self.info
    }

    fn operations(&self) -> &'static [&'static str] {
        DONG_OPERATIONS
    }

    async fn invoke(
        &self,
        ctx: &TransactionContext,
        operation: &str,
        args: &[String],
    ) -> Result<Option<Value>> {
        match operation {
            "DongExists" => {
                require_args(self.name(), operation, args, 1)?;
                let present = self.dong_exists(ctx, &args[0]).await?;
                Ok(Some(Value::Bool(present)))
            }
            "CreateDong" => {
                require_args(self.name(), operation, args, 4)?;
                self.create_dong(
                    ctx,
                    &args[0],
                    args[1].as_str(),
                    args[2].as_str(),
                    args[3].as_str(),
                )
                .await?;
                Ok(None)
            }
            "ReadDong" => {
                require_args(self.name(), operation, args, 1)?;
                let record = self.read_dong(ctx, &args[0]).await?;
                let payload = serde_json::to_value(record)
                    .map_err(|source| Error::serialization(Dong::TYPE_NAME, source))?;
                Ok(Some(payload))
            }
            "UpdateDong" => {
                require_args(self.name(), operation, args, 2)?;
                self.update_dong(ctx, &args[0], args[1].as_str()).await?;
                Ok(None)
            }
            "DeleteDong" => {
                require_args(self.name(), operation, args, 1)?;
                self.delete_dong(ctx, &args[0]).await?;
                Ok(None)
            }
            _ => Err(Error::unknown_operation(self.name(), operation)),
        }
    }
}
