//! Generic record store over the world state
//!
//! One CRUD engine serves every record shape. Operations are
//! existence-checked: create refuses occupied keys, while get, update,
//! and delete refuse absent ones, and every check happens before any
//! write. Raw backend errors are wrapped into read or write failures
//! naming the key, so callers see where an operation stopped.

use std::marker::PhantomData;

use tracing::debug;

use wsc_domain::context::TransactionContext;
use wsc_domain::error::{Error, Result};
use wsc_domain::record::Record;

/// Existence-checked CRUD accessor for one record type.
///
/// Stateless between calls: the world-state capability arrives with the
/// transaction context on every operation.
pub struct RecordStore<R: Record> {
    _record: PhantomData<R>,
}

impl<R: Record> RecordStore<R> {
    /// Create the accessor for record type `R`
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }

    /// True iff a non-empty value is stored under `key`.
    ///
    /// A backend failure is a [`Error::ReadFailure`], never a silent
    /// `false`.
    pub async fn exists(&self, ctx: &TransactionContext, key: &str) -> Result<bool> {
        let data = ctx
            .state()
            .get_state(key)
            .await
            .map_err(|source| Error::read_failure(key, source))?;
        Ok(matches!(data, Some(bytes) if !bytes.is_empty()))
    }

    /// Read and decode the record stored under `key`.
    ///
    /// Fails with [`Error::NotFound`] for absent keys and
    /// [`Error::Deserialization`] when the stored bytes do not decode as
    /// `R`.
    pub async fn get(&self, ctx: &TransactionContext, key: &str) -> Result<R> {
        if !self.exists(ctx, key).await? {
            return Err(Error::not_found(key));
        }
        self.fetch(ctx, key).await
    }

    /// Store a new record under `key`.
    ///
    /// Fails with [`Error::AlreadyExists`] when the key is occupied;
    /// nothing is written in that case.
    pub async fn create(&self, ctx: &TransactionContext, key: &str, record: &R) -> Result<()> {
        if self.exists(ctx, key).await? {
            return Err(Error::already_exists(key));
        }
        self.put(ctx, key, record).await?;
        debug!(
            key,
            tx_id = ctx.tx_id(),
            record_type = R::TYPE_NAME,
            "Record created"
        );
        Ok(())
    }

    /// Patch the record stored under `key` and store the result.
    ///
    /// The stored record is decoded, the patch applied, and the whole
    /// record written back. Fields outside the patch keep their stored
    /// values. Fails with [`Error::NotFound`] for absent keys.
    pub async fn update(&self, ctx: &TransactionContext, key: &str, patch: R::Patch) -> Result<()> {
        if !self.exists(ctx, key).await? {
            return Err(Error::not_found(key));
        }
        let mut record = self.fetch(ctx, key).await?;
        record.apply_patch(patch);
        self.put(ctx, key, &record).await?;
        debug!(
            key,
            tx_id = ctx.tx_id(),
            record_type = R::TYPE_NAME,
            "Record updated"
        );
        Ok(())
    }

    /// Remove the record stored under `key`.
    ///
    /// Fails with [`Error::NotFound`] for absent keys; the backend delete
    /// is only issued for present ones.
    pub async fn delete(&self, ctx: &TransactionContext, key: &str) -> Result<()> {
        if !self.exists(ctx, key).await? {
            return Err(Error::not_found(key));
        }
        ctx.state()
            .delete_state(key)
            .await
            .map_err(|source| Error::write_failure(key, source))?;
        debug!(
            key,
            tx_id = ctx.tx_id(),
            record_type = R::TYPE_NAME,
            "Record deleted"
        );
        Ok(())
    }

    /// Read raw bytes for a key known to be present and decode them.
    async fn fetch(&self, ctx: &TransactionContext, key: &str) -> Result<R> {
        let data = ctx
            .state()
            .get_state(key)
            .await
            .map_err(|source| Error::read_failure(key, source))?;
        match data {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)
                .map_err(|source| Error::deserialization(key, R::TYPE_NAME, source)),
            _ => Err(Error::not_found(key)),
        }
    }

    /// Encode a record and write it under `key`.
    async fn put(&self, ctx: &TransactionContext, key: &str, record: &R) -> Result<()> {
        let bytes =
            serde_json::to_vec(record).map_err(|source| Error::serialization(R::TYPE_NAME, source))?;
        ctx.state()
            .put_state(key, &bytes)
            .await
            .map_err(|source| Error::write_failure(key, source))
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
