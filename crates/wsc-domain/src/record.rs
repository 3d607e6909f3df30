//! Record value objects stored in the world state
//!
//! Every record managed by a contract is stored as a JSON document under
//! a caller-chosen string key. A record type declares its wire name (used
//! in error messages), its JSON shape via serde, and its mutability
//! contract: the associated [`Record::Patch`] type names exactly the
//! fields an update is allowed to change. Fields outside the patch keep
//! their stored values across updates.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A contract-managed record persisted in the world state.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Type name used in error reporting
    const TYPE_NAME: &'static str;

    /// Update payload accepted by this record type
    type Patch: Debug + Send + Sync;

    /// Apply an update in place, leaving unpatched fields untouched
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Single-value record: one opaque string payload per key.
///
/// Serialized as `{"value": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rr {
    /// The stored payload
    pub value: String,
}

impl Rr {
    /// Create a record holding `value`
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Update payload for [`Rr`]: replaces the whole stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrPatch {
    /// The replacement payload
    pub value: String,
}

impl Record for Rr {
    const TYPE_NAME: &'static str = "Rr";

    type Patch = RrPatch;

    fn apply_patch(&mut self, patch: RrPatch) {
        self.value = patch.value;
    }
}

/// Identity-bearing record with a mutable display name.
///
/// Serialized as `{"id": "...", "name": "...", "token": "..."}`. The `id`
/// and `token` fields are fixed at creation; only `name` can change
/// afterwards, which [`DongPatch`] makes explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dong {
    /// Caller-assigned identity, fixed at creation
    pub id: String,
    /// Display name, the only field updates may change
    pub name: String,
    /// Opaque credential, fixed at creation
    pub token: String,
}

impl Dong {
    /// Create a record with the given identity, name, and token
    pub fn new<I: Into<String>, N: Into<String>, T: Into<String>>(
        id: I,
        name: N,
        token: T,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            token: token.into(),
        }
    }
}

/// Update payload for [`Dong`]: renames the record, nothing else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DongPatch {
    /// The replacement display name
    pub name: String,
}

impl Record for Dong {
    const TYPE_NAME: &'static str = "Dong";

    type Patch = DongPatch;

    fn apply_patch(&mut self, patch: DongPatch) {
        self.name = patch.name;
    }
}
