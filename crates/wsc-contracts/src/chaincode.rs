//! Chaincode router
//!
//! A chaincode is a named set of contracts deployed together. The router
//! resolves `Contract:Operation` invocation targets, falls back to the
//! default contract for bare operation names, and publishes a metadata
//! document covering the whole bundle.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Value, json};
use thiserror::Error as ThisError;
use tracing::debug;

use wsc_domain::context::TransactionContext;
use wsc_domain::error::{Error, Result};

use crate::contract::Contract;
use crate::metadata::ChaincodeInfo;

/// Errors raised while assembling a [`Chaincode`]
#[derive(ThisError, Debug)]
pub enum BuildError {
    /// No contracts were registered
    #[error("Chaincode requires at least one registered contract")]
    NoContracts,

    /// Two registered contracts share a name
    #[error("Contract '{0}' is registered twice")]
    DuplicateContract(String),

    /// The configured default contract is not registered
    #[error("Default contract '{0}' is not registered")]
    UnknownDefault(String),
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Error::configuration_with_source("Chaincode assembly failed", err)
    }
}

/// Deployable bundle of contracts with one dispatch entry point.
pub struct Chaincode {
    info: ChaincodeInfo,
    contracts: HashMap<String, Box<dyn Contract>>,
    registration_order: Vec<String>,
    default_contract: String,
}

impl Chaincode {
    /// Start assembling a chaincode
    pub fn builder() -> ChaincodeBuilder {
        ChaincodeBuilder::new()
    }

    /// Metadata of the bundle
    pub fn info(&self) -> &ChaincodeInfo {
        &self.info
    }

    /// Registered contract names, in registration order
    pub fn contract_names(&self) -> Vec<&str> {
        self.registration_order
            .iter()
            .map(String::as_str)
            .collect()
    }

    /// Look up a registered contract by name
    pub fn contract(&self, name: &str) -> Option<&dyn Contract> {
        self.contracts.get(name).map(Box::as_ref)
    }

    /// Route one invocation to a contract operation.
    ///
    /// `function` is either `Contract:Operation` or a bare operation name
    /// handled by the default contract. Unknown contract names fail with
    /// [`Error::UnknownContract`] listing what is registered.
    pub async fn invoke(
        &self,
        ctx: &TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<Option<Value>> {
        let (target, operation) = match function.split_once(':') {
            Some((contract, operation)) => (contract, operation),
            None => (self.default_contract.as_str(), function),
        };
        let contract = self
            .contracts
            .get(target)
            .ok_or_else(|| Error::unknown_contract(target, self.registration_order.clone()))?;
        debug!(
            tx_id = ctx.tx_id(),
            contract = target,
            operation,
            "Dispatching invocation"
        );
        contract.invoke(ctx, operation, args).await
    }

    /// Metadata document for the whole bundle: info plus every contract's
    /// info and operation list.
    pub fn metadata(&self) -> Value {
        let contracts: Vec<Value> = self
            .registration_order
            .iter()
            .map(|name| {
                let contract = &self.contracts[name];
                json!({
                    "name": name,
                    "info": contract.info(),
                    "operations": contract.operations(),
                })
            })
            .collect();
        json!({
            "info": self.info,
            "defaultContract": self.default_contract,
            "contracts": contracts,
        })
    }
}

// Manual impl: `Box<dyn Contract>` is not `Debug`, so the contract map
// is reported by name only.
impl fmt::Debug for Chaincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chaincode")
            .field("info", &self.info)
            .field("registration_order", &self.registration_order)
            .field("default_contract", &self.default_contract)
            .finish_non_exhaustive()
    }
}

/// Fluent assembler for [`Chaincode`].
pub struct ChaincodeBuilder {
    info: ChaincodeInfo,
    contracts: Vec<Box<dyn Contract>>,
    default_contract: Option<String>,
}

impl ChaincodeBuilder {
    /// Start with default bundle metadata and no contracts
    pub fn new() -> Self {
        Self {
            info: ChaincodeInfo::default(),
            contracts: Vec::new(),
            default_contract: None,
        }
    }

    /// Set the bundle metadata
    pub fn with_info(mut self, info: ChaincodeInfo) -> Self {
        self.info = info;
        self
    }

    /// Register a contract under its own name
    pub fn register<C: Contract + 'static>(mut self, contract: C) -> Self {
        self.contracts.push(Box::new(contract));
        self
    }

    /// Name the contract that handles bare operation names.
    ///
    /// Without this, the first registered contract is the default.
    pub fn with_default_contract<S: Into<String>>(mut self, name: S) -> Self {
        self.default_contract = Some(name.into());
        self
    }

    /// Assemble the chaincode, checking registration consistency.
    pub fn build(self) -> std::result::Result<Chaincode, BuildError> {
        let mut contracts = HashMap::new();
        let mut registration_order = Vec::new();
        for contract in self.contracts {
            let name = contract.name().to_string();
            if contracts.insert(name.clone(), contract).is_some() {
                return Err(BuildError::DuplicateContract(name));
            }
            registration_order.push(name);
        }
        let Some(first) = registration_order.first() else {
            return Err(BuildError::NoContracts);
        };
        let default_contract = self.default_contract.unwrap_or_else(|| first.clone());
        if !contracts.contains_key(&default_contract) {
            return Err(BuildError::UnknownDefault(default_contract));
        }
        Ok(Chaincode {
            info: self.info,
            contracts,
            registration_order,
            default_contract,
        })
    }
}

impl Default for ChaincodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
