//! World State Contracts
//!
//! Facade crate bundling the whole workspace behind one dependency:
//!
//! - [`domain`]: records, errors, the world-state port, and the
//!   transaction context
//! - [`contracts`]: the generic record store, the Rr and Dong contract
//!   surfaces, and the chaincode router
//! - [`providers`]: in-memory, null, and fault-injecting world-state
//!   backends
//! - [`runtime`]: configuration, logging, and the development host
//!
//! ## Example
//!
//! ```
//! use wsc::{Chaincode, DongContract, RrContract, Runtime, RuntimeConfig};
//!
//! # async fn demo() -> wsc::Result<()> {
//! let runtime = Runtime::from_config(RuntimeConfig::default())?;
//! let chaincode = Chaincode::builder()
//!     .with_info(runtime.chaincode_info())
//!     .register(RrContract::new())
//!     .register(DongContract::new())
//!     .build()?;
//!
//! let ctx = runtime.transaction();
//! chaincode
//!     .invoke(&ctx, "RrContract:CreateRr", &["key001".into(), "some value".into()])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod domain {
    //! Core domain types
    pub use wsc_domain::*;
}

pub mod contracts {
    //! Contract surfaces and the chaincode router
    pub use wsc_contracts::*;
}

pub mod providers {
    //! World-state backends
    pub use wsc_providers::*;
}

pub mod runtime {
    //! Configuration, logging, and the development host
    pub use wsc_runtime::*;
}

pub use domain::{
    Dong, DongPatch, Error, Record, Result, Rr, RrPatch, TransactionContext, WorldState,
};

pub use contracts::{
    Chaincode, ChaincodeBuilder, ChaincodeInfo, ContactInfo, Contract, ContractInfo, DongContract,
    LicenseInfo, RecordStore, RrContract,
};

pub use providers::{FaultyWorldState, InMemoryWorldState, NullWorldState, resolve_world_state};

pub use runtime::{ConfigLoader, Runtime, RuntimeConfig, init_logging};
