//! Contract Layer - World State Contracts
//!
//! This crate implements the contract surfaces deployed as one chaincode:
//!
//! - [`RecordStore`]: the generic existence-checked CRUD engine over the
//!   world-state port, parameterized by record shape
//! - [`RrContract`] and [`DongContract`]: thin per-record surfaces over
//!   that engine
//! - [`Chaincode`]: the router that resolves `Contract:Operation`
//!   invocation targets and publishes bundle metadata
//!
//! ## Design
//!
//! Contracts are stateless between invocations. Every operation receives
//! a [`TransactionContext`](wsc_domain::TransactionContext) carrying the
//! world-state capability for exactly that transaction, so the same
//! contract value can serve any backend without reconfiguration.

pub mod chaincode;
pub mod contract;
pub mod dong;
pub mod metadata;
pub mod rr;
pub mod store;

pub use chaincode::{BuildError, Chaincode, ChaincodeBuilder};
pub use contract::Contract;
pub use dong::DongContract;
pub use metadata::{ChaincodeInfo, ContactInfo, ContractInfo, LicenseInfo};
pub use rr::RrContract;
pub use store::RecordStore;
