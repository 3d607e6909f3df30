//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for World State Contracts
///
/// Contract operations never retry and never mask a failure: every
/// variant here surfaces to the caller exactly once, carrying the key or
/// type it concerns. Precondition failures ([`Error::AlreadyExists`],
/// [`Error::NotFound`]) are raised before any state is written.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw failure reported by a world-state backend
    #[error("World state backend error: {message}")]
    Backend {
        /// Description of the backend failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A backend read failed while resolving a key
    #[error("Could not read from world state for key '{key}': {source}")]
    ReadFailure {
        /// The key the read was for
        key: String,
        /// The underlying backend error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A backend write or delete failed for a key
    #[error("Could not write to world state for key '{key}': {source}")]
    WriteFailure {
        /// The key the write was for
        key: String,
        /// The underlying backend error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Create was called for a key that is already present
    #[error("The asset {key} already exists")]
    AlreadyExists {
        /// The key that is already occupied
        key: String,
    },

    /// Read, update, or delete was called for a key with no stored value
    #[error("The asset {key} does not exist")]
    NotFound {
        /// The key with no stored value
        key: String,
    },

    /// Stored bytes could not be decoded as the expected record type
    #[error("Could not unmarshal world state data to type {type_name}")]
    Deserialization {
        /// The key whose value failed to decode
        key: String,
        /// The record type the bytes were expected to match
        type_name: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be encoded for storage
    #[error("Could not marshal {type_name} to JSON")]
    Serialization {
        /// The record type that failed to encode
        type_name: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An invocation named a contract that is not registered
    #[error("Unknown contract '{name}'. Available contracts: {available:?}")]
    UnknownContract {
        /// The contract name that failed to resolve
        name: String,
        /// Names of the contracts that are registered
        available: Vec<String>,
    },

    /// An invocation named an operation the contract does not expose
    #[error("Contract '{contract}' has no operation '{operation}'")]
    UnknownOperation {
        /// The contract the invocation was routed to
        contract: String,
        /// The operation name that failed to resolve
        operation: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Backend error creation methods
impl Error {
    /// Create a backend error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error with source
    pub fn backend_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap a backend error that interrupted a read
    pub fn read_failure<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        key: S,
        source: E,
    ) -> Self {
        Self::ReadFailure {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a backend error that interrupted a write or delete
    pub fn write_failure<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        key: S,
        source: E,
    ) -> Self {
        Self::WriteFailure {
            key: key.into(),
            source: Box::new(source),
        }
    }
}

// Precondition error creation methods
impl Error {
    /// Create an already-exists error for a key
    pub fn already_exists<S: Into<String>>(key: S) -> Self {
        Self::AlreadyExists { key: key.into() }
    }

    /// Create a not-found error for a key
    pub fn not_found<S: Into<String>>(key: S) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Encoding error creation methods
impl Error {
    /// Create a deserialization error for a key
    pub fn deserialization<S: Into<String>>(
        key: S,
        type_name: &'static str,
        source: serde_json::Error,
    ) -> Self {
        Self::Deserialization {
            key: key.into(),
            type_name,
            source,
        }
    }

    /// Create a serialization error for a record type
    pub fn serialization(type_name: &'static str, source: serde_json::Error) -> Self {
        Self::Serialization { type_name, source }
    }
}

// Dispatch error creation methods
impl Error {
    /// Create an unknown-contract error
    pub fn unknown_contract<S: Into<String>>(name: S, available: Vec<String>) -> Self {
        Self::UnknownContract {
            name: name.into(),
            available,
        }
    }

    /// Create an unknown-operation error
    pub fn unknown_operation<S: Into<String>, O: Into<String>>(contract: S, operation: O) -> Self {
        Self::UnknownOperation {
            contract: contract.into(),
            operation: operation.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
