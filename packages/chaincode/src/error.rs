//! Error types for the chaincode and its host interface

use chaincode_identity::ExtractionError;
use thiserror::Error;

/// Errors reported by the host ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Reading world state failed
    #[error("Failed to read state for key {key}: {message}")]
    StateRead {
        /// Key being read
        key: String,
        /// Host diagnostic
        message: String,
    },

    /// Writing world state failed
    #[error("Failed to put state for key {key}: {message}")]
    StateWrite {
        /// Key being written
        key: String,
        /// Host diagnostic
        message: String,
    },

    /// The transaction creator could not be obtained
    #[error("Failed to get creator: {0}")]
    Creator(String),
}

/// Errors raised while handling an invocation
#[derive(Debug, Error)]
pub enum ChaincodeError {
    /// The requested function is not exported by the contract
    #[error("Invalid Smart Contract function name.")]
    UnknownFunction(String),

    /// Wrong number of arguments for the function
    #[error("Incorrect number of arguments. Expecting {expected}")]
    IncorrectArgumentCount {
        /// Arguments the function takes
        expected: usize,
        /// Arguments supplied
        actual: usize,
    },

    /// Host ledger failure
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Signer identity could not be resolved
    #[error(transparent)]
    Signer(#[from] ExtractionError),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the config schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment variable holds an unusable value
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name
        name: String,
        /// Offending value
        value: String,
    },
}

/// Result alias for invocation handling
pub type Result<T> = std::result::Result<T, ChaincodeError>;
