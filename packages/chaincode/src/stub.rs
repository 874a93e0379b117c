//! Host interface consumed by the chaincode
//!
//! The peer owns world state, transaction context and the creator identity.
//! The chaincode only sees them through [`ChaincodeStub`].

use std::collections::BTreeMap;

use crate::error::LedgerError;

/// Per-transaction view of the host ledger
pub trait ChaincodeStub {
    /// Invoked function name and its string arguments
    fn function_and_parameters(&self) -> (String, Vec<String>);

    /// Read a key from world state; `None` when the key is absent
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write a key to world state
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Serialized identity of the transaction creator
    fn creator(&self) -> Result<Vec<u8>, LedgerError>;
}

/// In-memory [`ChaincodeStub`] for tests and local runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStub {
    function: String,
    args: Vec<String>,
    creator: Option<Vec<u8>>,
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryStub {
    /// Empty stub with no invocation, no creator and no state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the creator identity blob
    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<Vec<u8>>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the function name and arguments of the next invocation
    #[must_use]
    pub fn with_invocation<I, S>(mut self, function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_invocation(function, args);
        self
    }

    /// Seed a key in world state
    #[must_use]
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.state.insert(key.into(), value.into());
        self
    }

    /// Replace the invocation while keeping state, for multi-step scenarios
    pub fn set_invocation<I, S>(&mut self, function: impl Into<String>, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.function = function.into();
        self.args = args.into_iter().map(Into::into).collect();
    }

    /// Current world state
    #[must_use]
    pub fn state(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.state
    }
}

impl ChaincodeStub for MemoryStub {
    fn function_and_parameters(&self) -> (String, Vec<String>) {
        (self.function.clone(), self.args.clone())
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.state.insert(key.to_string(), value);
        Ok(())
    }

    fn creator(&self) -> Result<Vec<u8>, LedgerError> {
        self.creator
            .clone()
            .ok_or_else(|| LedgerError::Creator("no creator in transaction context".to_string()))
    }
}
