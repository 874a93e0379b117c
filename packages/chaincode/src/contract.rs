//! The hello_world contract
//!
//! Exposes a key-value read and write over world state. Each call resolves
//! the signer from the creator certificate and logs it; whether a failed
//! resolution aborts the call is governed by
//! [`ChaincodeConfig::require_signer`].

use std::fmt;
use std::str::FromStr;

use chaincode_identity::extract_common_name;
use tracing::{error, info, warn};

use crate::config::ChaincodeConfig;
use crate::error::{ChaincodeError, Result};
use crate::response::Response;
use crate::stub::ChaincodeStub;

/// Entry points the peer calls on a chaincode
pub trait Chaincode {
    /// Called once when the chaincode is instantiated
    fn init(&self, stub: &mut dyn ChaincodeStub) -> Response;

    /// Called for every transaction proposal
    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response;
}

/// Functions exported by [`HelloWorld`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `readFunc1 <key>`
    Read,
    /// `writeFunc1 <key> <value>`
    Write,
    /// `getSigner`
    GetSigner,
}

impl Function {
    /// All exported functions
    pub const ALL: [Function; 3] = [Function::Read, Function::Write, Function::GetSigner];

    /// Name the client uses to invoke the function
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Function::Read => "readFunc1",
            Function::Write => "writeFunc1",
            Function::GetSigner => "getSigner",
        }
    }

    /// Number of arguments the function takes
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Function::Read => 1,
            Function::Write => 2,
            Function::GetSigner => 0,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|function| function.name() == s)
            .ok_or_else(|| ChaincodeError::UnknownFunction(s.to_string()))
    }
}

/// Key-value contract with signer resolution
#[derive(Debug, Clone, Default)]
pub struct HelloWorld {
    config: ChaincodeConfig,
}

impl HelloWorld {
    /// Contract using `config`
    #[must_use]
    pub fn new(config: ChaincodeConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    fn dispatch(
        &self,
        stub: &mut dyn ChaincodeStub,
        name: &str,
        args: &[String],
    ) -> Result<Vec<u8>> {
        let function = name.parse::<Function>().map_err(|e| {
            let accepted: Vec<&str> = Function::ALL.iter().map(|f| f.name()).collect();
            error!(
                "Unknown action, check the first argument, must be one of {accepted:?}. But got: {name}"
            );
            e
        })?;

        if args.len() != function.arity() {
            return Err(ChaincodeError::IncorrectArgumentCount {
                expected: function.arity(),
                actual: args.len(),
            });
        }

        match function {
            Function::Read => self.read(stub, &args[0]),
            Function::Write => self.write(stub, &args[0], &args[1]),
            Function::GetSigner => Ok(signer(stub)?.into_bytes()),
        }
    }

    fn read(&self, stub: &dyn ChaincodeStub, key: &str) -> Result<Vec<u8>> {
        info!("key = {key}");

        self.resolve_signer(stub)?;

        let value = stub.get_state(key)?.unwrap_or_default();
        info!("Query Response: {}", String::from_utf8_lossy(&value));
        Ok(value)
    }

    fn write(&self, stub: &mut dyn ChaincodeStub, key: &str, value: &str) -> Result<Vec<u8>> {
        info!("key = {key}, value = {value}");

        self.resolve_signer(stub)?;

        stub.put_state(key, value.as_bytes().to_vec())?;
        Ok(Vec::new())
    }

    /// Resolve and log the signer, applying the `require_signer` policy
    fn resolve_signer(&self, stub: &dyn ChaincodeStub) -> Result<Option<String>> {
        match signer(stub) {
            Ok(common_name) => {
                info!("Creator: {common_name}");
                Ok(Some(common_name))
            }
            Err(e) if self.config.require_signer => Err(e),
            Err(e) => {
                warn!("Could not resolve signer, continuing: {e}");
                Ok(None)
            }
        }
    }
}

/// Common name of the transaction creator
fn signer(stub: &dyn ChaincodeStub) -> Result<String> {
    let creator = stub.creator()?;
    Ok(extract_common_name(&creator)?)
}

impl Chaincode for HelloWorld {
    fn init(&self, _stub: &mut dyn ChaincodeStub) -> Response {
        info!("########### {} Init ###########", self.config.name);
        Response::success(Vec::new())
    }

    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response {
        info!("########### {} Invoke ###########", self.config.name);

        let (function, args) = stub.function_and_parameters();
        match self.dispatch(stub, &function, &args) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                warn!(function = %function, "invocation failed: {e}");
                e.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::MemoryStub;

    #[test]
    fn test_function_names_round_trip() {
        for function in Function::ALL {
            assert_eq!(function.name().parse::<Function>().unwrap(), function);
        }
    }

    #[test]
    fn test_unknown_function() {
        let err = "deleteFunc1".parse::<Function>().unwrap_err();
        assert!(matches!(err, ChaincodeError::UnknownFunction(name) if name == "deleteFunc1"));
    }

    #[test]
    fn test_init_succeeds() {
        let contract = HelloWorld::default();
        let mut stub = MemoryStub::new();

        let response = contract.init(&mut stub);

        assert!(response.is_ok());
        assert!(response.payload.is_empty());
    }

    #[test]
    fn test_write_without_creator_is_tolerated_by_default() {
        let contract = HelloWorld::default();
        let mut stub = MemoryStub::new().with_invocation("writeFunc1", ["k", "v"]);

        let response = contract.invoke(&mut stub);

        assert!(response.is_ok(), "{}", response.message);
        assert_eq!(stub.state().get("k"), Some(&b"v".to_vec()));
    }

    #[test]
    fn test_write_without_creator_is_rejected_when_required() {
        let contract = HelloWorld::new(ChaincodeConfig {
            require_signer: true,
            ..ChaincodeConfig::default()
        });
        let mut stub = MemoryStub::new().with_invocation("writeFunc1", ["k", "v"]);

        let response = contract.invoke(&mut stub);

        assert!(!response.is_ok());
        assert!(response.message.contains("Failed to get creator"));
        assert!(stub.state().is_empty());
    }
}
