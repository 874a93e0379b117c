//! # hello_world chaincode
//!
//! A minimal key-value contract for a permissioned ledger. Every read and
//! write resolves the invoking client's common name from the creator
//! certificate (see [`chaincode_identity`]).
//!
//! The peer runtime (world state, ordering, identity issuance) is external;
//! it is reached only through [`ChaincodeStub`]. [`MemoryStub`] provides an
//! in-process host for tests and the `hello-chaincode` harness.
//!
//! ```rust,ignore
//! use hello_chaincode::{Chaincode, HelloWorld, MemoryStub};
//!
//! let contract = HelloWorld::default();
//! let mut stub = MemoryStub::new()
//!     .with_creator(creator_pem)
//!     .with_invocation("writeFunc1", ["a", "100"]);
//! assert!(contract.invoke(&mut stub).is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contract;
pub mod error;
pub mod logging;
pub mod response;
pub mod stub;

pub use config::ChaincodeConfig;
pub use contract::{Chaincode, Function, HelloWorld};
pub use error::{ChaincodeError, ConfigError, LedgerError, Result};
pub use response::Response;
pub use stub::{ChaincodeStub, MemoryStub};

pub use chaincode_identity;
