//! Command-line harness for running the contract locally

use std::collections::BTreeMap;
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use chaincode_identity::extract_identity;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::ChaincodeConfig;
use crate::contract::{Chaincode, HelloWorld};
use crate::error::ConfigError;
use crate::response::Response;
use crate::stub::MemoryStub;

/// Top-level arguments
#[derive(Debug, Parser)]
#[command(name = "hello-chaincode")]
#[command(about = "Run the hello_world chaincode against an in-memory ledger")]
pub struct Cli {
    /// JSON config file (defaults to the CORE_CHAINCODE_* environment)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Harness commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the signer identity found in a creator blob
    Signer {
        /// File holding the serialized creator identity or a PEM certificate
        blob: PathBuf,
    },

    /// Run a single invocation against an in-memory ledger
    ///
    /// Example usage:
    ///   hello-chaincode invoke writeFunc1 a 100 --creator user1.pem
    ///   hello-chaincode invoke readFunc1 a --creator user1.pem --state state.json
    Invoke {
        /// Function name (readFunc1, writeFunc1, getSigner)
        function: String,
        /// Function arguments
        args: Vec<String>,
        /// File holding the creator identity blob
        #[arg(long)]
        creator: Option<PathBuf>,
        /// JSON object of initial world state, key to string value
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

impl Cli {
    /// Configuration from `--config`, or from the environment
    pub fn load_config(&self) -> Result<ChaincodeConfig, ConfigError> {
        match &self.config {
            Some(path) => ChaincodeConfig::from_file(path),
            None => ChaincodeConfig::from_env(),
        }
    }
}

#[derive(Serialize)]
struct ResponseView<'a> {
    status: i32,
    message: &'a str,
    payload: String,
}

impl<'a> From<&'a Response> for ResponseView<'a> {
    fn from(response: &'a Response) -> Self {
        Self {
            status: response.status,
            message: &response.message,
            payload: String::from_utf8_lossy(&response.payload).into_owned(),
        }
    }
}

/// Execute a command, writing results to `out`
///
/// Returns whether the command succeeded. Invocations that produce an error
/// response are reported on `out` and yield `false`.
pub fn run(
    command: Commands,
    config: ChaincodeConfig,
    json: bool,
    out: &mut dyn Write,
) -> Result<bool, Box<dyn Error>> {
    match command {
        Commands::Signer { blob } => {
            let blob = std::fs::read(&blob)?;
            let identity = extract_identity(&blob)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &identity)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", identity.common_name)?;
            }
            Ok(true)
        }

        Commands::Invoke {
            function,
            args,
            creator,
            state,
        } => {
            let mut stub = MemoryStub::new().with_invocation(function, args);
            if let Some(path) = creator {
                stub = stub.with_creator(std::fs::read(path)?);
            }
            if let Some(path) = state {
                for (key, value) in load_state(&path)? {
                    stub = stub.with_state(key, value.into_bytes());
                }
            }

            let response = HelloWorld::new(config).invoke(&mut stub);
            if json {
                serde_json::to_writer_pretty(&mut *out, &ResponseView::from(&response))?;
                writeln!(out)?;
            } else if response.is_ok() {
                writeln!(out, "{}", String::from_utf8_lossy(&response.payload))?;
            } else {
                writeln!(out, "Error: {}", response.message)?;
            }
            Ok(response.is_ok())
        }
    }
}

fn load_state(path: &Path) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invoke() {
        let cli = Cli::try_parse_from([
            "hello-chaincode",
            "invoke",
            "writeFunc1",
            "a",
            "100",
            "--creator",
            "user1.pem",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Invoke {
                function,
                args,
                creator,
                state,
            } => {
                assert_eq!(function, "writeFunc1");
                assert_eq!(args, vec!["a".to_string(), "100".to_string()]);
                assert_eq!(creator, Some(PathBuf::from("user1.pem")));
                assert!(state.is_none());
            }
            other => panic!("Expected Invoke, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_signer() {
        let cli = Cli::try_parse_from(["hello-chaincode", "signer", "creator.bin"]).unwrap();
        assert!(matches!(cli.command, Commands::Signer { blob } if blob == Path::new("creator.bin")));
    }

    #[test]
    fn test_invoke_with_seeded_state() {
        let mut state = tempfile::NamedTempFile::new().unwrap();
        write!(state, r#"{{"a": "100"}}"#).unwrap();

        let mut out = Vec::new();
        let ok = run(
            Commands::Invoke {
                function: "readFunc1".to_string(),
                args: vec!["a".to_string()],
                creator: None,
                state: Some(state.path().to_path_buf()),
            },
            ChaincodeConfig::default(),
            false,
            &mut out,
        )
        .unwrap();

        assert!(ok);
        assert_eq!(String::from_utf8(out).unwrap(), "100\n");
    }

    #[test]
    fn test_invoke_unknown_function_json() {
        let mut out = Vec::new();
        let ok = run(
            Commands::Invoke {
                function: "deleteFunc1".to_string(),
                args: vec![],
                creator: None,
                state: None,
            },
            ChaincodeConfig::default(),
            true,
            &mut out,
        )
        .unwrap();

        assert!(!ok);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], 500);
        assert_eq!(value["message"], "Invalid Smart Contract function name.");
    }

    #[test]
    fn test_signer_missing_certificate() {
        let mut blob = tempfile::NamedTempFile::new().unwrap();
        write!(blob, "no certificate here").unwrap();

        let mut out = Vec::new();
        let err = run(
            Commands::Signer {
                blob: blob.path().to_path_buf(),
            },
            ChaincodeConfig::default(),
            false,
            &mut out,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "No Certificate found");
    }
}
