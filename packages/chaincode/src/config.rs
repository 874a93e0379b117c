//! Chaincode configuration
//!
//! Values come from a JSON file or from the environment variables the peer
//! sets when it launches a chaincode process.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Chaincode name variable set by the peer
pub const ENV_NAME: &str = "CORE_CHAINCODE_ID_NAME";
/// Log level variable set by the peer
pub const ENV_LOG_LEVEL: &str = "CORE_CHAINCODE_LOGGING_LEVEL";
/// Whether reads and writes must resolve a signer
pub const ENV_REQUIRE_SIGNER: &str = "CHAINCODE_REQUIRE_SIGNER";

/// Runtime settings for the contract
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaincodeConfig {
    /// Name used in log banners
    pub name: String,
    /// `env_logger` filter directive
    pub log_level: String,
    /// Abort reads and writes when the signer cannot be resolved
    pub require_signer: bool,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            name: "hello_world".to_string(),
            log_level: "info".to_string(),
            require_signer: false,
        }
    }
}

impl ChaincodeConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_NAME) {
            // The peer passes "name:version"
            config.name = match name.split_once(':') {
                Some((base, _)) => base.to_string(),
                None => name,
            };
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level.to_lowercase();
        }
        if let Some(value) = lookup(ENV_REQUIRE_SIGNER) {
            config.require_signer = parse_bool(ENV_REQUIRE_SIGNER, &value)?;
        }

        Ok(config)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
