//! Logger initialisation
//!
//! The chaincode emits `tracing` events; with the `log` bridge enabled and no
//! tracing subscriber installed they are forwarded to `env_logger`.

use std::sync::Once;

use crate::config::ChaincodeConfig;

static INIT_LOGGER: Once = Once::new();

/// Install the process logger (first call wins)
///
/// The configured level is applied first; `RUST_LOG`, when set, overrides it:
/// - `RUST_LOG=debug` - everything including extraction details
/// - `RUST_LOG=hello_chaincode=info,chaincode_identity=debug` - per crate
pub fn init(config: &ChaincodeConfig) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&config.log_level);
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.format_timestamp_micros();

        if builder.try_init().is_ok() {
            log::info!("logging initialized for chaincode {}", config.name);
        }
    });
}

/// Initialize logging for test environments
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
