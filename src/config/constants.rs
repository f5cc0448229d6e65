//! Configuration defaults with environment variable overrides

use crate::core::DEFAULT_MAX_SIGN_ATTEMPTS;

/// Upper bound accepted for `signing.max_attempts`
pub const MAX_SIGN_ATTEMPTS_LIMIT: u32 = 64;

/// Default config file path for the demo driver
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Nonce draws per signature (default: 8)
///
/// Environment variable: `ECDSA_MAX_SIGN_ATTEMPTS`
pub fn max_sign_attempts() -> u32 {
    std::env::var("ECDSA_MAX_SIGN_ATTEMPTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_SIGN_ATTEMPTS)
}

/// Config file path (default: `config.yaml`)
///
/// Environment variable: `ECDSA_CONFIG`
pub fn config_path() -> String {
    std::env::var("ECDSA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
