//! ECDSA demo driver
//!
//! 1. Loads configuration (first CLI argument, `ECDSA_CONFIG`, or defaults)
//! 2. Generates a key pair on the configured curve
//! 3. Signs the SHA-256 digest of a message and verifies it (positive case)
//! 4. Verifies the same signature against a different message (negative case)

use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{error, info};

use fips_ecdsa::adapters::{CurveArithmetic, SystemRandom};
use fips_ecdsa::config::{self, constants, AppConfig};
use fips_ecdsa::core::{generate_key_pair, sign_with_retries, verify};

fn load_app_config() -> anyhow::Result<AppConfig> {
    let path = std::env::args().nth(1).unwrap_or_else(constants::config_path);
    Ok(config::load_config_or_default(Path::new(&path))?)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::init_logging();

    let app_config = match load_app_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("[ERROR] Configuration failed: {}", e);
            std::process::exit(1);
        }
    };

    let curve = app_config.build_curve()?;
    info!(curve = %curve.params().name, max_attempts = app_config.signing.max_attempts, "[CONFIG] Loaded");

    let mut rng = SystemRandom;
    let key = generate_key_pair(curve, &mut rng)?;
    info!(public_point = %key.public_point(), "Generated key pair");

    info!("Positive test case");
    let digest = Sha256::digest(b"Take the red pill!");
    info!(digest = %hex::encode(digest), "Hashed message");
    let signature = sign_with_retries(&key, &digest, &mut rng, app_config.signing.max_attempts)?;
    info!(%signature, "Signed message");
    let valid = verify(key.curve(), key.public_point(), &signature, &digest);
    info!(valid, "Verified original message");

    info!("Negative test case (different message digest)");
    let other_digest = Sha256::digest(b"Take the green pill!");
    let valid = verify(key.curve(), key.public_point(), &signature, &other_digest);
    info!(valid, "Verified altered message");

    Ok(())
}
