//! Configuration loader for YAML files
//!
//! This module handles loading and validating configuration from YAML files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::error::EcdsaError;

use super::types::AppConfig;

/// Load configuration from a YAML file
///
/// This function:
/// 1. Checks if the file exists
/// 2. Parses the YAML content
/// 3. Validates the configuration rules
///
/// # Example
/// ```ignore
/// use std::path::Path;
/// use fips_ecdsa::config::load_config;
///
/// let config = load_config(Path::new("config.yaml"))?;
/// let curve = config.build_curve()?;
/// ```
pub fn load_config(path: &Path) -> Result<AppConfig, EcdsaError> {
    if !path.exists() {
        return Err(EcdsaError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let config: AppConfig = serde_yaml::from_reader(reader).map_err(|e| {
        EcdsaError::Config(format!(
            "YAML parse error in '{}': {}",
            path.display(),
            e
        ))
    })?;

    config.validate()?;

    Ok(config)
}

/// Load configuration from `path`, or fall back to defaults when the file
/// does not exist. Defaults still pick up environment overrides, so they
/// are validated like a loaded file.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, EcdsaError> {
    if !path.exists() {
        info!("[CONFIG] {} not found, using defaults", path.display());
        let config = AppConfig::default();
        config.validate()?;
        return Ok(config);
    }
    load_config(path)
}

/// Load configuration from a YAML string (useful for testing)
pub fn load_config_from_str(yaml_content: &str) -> Result<AppConfig, EcdsaError> {
    let config: AppConfig = serde_yaml::from_str(yaml_content)
        .map_err(|e| EcdsaError::Config(format!("YAML parse error: {}", e)))?;

    config.validate()?;

    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================
