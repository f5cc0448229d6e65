//! Configuration module for curve selection, signing settings and logging
//!
//! This module provides:
//! - Configuration types (`AppConfig`, `SigningConfig`, `CustomCurveConfig`)
//! - YAML loading functionality (`load_config`)
//! - Application constants with environment variable overrides
//! - Logging configuration (`init_logging`)

pub mod constants;
mod loader;
pub mod logging;
mod types;

// Re-export types
pub use types::{AppConfig, CurveName, CustomCurveConfig, SigningConfig};

// Re-export loader functions
pub use loader::{load_config, load_config_from_str, load_config_or_default};

// Re-export logging functions
pub use logging::init_logging;
