//! FIPS ECDSA
//!
//! Elliptic Curve Digital Signature Algorithm over a prime-order curve:
//! - Per-use secret generation with FIPS 186-4 extra random bits
//! - Key-pair generation, signing and verification
//! - Injected curve arithmetic and randomness (see `adapters`)
//! - YAML configuration and tracing setup for the demo driver

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;

pub use error::{EcdsaError, Result};
