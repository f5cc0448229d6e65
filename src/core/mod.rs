//! Core module - secret generation, key pairs, signing, verification
//!
//! This module uses **explicit re-exports** instead of glob exports (`pub use module::*`)
//! so the public API only grows when a type is added below on purpose.
//!
//! ## Usage
//! ```ignore
//! use fips_ecdsa::core::{generate_key_pair, sign, verify};
//! ```

pub mod bigint;
pub mod concat;
pub mod inverse;
pub mod keypair;
pub mod secret;
pub mod signer;
pub mod verifier;

pub use concat::concatenate_bytes;
pub use inverse::inverse;
pub use keypair::{generate_key_pair, KeyPair};
pub use secret::{generate_secret, secret_byte_len, secret_from_bytes, EXTRA_ENTROPY_BITS};
pub use signer::{sign, sign_with_nonce, sign_with_retries, Signature, DEFAULT_MAX_SIGN_ATTEMPTS};
pub use verifier::{verify, verify_components};
