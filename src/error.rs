//! Crate-wide error types using thiserror
//!
//! Every fallible operation returns `EcdsaError`. Verification never
//! fails: it reduces every problem to `false`.

use num_bigint::BigUint;
use thiserror::Error;

use crate::adapters::errors::RandomSourceError;

#[derive(Error, Debug)]
pub enum EcdsaError {
    #[error("Random source error: {0}")]
    RandomSource(#[from] RandomSourceError),

    /// A derived scalar fell outside `[1, N-1]`. Signals a logic defect,
    /// never retried.
    #[error("Scalar out of range: {value} is not in [1, {order} - 1]")]
    Range { value: BigUint, order: BigUint },

    #[error("Degenerate signature: no usable nonce after {attempts} attempt(s)")]
    DegenerateSignature { attempts: u32 },

    #[error("Message digest is empty")]
    EmptyDigest,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using EcdsaError
pub type Result<T> = std::result::Result<T, EcdsaError>;
