//! External capability error types
//!
//! Failures of the injected randomness capability are reported as
//! `RandomSourceError`, which converts into `EcdsaError` via thiserror.

use thiserror::Error;

/// Errors raised by a [`RandomSource`](crate::adapters::RandomSource)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomSourceError {
    /// The underlying entropy source could not produce bytes
    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),

    /// A scripted source ran out of queued byte strings
    #[error("Random source exhausted: {requested} bytes requested")]
    Exhausted { requested: usize },

    /// A scripted source held a byte string of the wrong size
    #[error("Random source length mismatch: expected {expected} bytes, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Result type alias for randomness draws
pub type RandomResult<T> = std::result::Result<T, RandomSourceError>;
