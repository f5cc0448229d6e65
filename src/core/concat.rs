//! Byte-sequence concatenation
//!
//! Interprets a byte sequence as digits in base 1000, most significant
//! byte first: `sum(bytes[i] * 1000^(L-1-i))`. This is not a base-256
//! conversion. Digests and nonce material both go through it, so signer,
//! verifier and secret generator must agree on it bit for bit.

use num_bigint::BigUint;
use num_traits::Zero;

const DIGIT_WEIGHT: u32 = 1000;

/// Concatenate `bytes` into a single non-negative integer.
///
/// An empty slice yields zero.
pub fn concatenate_bytes(bytes: &[u8]) -> BigUint {
    let weight = BigUint::from(DIGIT_WEIGHT);
    bytes.iter().fold(BigUint::zero(), |acc, &byte| acc * &weight + BigUint::from(byte))
}
