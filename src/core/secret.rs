//! Per-use secret generation (FIPS 186-4 B.5.1, extra random bits)
//!
//! Draw `bitlen(N) + 64` bits, concatenate them into `c`, then map into
//! `[1, N-1]` with `k = (c mod (N-1)) + 1`. The 64 surplus bits keep the
//! modulo bias negligible.

use num_bigint::BigUint;
use num_traits::One;
use tracing::trace;

use crate::adapters::traits::{CurveArithmetic, RandomSource};
use crate::core::bigint::is_in_scalar_range;
use crate::core::concat::concatenate_bytes;
use crate::error::{EcdsaError, Result};

/// Surplus bits drawn beyond the bit length of the group order
pub const EXTRA_ENTROPY_BITS: u64 = 64;

/// Number of random bytes drawn for one secret: `ceil((bitlen(N) + 64) / 8)`
pub fn secret_byte_len(order: &BigUint) -> usize {
    ((order.bits() + EXTRA_ENTROPY_BITS + 7) / 8) as usize
}

/// Map raw random bytes onto a scalar in `[1, N-1]`.
///
/// Fails with `Range` if the order is below 2, or if the result escapes
/// the range (which the arithmetic rules out, so that would be a defect).
pub fn secret_from_bytes(order: &BigUint, bytes: &[u8]) -> Result<BigUint> {
    if order <= &BigUint::one() {
        return Err(EcdsaError::Range {
            value: BigUint::one(),
            order: order.clone(),
        });
    }

    let c = concatenate_bytes(bytes);
    let k = c % (order - 1u32) + 1u32;

    if !is_in_scalar_range(&k, order) {
        return Err(EcdsaError::Range {
            value: k,
            order: order.clone(),
        });
    }
    Ok(k)
}

/// Generate a fresh secret scalar for `curve`.
///
/// Used both for private keys and for per-signature nonces. Randomness
/// failures propagate as `RandomSource` and are not retried.
pub fn generate_secret<C, R>(curve: &C, rng: &mut R) -> Result<BigUint>
where
    C: CurveArithmetic + ?Sized,
    R: RandomSource + ?Sized,
{
    let order = &curve.params().order;
    let mut bytes = vec![0u8; secret_byte_len(order)];
    rng.fill_bytes(&mut bytes)?;
    trace!(bytes = bytes.len(), "Drew secret material");
    secret_from_bytes(order, &bytes)
}
