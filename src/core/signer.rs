//! Signing
//!
//! For a fresh nonce `k`: `R = kG`, `r = R.x`, `z = concat(digest)`,
//! `s = (z + r*d) * k^-1 mod N`. Attempts that would emit a component
//! verification must reject (identity `R`, `r = 0`, `r >= N`, `s = 0`)
//! are discarded and retried with a new nonce.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, warn};

use crate::adapters::point::Point;
use crate::adapters::traits::{CurveArithmetic, RandomSource};
use crate::core::bigint::{is_in_scalar_range, mod_mul};
use crate::core::concat::concatenate_bytes;
use crate::core::inverse::inverse;
use crate::core::keypair::KeyPair;
use crate::core::secret::generate_secret;
use crate::error::{EcdsaError, Result};

/// Nonce draws allowed per `sign` call before giving up
pub const DEFAULT_MAX_SIGN_ATTEMPTS: u32 = 8;

/// Signature components `(r, s)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &BigUint {
        &self.r
    }

    pub fn s(&self) -> &BigUint {
        &self.s
    }

    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r=0x{:x}, s=0x{:x}", self.r, self.s)
    }
}

/// Sign `digest` with a fresh nonce, retrying degenerate attempts up to
/// [`DEFAULT_MAX_SIGN_ATTEMPTS`] times.
pub fn sign<C, R>(key: &KeyPair<C>, digest: &[u8], rng: &mut R) -> Result<Signature>
where
    C: CurveArithmetic,
    R: RandomSource + ?Sized,
{
    sign_with_retries(key, digest, rng, DEFAULT_MAX_SIGN_ATTEMPTS)
}

/// Sign `digest`, drawing at most `max_attempts` nonces (minimum one).
///
/// # Errors
/// * `EmptyDigest` if `digest` has no bytes
/// * `RandomSource` if a nonce draw fails (not retried)
/// * `DegenerateSignature` if every attempt was degenerate
#[tracing::instrument(skip_all, fields(curve = %key.curve().params().name, digest_len = digest.len()))]
pub fn sign_with_retries<C, R>(
    key: &KeyPair<C>,
    digest: &[u8],
    rng: &mut R,
    max_attempts: u32,
) -> Result<Signature>
where
    C: CurveArithmetic,
    R: RandomSource + ?Sized,
{
    if digest.is_empty() {
        return Err(EcdsaError::EmptyDigest);
    }

    let max_attempts = max_attempts.max(1);
    for attempt in 1..=max_attempts {
        let nonce = generate_secret(key.curve(), rng)?;
        match sign_with_nonce(key, digest, &nonce) {
            Ok(signature) => {
                debug!(attempt, "Signed digest");
                return Ok(signature);
            }
            Err(EcdsaError::DegenerateSignature { .. }) => {
                warn!(attempt, max_attempts, "Degenerate signature, retrying with a fresh nonce");
            }
            Err(e) => return Err(e),
        }
    }

    Err(EcdsaError::DegenerateSignature {
        attempts: max_attempts,
    })
}

/// Single signing attempt with a caller-supplied nonce.
///
/// `nonce` must lie in `[1, N-1]` (else `Range`). A degenerate result is
/// reported as `DegenerateSignature { attempts: 1 }`.
pub fn sign_with_nonce<C>(key: &KeyPair<C>, digest: &[u8], nonce: &BigUint) -> Result<Signature>
where
    C: CurveArithmetic,
{
    if digest.is_empty() {
        return Err(EcdsaError::EmptyDigest);
    }

    let curve = key.curve();
    let order = &curve.params().order;
    if !is_in_scalar_range(nonce, order) {
        return Err(EcdsaError::Range {
            value: nonce.clone(),
            order: order.clone(),
        });
    }

    let degenerate = EcdsaError::DegenerateSignature { attempts: 1 };

    // r = (kG).x, y discarded
    let r = match curve.scalar_multiply_base(nonce) {
        Point::Affine { x, .. } => x,
        Point::Identity => return Err(degenerate),
    };
    if !is_in_scalar_range(&r, order) {
        return Err(degenerate);
    }

    let z = concatenate_bytes(digest);
    let numerator = z + &r * key.private_scalar();
    let s = mod_mul(&numerator, &inverse(nonce, order), order);
    if s.is_zero() {
        return Err(degenerate);
    }

    Ok(Signature { r, s })
}
