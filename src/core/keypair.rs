//! Key-pair generation
//!
//! `public_point = private_scalar * G`. The private scalar is fixed at
//! construction and never printed or serialized by this crate.

use std::fmt;

use num_bigint::BigUint;
use tracing::debug;

use crate::adapters::point::Point;
use crate::adapters::traits::{CurveArithmetic, RandomSource};
use crate::core::bigint::is_in_scalar_range;
use crate::core::secret::generate_secret;
use crate::error::{EcdsaError, Result};

/// A private scalar, its public point and the curve they live on
#[derive(Clone)]
pub struct KeyPair<C> {
    private_scalar: BigUint,
    public_point: Point,
    curve: C,
}

impl<C: CurveArithmetic> KeyPair<C> {
    /// Build a key pair from a known private scalar.
    ///
    /// Rejects scalars outside `[1, N-1]` with `InvalidKey`.
    pub fn from_private_scalar(curve: C, private_scalar: BigUint) -> Result<Self> {
        let order = &curve.params().order;
        if !is_in_scalar_range(&private_scalar, order) {
            return Err(EcdsaError::InvalidKey(format!(
                "private scalar must be in [1, N-1] for {}",
                curve.params().name
            )));
        }
        let public_point = curve.scalar_multiply_base(&private_scalar);
        Ok(Self {
            private_scalar,
            public_point,
            curve,
        })
    }

    pub fn private_scalar(&self) -> &BigUint {
        &self.private_scalar
    }

    pub fn public_point(&self) -> &Point {
        &self.public_point
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }
}

impl<C: CurveArithmetic> fmt::Debug for KeyPair<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve.params().name)
            .field("public_point", &self.public_point)
            .field("private_scalar", &"<redacted>")
            .finish()
    }
}

/// Generate a fresh key pair on `curve`.
///
/// Fails only if secret generation fails; nothing is retried.
#[tracing::instrument(skip_all, fields(curve = %curve.params().name))]
pub fn generate_key_pair<C, R>(curve: C, rng: &mut R) -> Result<KeyPair<C>>
where
    C: CurveArithmetic,
    R: RandomSource + ?Sized,
{
    let private_scalar = generate_secret(&curve, rng)?;
    let public_point = curve.scalar_multiply_base(&private_scalar);
    debug!(public_point = %public_point, "Generated key pair");
    Ok(KeyPair {
        private_scalar,
        public_point,
        curve,
    })
}
