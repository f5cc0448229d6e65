//! Capability traits consumed by the signature core
//!
//! The core never hard-codes a curve family or a process-wide RNG. Curve
//! arithmetic and randomness are injected through these two traits, so a
//! toy small-prime curve or a scripted byte source can stand in for tests.

use num_bigint::BigUint;

use crate::adapters::errors::RandomResult;
use crate::adapters::point::{CurveParams, Point};

/// Group operations of a prime-order elliptic curve.
///
/// # Example Implementation
///
/// ```ignore
/// struct MyCurve { params: CurveParams }
///
/// impl CurveArithmetic for MyCurve {
///     fn params(&self) -> &CurveParams { &self.params }
///     fn scalar_multiply(&self, point: &Point, scalar: &BigUint) -> Point { /* ... */ }
///     fn add_points(&self, p: &Point, q: &Point) -> Point { /* ... */ }
///     fn contains(&self, point: &Point) -> bool { /* ... */ }
/// }
/// ```
pub trait CurveArithmetic {
    /// Domain parameters `{p, N, G}`
    fn params(&self) -> &CurveParams;

    /// `scalar * point`
    fn scalar_multiply(&self, point: &Point, scalar: &BigUint) -> Point;

    /// `scalar * G`
    fn scalar_multiply_base(&self, scalar: &BigUint) -> Point {
        self.scalar_multiply(&self.params().base_point, scalar)
    }

    /// `p + q`
    fn add_points(&self, p: &Point, q: &Point) -> Point;

    /// Whether `point` satisfies the curve equation (the identity counts)
    fn contains(&self, point: &Point) -> bool;
}

/// Source of cryptographically secure random bytes.
///
/// Every draw fills the whole buffer or fails; partial fills are errors.
pub trait RandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> RandomResult<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> RandomResult<()> {
        (**self).fill_bytes(dest)
    }
}
