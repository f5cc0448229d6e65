//! Curve selected at runtime
//!
//! Named curves run on the RustCrypto crates; custom parameters fall back
//! to the generic Weierstrass arithmetic.

use num_bigint::BigUint;

use crate::adapters::named::NamedCurve;
use crate::adapters::point::{CurveParams, Point};
use crate::adapters::rustcrypto::{P224Curve, P256Curve, P384Curve, P521Curve, Secp256k1Curve};
use crate::adapters::traits::CurveArithmetic;
use crate::adapters::weierstrass::WeierstrassCurve;

#[derive(Debug, Clone)]
pub enum CurveBackend {
    P224(P224Curve),
    P256(P256Curve),
    P384(P384Curve),
    P521(P521Curve),
    Secp256k1(Secp256k1Curve),
    /// Caller-supplied domain parameters
    Custom(WeierstrassCurve),
}

impl CurveBackend {
    pub fn named(curve: NamedCurve) -> Self {
        match curve {
            NamedCurve::P224 => CurveBackend::P224(P224Curve::new()),
            NamedCurve::P256 => CurveBackend::P256(P256Curve::new()),
            NamedCurve::P384 => CurveBackend::P384(P384Curve::new()),
            NamedCurve::P521 => CurveBackend::P521(P521Curve::new()),
            NamedCurve::Secp256k1 => CurveBackend::Secp256k1(Secp256k1Curve::new()),
        }
    }

    fn arithmetic(&self) -> &dyn CurveArithmetic {
        match self {
            CurveBackend::P224(curve) => curve,
            CurveBackend::P256(curve) => curve,
            CurveBackend::P384(curve) => curve,
            CurveBackend::P521(curve) => curve,
            CurveBackend::Secp256k1(curve) => curve,
            CurveBackend::Custom(curve) => curve,
        }
    }
}

impl From<WeierstrassCurve> for CurveBackend {
    fn from(curve: WeierstrassCurve) -> Self {
        CurveBackend::Custom(curve)
    }
}

impl CurveArithmetic for CurveBackend {
    fn params(&self) -> &CurveParams {
        self.arithmetic().params()
    }

    fn scalar_multiply(&self, point: &Point, scalar: &BigUint) -> Point {
        self.arithmetic().scalar_multiply(point, scalar)
    }

    fn scalar_multiply_base(&self, scalar: &BigUint) -> Point {
        self.arithmetic().scalar_multiply_base(scalar)
    }

    fn add_points(&self, p: &Point, q: &Point) -> Point {
        self.arithmetic().add_points(p, q)
    }

    fn contains(&self, point: &Point) -> bool {
        self.arithmetic().contains(point)
    }
}
