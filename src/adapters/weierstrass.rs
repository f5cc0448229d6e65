//! Short Weierstrass curves `y^2 = x^3 + ax + b` over a prime field
//!
//! Affine arithmetic over `BigUint` with Fermat inversion, generic over
//! the curve constants. Backs custom curves from configuration and the
//! small test curves; named curves can also be built here as a reference
//! for the crate-backed implementations in `rustcrypto`. Not constant time.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::adapters::named::NamedCurve;
use crate::adapters::point::{CurveParams, Point};
use crate::adapters::traits::CurveArithmetic;
use crate::core::bigint::{mod_add, mod_mul, mod_sub};
use crate::core::inverse::inverse;

/// A short Weierstrass curve over `F_p`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeierstrassCurve {
    params: CurveParams,
    a: BigUint,
    b: BigUint,
}

impl WeierstrassCurve {
    /// Build a curve from raw domain parameters. `a` and `b` are reduced
    /// modulo `p`; nothing else is validated.
    pub fn new(
        name: impl Into<String>,
        prime_modulus: BigUint,
        a: BigUint,
        b: BigUint,
        order: BigUint,
        base_point: Point,
    ) -> Self {
        let a = a % &prime_modulus;
        let b = b % &prime_modulus;
        Self {
            params: CurveParams {
                name: name.into(),
                prime_modulus,
                order,
                base_point,
            },
            a,
            b,
        }
    }

    /// Generic arithmetic over the built-in constants of `curve`
    pub fn named(curve: NamedCurve) -> Self {
        let domain = curve.domain();
        Self::new(curve.to_string(), domain.p, domain.a, domain.b, domain.n, domain.base_point)
    }

    fn p(&self) -> &BigUint {
        &self.params.prime_modulus
    }

    fn double(&self, point: &Point) -> Point {
        let (x, y) = match point {
            Point::Identity => return Point::Identity,
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Point::Identity;
        }
        let p = self.p();

        // lambda = (3x^2 + a) / 2y
        let x_sq = mod_mul(x, x, p);
        let numerator = mod_add(&mod_mul(&BigUint::from(3u32), &x_sq, p), &self.a, p);
        let denominator = mod_mul(&BigUint::from(2u32), y, p);
        let lambda = mod_mul(&numerator, &inverse(&denominator, p), p);

        self.finish_chord(&lambda, x, y, x)
    }

    /// x3 = lambda^2 - x1 - x2, y3 = lambda(x1 - x3) - y1
    fn finish_chord(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Point {
        let p = self.p();
        let lambda_sq = mod_mul(lambda, lambda, p);
        let x3 = mod_sub(&mod_sub(&lambda_sq, x1, p), x2, p);
        let y3 = mod_sub(&mod_mul(lambda, &mod_sub(x1, &x3, p), p), y1, p);
        Point::new(x3, y3)
    }
}

impl CurveArithmetic for WeierstrassCurve {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn scalar_multiply(&self, point: &Point, scalar: &BigUint) -> Point {
        // Left-to-right double-and-add
        let mut acc = Point::Identity;
        for i in (0..scalar.bits()).rev() {
            acc = self.double(&acc);
            if scalar.bit(i) {
                acc = self.add_points(&acc, point);
            }
        }
        acc
    }

    fn add_points(&self, p1: &Point, p2: &Point) -> Point {
        let (x1, y1, x2, y2) = match (p1, p2) {
            (Point::Identity, _) => return p2.clone(),
            (_, Point::Identity) => return p1.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };
        let p = self.p();

        if x1 == x2 {
            if mod_add(y1, y2, p).is_zero() {
                return Point::Identity;
            }
            return self.double(p1);
        }

        // lambda = (y2 - y1) / (x2 - x1)
        let numerator = mod_sub(y2, y1, p);
        let denominator = mod_sub(x2, x1, p);
        let lambda = mod_mul(&numerator, &inverse(&denominator, p), p);

        self.finish_chord(&lambda, x1, y1, x2)
    }

    fn contains(&self, point: &Point) -> bool {
        let (x, y) = match point {
            Point::Identity => return true,
            Point::Affine { x, y } => (x, y),
        };
        let p = self.p();
        if x >= p || y >= p {
            return false;
        }
        let lhs = mod_mul(y, y, p);
        let x_cubed = mod_mul(&mod_mul(x, x, p), x, p);
        let rhs = mod_add(&mod_add(&x_cubed, &mod_mul(&self.a, x, p), p), &self.b, p);
        lhs == rhs
    }
}
