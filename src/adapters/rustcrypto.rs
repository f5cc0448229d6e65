//! Named curves backed by the RustCrypto curve crates
//!
//! `BigUint` values cross into the crate types as fixed-width big-endian
//! field bytes: scalars through `PrimeField::from_repr`, points through
//! uncompressed SEC1 encoding. Group operations run in projective
//! coordinates inside the curve crates.

use std::marker::PhantomData;

use elliptic_curve::ff::PrimeField;
use elliptic_curve::group::{Curve as _, Group};
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, FieldBytes, FieldBytesSize, ProjectivePoint, Scalar};
use num_bigint::BigUint;

use crate::adapters::named::NamedCurve;
use crate::adapters::point::{CurveParams, Point};
use crate::adapters::traits::CurveArithmetic;

/// Links a curve crate's type to the matching built-in parameters
pub trait NamedGroup: elliptic_curve::CurveArithmetic {
    const NAMED: NamedCurve;
}

impl NamedGroup for p224::NistP224 {
    const NAMED: NamedCurve = NamedCurve::P224;
}

impl NamedGroup for p256::NistP256 {
    const NAMED: NamedCurve = NamedCurve::P256;
}

impl NamedGroup for p384::NistP384 {
    const NAMED: NamedCurve = NamedCurve::P384;
}

impl NamedGroup for p521::NistP521 {
    const NAMED: NamedCurve = NamedCurve::P521;
}

impl NamedGroup for k256::Secp256k1 {
    const NAMED: NamedCurve = NamedCurve::Secp256k1;
}

/// `CurveArithmetic` over a RustCrypto prime-order curve.
///
/// Scalars are reduced modulo `N` first. Points that are not on the curve
/// multiply and add to the identity; callers check `contains` before
/// trusting external points.
#[derive(Debug, Clone)]
pub struct PrimeOrderCurve<C> {
    params: CurveParams,
    curve: PhantomData<C>,
}

pub type P224Curve = PrimeOrderCurve<p224::NistP224>;
pub type P256Curve = PrimeOrderCurve<p256::NistP256>;
pub type P384Curve = PrimeOrderCurve<p384::NistP384>;
pub type P521Curve = PrimeOrderCurve<p521::NistP521>;
pub type Secp256k1Curve = PrimeOrderCurve<k256::Secp256k1>;

/// Left-pad `value` to the curve's field width, `None` if it is wider
fn field_bytes<C: elliptic_curve::Curve>(value: &BigUint) -> Option<FieldBytes<C>> {
    let bytes = value.to_bytes_be();
    let mut repr = FieldBytes::<C>::default();
    if bytes.len() > repr.len() {
        return None;
    }
    let offset = repr.len() - bytes.len();
    repr[offset..].copy_from_slice(&bytes);
    Some(repr)
}

impl<C> PrimeOrderCurve<C>
where
    C: NamedGroup,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    pub fn new() -> Self {
        Self {
            params: C::NAMED.curve_params(),
            curve: PhantomData,
        }
    }

    fn to_scalar(&self, value: &BigUint) -> Scalar<C> {
        let reduced = value % &self.params.order;
        let scalar = field_bytes::<C>(&reduced).and_then(|repr| -> Option<Scalar<C>> {
            <Scalar<C> as PrimeField>::from_repr(repr).into()
        });
        scalar.expect("scalar reduced modulo N is a canonical field element")
    }

    fn to_projective(point: &Point) -> Option<ProjectivePoint<C>> {
        let (x, y) = match point {
            Point::Identity => return Some(<ProjectivePoint<C> as Group>::identity()),
            Point::Affine { x, y } => (x, y),
        };
        let encoded =
            EncodedPoint::<C>::from_affine_coordinates(&field_bytes::<C>(x)?, &field_bytes::<C>(y)?, false);
        let affine: Option<AffinePoint<C>> =
            <AffinePoint<C> as FromEncodedPoint<C>>::from_encoded_point(&encoded).into();
        affine.map(Into::into)
    }

    fn from_projective(point: &ProjectivePoint<C>) -> Point {
        let encoded = point.to_affine().to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Point::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y)),
            _ => Point::Identity,
        }
    }
}

impl<C> CurveArithmetic for PrimeOrderCurve<C>
where
    C: NamedGroup,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn scalar_multiply(&self, point: &Point, scalar: &BigUint) -> Point {
        match Self::to_projective(point) {
            Some(p) => Self::from_projective(&(p * self.to_scalar(scalar))),
            None => Point::Identity,
        }
    }

    fn scalar_multiply_base(&self, scalar: &BigUint) -> Point {
        let generator = <ProjectivePoint<C> as Group>::generator();
        Self::from_projective(&(generator * self.to_scalar(scalar)))
    }

    fn add_points(&self, p: &Point, q: &Point) -> Point {
        match (Self::to_projective(p), Self::to_projective(q)) {
            (Some(a), Some(b)) => Self::from_projective(&(a + b)),
            _ => Point::Identity,
        }
    }

    fn contains(&self, point: &Point) -> bool {
        Self::to_projective(point).is_some()
    }
}
