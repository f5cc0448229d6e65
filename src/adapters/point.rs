//! Curve point and curve parameter value types

use std::fmt;

use num_bigint::BigUint;

/// A point on an elliptic curve, or the point at infinity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    /// Group identity (point at infinity)
    Identity,
    /// Affine coordinates `(x, y)`
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "(infinity)"),
            Point::Affine { x, y } => write!(f, "(0x{:x}, 0x{:x})", x, y),
        }
    }
}

/// Read-only domain parameters of a prime-order curve group.
///
/// `order` must be prime and `base_point` must generate a subgroup of
/// that order. Neither is checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Human-readable curve name, used in log fields
    pub name: String,
    /// Field prime `p`
    pub prime_modulus: BigUint,
    /// Group order `N`
    pub order: BigUint,
    /// Generator `G`
    pub base_point: Point,
}
