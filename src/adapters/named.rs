//! Built-in curve names and their published domain parameters
//!
//! Constants are FIPS 186-4 (NIST P-curves) and SEC 2 (secp256k1).

use num_bigint::BigUint;

use crate::adapters::point::{CurveParams, Point};

/// Named curves with built-in domain parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    P224,
    P256,
    P384,
    P521,
    Secp256k1,
}

impl std::fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamedCurve::P224 => write!(f, "P-224"),
            NamedCurve::P256 => write!(f, "P-256"),
            NamedCurve::P384 => write!(f, "P-384"),
            NamedCurve::P521 => write!(f, "P-521"),
            NamedCurve::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

/// Hex domain parameters. `a = None` means `a = -3`.
struct HexParams {
    p: &'static str,
    a: Option<&'static str>,
    b: &'static str,
    n: &'static str,
    gx: &'static str,
    gy: &'static str,
}

/// Parsed domain parameters of a named curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParams {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub n: BigUint,
    pub base_point: Point,
}

impl NamedCurve {
    fn hex_params(&self) -> HexParams {
        match self {
            NamedCurve::P224 => HexParams {
                p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
                a: None,
                b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
                n: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
                gx: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
                gy: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
            },
            NamedCurve::P256 => HexParams {
                p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
                a: None,
                b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
                n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
                gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
                gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            },
            NamedCurve::P384 => HexParams {
                p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
                    ffffffff0000000000000000ffffffff",
                a: None,
                b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a\
                    c656398d8a2ed19d2a85c8edd3ec2aef",
                n: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf\
                    581a0db248b0a77aecec196accc52973",
                gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38\
                     5502f25dbf55296c3a545e3872760ab7",
                gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0\
                     0a60b1ce1d7e819d7a431d7c90ea0e5f",
            },
            NamedCurve::P521 => HexParams {
                p: "1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
                    ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                a: None,
                b: "051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef10\
                    9e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
                n: "1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
                    fa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
                gx: "0c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3d\
                     baa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
                gy: "11839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e66\
                     2c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
            },
            NamedCurve::Secp256k1 => HexParams {
                p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
                a: Some("0"),
                b: "7",
                n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
                gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
                gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            },
        }
    }

    /// Parse the built-in constants.
    ///
    /// # Panics
    ///
    /// If a constant is not valid hex. They are literals, so this only
    /// fires on a typo in this file.
    pub fn domain(&self) -> DomainParams {
        let hex = self.hex_params();
        let parse = |label: &str, value: &str| {
            parse_hex(value)
                .unwrap_or_else(|| panic!("built-in {} constant '{}' is not valid hex", self, label))
        };
        let p = parse("p", hex.p);
        let a = match hex.a {
            Some(a) => parse("a", a),
            None => &p - 3u32,
        };
        DomainParams {
            a,
            b: parse("b", hex.b),
            n: parse("n", hex.n),
            base_point: Point::new(parse("gx", hex.gx), parse("gy", hex.gy)),
            p,
        }
    }

    /// `{p, N, G}` view of the built-in constants, named after the curve
    pub fn curve_params(&self) -> CurveParams {
        let domain = self.domain();
        CurveParams {
            name: self.to_string(),
            prime_modulus: domain.p,
            order: domain.n,
            base_point: domain.base_point,
        }
    }
}

/// Parse a hex constant, ignoring an optional `0x` prefix
pub fn parse_hex(value: &str) -> Option<BigUint> {
    let digits = value.trim().trim_start_matches("0x");
    if digits.is_empty() {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
}
