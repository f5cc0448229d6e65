//! Verification
//!
//! With `w = s^-1 mod N`, `u = z*w`, `v = r*w`: the signature is valid iff
//! `(uG + vQ).x == r`. Every failure collapses to `false`; the reason is
//! only ever logged at debug level.

use num_bigint::BigUint;
use tracing::debug;

use crate::adapters::point::Point;
use crate::adapters::traits::CurveArithmetic;
use crate::core::bigint::{is_in_scalar_range, mod_mul};
use crate::core::concat::concatenate_bytes;
use crate::core::inverse::inverse;
use crate::core::signer::Signature;

/// Verify `signature` over `digest` against `public_point`.
#[tracing::instrument(skip_all, fields(curve = %curve.params().name))]
pub fn verify<C>(curve: &C, public_point: &Point, signature: &Signature, digest: &[u8]) -> bool
where
    C: CurveArithmetic + ?Sized,
{
    match check(curve, public_point, signature.r(), signature.s(), digest) {
        Ok(()) => true,
        Err(reason) => {
            debug!(reason, "Signature rejected");
            false
        }
    }
}

/// Verify raw components against public coordinates `(public_x, public_y)`.
pub fn verify_components<C>(
    curve: &C,
    r: &BigUint,
    s: &BigUint,
    public_x: &BigUint,
    public_y: &BigUint,
    digest: &[u8],
) -> bool
where
    C: CurveArithmetic + ?Sized,
{
    let public_point = Point::new(public_x.clone(), public_y.clone());
    let signature = Signature::new(r.clone(), s.clone());
    verify(curve, &public_point, &signature, digest)
}

fn check<C>(
    curve: &C,
    public_point: &Point,
    r: &BigUint,
    s: &BigUint,
    digest: &[u8],
) -> Result<(), &'static str>
where
    C: CurveArithmetic + ?Sized,
{
    let order = &curve.params().order;

    if digest.is_empty() {
        return Err("empty digest");
    }
    if !is_in_scalar_range(r, order) {
        return Err("r out of range");
    }
    if !is_in_scalar_range(s, order) {
        return Err("s out of range");
    }
    if public_point.is_identity() || !curve.contains(public_point) {
        return Err("public point invalid");
    }

    let z = concatenate_bytes(digest);
    let s_inv = inverse(s, order);
    let u = mod_mul(&z, &s_inv, order);
    let v = mod_mul(r, &s_inv, order);

    let u_g = curve.scalar_multiply_base(&u);
    let v_q = curve.scalar_multiply(public_point, &v);
    match curve.add_points(&u_g, &v_q) {
        Point::Affine { x, .. } if &x == r => Ok(()),
        Point::Affine { .. } => Err("x-coordinate mismatch"),
        Point::Identity => Err("reconstructed point is identity"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::named::parse_hex;
    use crate::adapters::rustcrypto::Secp256k1Curve;
    use crate::adapters::weierstrass::test_curves::toy_1039;
    use crate::core::keypair::KeyPair;
    use num_traits::Zero;
    use sha2::{Digest, Sha256};

    fn secp256k1_vector() -> (Secp256k1Curve, Point, Signature) {
        let curve = Secp256k1Curve::new();
        let public_point = Point::new(
            parse_hex("2c8c31fc9f990c6b55e3865a184a4ce50e09481f2eaeb3e60ec1cea13a6ae645").unwrap(),
            parse_hex("64b95e4fdb6948c0386e189b006a29f686769b011704275e4459822dc3328085").unwrap(),
        );
        let signature = Signature::new(
            parse_hex("7c8c60f61a86fb5e63ea4596fe061d632727335874cd64a6a3a90e9ab6bd7422").unwrap(),
            parse_hex("6676ffc8e3e18302f64763847f23eb16c6a96bce5b8127ced9e3273ca5719871").unwrap(),
        );
        (curve, public_point, signature)
    }

    #[test]
    fn test_known_vector_verifies() {
        let (curve, public_point, signature) = secp256k1_vector();
        let digest = Sha256::digest(b"Take the red pill!");
        assert!(verify(&curve, &public_point, &signature, &digest));
    }

    #[test]
    fn test_known_vector_wrong_digest() {
        let (curve, public_point, signature) = secp256k1_vector();
        let digest = Sha256::digest(b"Take the green pill!");
        assert!(!verify(&curve, &public_point, &signature, &digest));
    }

    #[test]
    fn test_verify_components_matches_verify() {
        let (curve, public_point, signature) = secp256k1_vector();
        let digest = Sha256::digest(b"Take the red pill!");
        assert!(verify_components(
            &curve,
            signature.r(),
            signature.s(),
            public_point.x().unwrap(),
            public_point.y().unwrap(),
            &digest,
        ));
    }

    #[test]
    fn test_toy_known_signature() {
        let curve = toy_1039();
        let key = KeyPair::from_private_scalar(curve.clone(), BigUint::from(777u32)).unwrap();
        let signature = Signature::new(BigUint::from(952u32), BigUint::from(815u32));
        assert!(verify(&curve, key.public_point(), &signature, &[7]));
        assert!(!verify(&curve, key.public_point(), &signature, &[8]));
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        let curve = toy_1039();
        let key = KeyPair::from_private_scalar(curve.clone(), BigUint::from(777u32)).unwrap();
        let order = BigUint::from(1039u32);
        let cases = [
            (BigUint::zero(), BigUint::from(815u32)),
            (order.clone(), BigUint::from(815u32)),
            (BigUint::from(952u32), BigUint::zero()),
            (BigUint::from(952u32), order.clone()),
            // s + N is the same residue but must still be rejected
            (BigUint::from(952u32), BigUint::from(815u32 + 1039)),
        ];
        for (r, s) in cases {
            let signature = Signature::new(r, s);
            assert!(!verify(&curve, key.public_point(), &signature, &[7]), "{}", signature);
        }
    }

    #[test]
    fn test_invalid_public_point_rejected() {
        let curve = toy_1039();
        let signature = Signature::new(BigUint::from(952u32), BigUint::from(815u32));
        assert!(!verify(&curve, &Point::Identity, &signature, &[7]));
        let off_curve = Point::new(BigUint::from(0u32), BigUint::from(33u32));
        assert!(!verify(&curve, &off_curve, &signature, &[7]));
    }

    #[test]
    fn test_empty_digest_rejected() {
        let curve = toy_1039();
        let key = KeyPair::from_private_scalar(curve.clone(), BigUint::from(777u32)).unwrap();
        let signature = Signature::new(BigUint::from(952u32), BigUint::from(815u32));
        assert!(!verify(&curve, key.public_point(), &signature, &[]));
    }

    #[test]
    fn test_single_bit_flips_rejected() {
        let (curve, public_point, signature) = secp256k1_vector();
        let digest = Sha256::digest(b"Take the red pill!");
        for bit in (0..256u64).step_by(17) {
            let mut r = signature.r().clone();
            r.set_bit(bit, !r.bit(bit));
            assert!(!verify(&curve, &public_point, &Signature::new(r, signature.s().clone()), &digest));

            let mut s = signature.s().clone();
            s.set_bit(bit, !s.bit(bit));
            assert!(!verify(&curve, &public_point, &Signature::new(signature.r().clone(), s), &digest));
        }
    }
}
