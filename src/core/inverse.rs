//! Modular inverse modulo a prime (Fermat's little theorem)

use num_bigint::BigUint;

use super::bigint::mod_pow;

/// Compute `d^(prime - 2) mod prime`.
///
/// # Preconditions
/// * `prime` is an odd prime
/// * `d` is not a multiple of `prime`
///
/// Neither is checked. For `d ≡ 0` the result is `0`, which is not an
/// inverse; callers must rule that case out themselves.
pub fn inverse(d: &BigUint, prime: &BigUint) -> BigUint {
    let exponent = prime - 2u32;
    mod_pow(d, &exponent, prime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn test_inverse_of_5_mod_13() {
        let inv = inverse(&BigUint::from(5u32), &BigUint::from(13u32));
        assert_eq!(inv, BigUint::from(8u32));
    }

    #[test]
    fn test_inverse_exhaustive_small_primes() {
        for prime in [3u32, 5, 7, 13, 97, 1009, 1039] {
            let p = BigUint::from(prime);
            for d in 1..prime {
                let d = BigUint::from(d);
                let inv = inverse(&d, &p);
                assert_eq!((inv * &d) % &p, BigUint::one(), "d={} prime={}", d, prime);
            }
        }
    }

    #[test]
    fn test_zero_has_degenerate_inverse() {
        assert_eq!(inverse(&BigUint::zero(), &BigUint::from(13u32)), BigUint::zero());
        assert_eq!(inverse(&BigUint::from(26u32), &BigUint::from(13u32)), BigUint::zero());
    }

    #[test]
    fn test_unreduced_input() {
        // 18 = 5 mod 13
        assert_eq!(
            inverse(&BigUint::from(18u32), &BigUint::from(13u32)),
            BigUint::from(8u32)
        );
    }

    #[test]
    fn test_inverse_mod_secp256k1_order() {
        let n = BigUint::parse_bytes(
            b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
            16,
        )
        .unwrap();
        let d = BigUint::parse_bytes(b"123456789abcdef0123456789abcdef", 16).unwrap();
        let inv = inverse(&d, &n);
        assert_eq!((inv * d) % n, BigUint::one());
    }
}
