//! Modular arithmetic helpers over `BigUint`
//!
//! Operands are expected to be already reduced below the modulus unless
//! noted otherwise. A zero modulus panics inside `num_bigint`, so callers
//! must never pass one.

use num_bigint::BigUint;
use num_traits::Zero;

/// `(a + b) mod m`
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, for `a, b` of any size
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// `(a * b) mod m`
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// `base^exponent mod m`
pub fn mod_pow(base: &BigUint, exponent: &BigUint, m: &BigUint) -> BigUint {
    base.modpow(exponent, m)
}

/// True when `0 < value < order`
pub fn is_in_scalar_range(value: &BigUint, order: &BigUint) -> bool {
    !value.is_zero() && value < order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_mod_add_wraps() {
        assert_eq!(mod_add(&big(10), &big(5), &big(13)), big(2));
        assert_eq!(mod_add(&big(0), &big(0), &big(13)), big(0));
    }

    #[test]
    fn test_mod_sub_borrows() {
        assert_eq!(mod_sub(&big(3), &big(5), &big(13)), big(11));
        assert_eq!(mod_sub(&big(5), &big(3), &big(13)), big(2));
        assert_eq!(mod_sub(&big(4), &big(4), &big(13)), big(0));
    }

    #[test]
    fn test_mod_sub_unreduced_operands() {
        // 30 - 4 = 26 = 0 mod 13
        assert_eq!(mod_sub(&big(30), &big(4), &big(13)), big(0));
        // 1 - 27 = -26 = 0 mod 13
        assert_eq!(mod_sub(&big(1), &big(27), &big(13)), big(0));
    }

    #[test]
    fn test_mod_mul() {
        assert_eq!(mod_mul(&big(5), &big(8), &big(13)), big(1));
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(&big(2), &big(10), &big(1000)), big(24));
        assert_eq!(mod_pow(&big(7), &big(0), &big(13)), big(1));
    }

    #[test]
    fn test_scalar_range_bounds() {
        let n = big(13);
        assert!(!is_in_scalar_range(&big(0), &n));
        assert!(is_in_scalar_range(&big(1), &n));
        assert!(is_in_scalar_range(&big(12), &n));
        assert!(!is_in_scalar_range(&big(13), &n));
        assert!(!is_in_scalar_range(&big(14), &n));
    }
}
