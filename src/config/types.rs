//! Configuration types loaded from YAML
//!
//! Selects the curve (built-in name or raw custom parameters) and the
//! signing retry budget.

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::adapters::point::Point;
use crate::adapters::backend::CurveBackend;
use crate::adapters::named::{parse_hex, NamedCurve};
use crate::adapters::weierstrass::WeierstrassCurve;
use crate::config::constants::{max_sign_attempts, MAX_SIGN_ATTEMPTS_LIMIT};
use crate::error::EcdsaError;

// ============================================================================
// Enums
// ============================================================================

/// Built-in curves selectable by name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurveName {
    P224,
    #[default]
    P256,
    P384,
    P521,
    Secp256k1,
}

impl std::fmt::Display for CurveName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveName::P224 => write!(f, "p224"),
            CurveName::P256 => write!(f, "p256"),
            CurveName::P384 => write!(f, "p384"),
            CurveName::P521 => write!(f, "p521"),
            CurveName::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

impl From<CurveName> for NamedCurve {
    fn from(name: CurveName) -> Self {
        match name {
            CurveName::P224 => NamedCurve::P224,
            CurveName::P256 => NamedCurve::P256,
            CurveName::P384 => NamedCurve::P384,
            CurveName::P521 => NamedCurve::P521,
            CurveName::Secp256k1 => NamedCurve::Secp256k1,
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Raw short-Weierstrass parameters, all hex encoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomCurveConfig {
    /// Name used in log fields
    pub name: String,
    /// Field prime
    pub p: String,
    /// Curve coefficient a
    pub a: String,
    /// Curve coefficient b
    pub b: String,
    /// Group order
    pub n: String,
    /// Base point x
    pub gx: String,
    /// Base point y
    pub gy: String,
}

impl CustomCurveConfig {
    /// Parse the hex fields into a curve.
    ///
    /// Only rejects unparseable values and moduli below 2, which would make
    /// the arithmetic panic. The parameters themselves are trusted.
    pub fn build(&self) -> Result<WeierstrassCurve, EcdsaError> {
        let field = |label: &str, value: &str| {
            parse_hex(value).ok_or_else(|| {
                EcdsaError::Config(format!(
                    "Custom curve '{}': {} is not valid hex (got '{}')",
                    self.name, label, value
                ))
            })
        };

        let p = field("p", &self.p)?;
        let n = field("n", &self.n)?;
        for (label, modulus) in [("p", &p), ("n", &n)] {
            if modulus <= &BigUint::one() {
                return Err(EcdsaError::Config(format!(
                    "Custom curve '{}': {} must be at least 2",
                    self.name, label
                )));
            }
        }

        let base_point = Point::new(field("gx", &self.gx)?, field("gy", &self.gy)?);
        Ok(WeierstrassCurve::new(
            self.name.clone(),
            p,
            field("a", &self.a)?,
            field("b", &self.b)?,
            n,
            base_point,
        ))
    }
}

/// Signing behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigningConfig {
    /// Nonce draws per signature before reporting a degenerate signature
    #[serde(default = "max_sign_attempts")]
    pub max_attempts: u32,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            max_attempts: max_sign_attempts(),
        }
    }
}

impl SigningConfig {
    pub fn validate(&self) -> Result<(), EcdsaError> {
        if self.max_attempts == 0 || self.max_attempts > MAX_SIGN_ATTEMPTS_LIMIT {
            return Err(EcdsaError::Config(format!(
                "signing.max_attempts must be in 1..={} (got {})",
                MAX_SIGN_ATTEMPTS_LIMIT, self.max_attempts
            )));
        }
        Ok(())
    }
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Built-in curve, ignored when `custom_curve` is set
    #[serde(default)]
    pub curve: CurveName,
    /// Explicit curve parameters
    #[serde(default)]
    pub custom_curve: Option<CustomCurveConfig>,
    #[serde(default)]
    pub signing: SigningConfig,
}

impl AppConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<(), EcdsaError> {
        self.signing.validate()?;
        if let Some(custom) = &self.custom_curve {
            if custom.name.trim().is_empty() {
                return Err(EcdsaError::Config(
                    "Custom curve name cannot be empty".to_string(),
                ));
            }
            custom.build()?;
        }
        Ok(())
    }

    /// Curve selected by this configuration. Named curves run on the
    /// RustCrypto backends, custom parameters on generic arithmetic.
    pub fn build_curve(&self) -> Result<CurveBackend, EcdsaError> {
        match &self.custom_curve {
            Some(custom) => Ok(custom.build()?.into()),
            None => Ok(CurveBackend::named(self.curve.into())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::traits::CurveArithmetic;

    fn toy_custom() -> CustomCurveConfig {
        CustomCurveConfig {
            name: "toy".to_string(),
            p: "3f1".to_string(),
            a: "1".to_string(),
            b: "f".to_string(),
            n: "40f".to_string(),
            gx: "0".to_string(),
            gy: "20".to_string(),
        }
    }

    #[test]
    fn test_curve_name_display() {
        assert_eq!(CurveName::P256.to_string(), "p256");
        assert_eq!(CurveName::Secp256k1.to_string(), "secp256k1");
    }

    #[test]
    fn test_default_curve_is_p256() {
        assert_eq!(CurveName::default(), CurveName::P256);
    }

    #[test]
    fn test_named_curve_conversion() {
        let curve = AppConfig {
            curve: CurveName::Secp256k1,
            custom_curve: None,
            signing: SigningConfig { max_attempts: 8 },
        }
        .build_curve()
        .unwrap();
        assert!(matches!(curve, CurveBackend::Secp256k1(_)));
        assert_eq!(curve.params().name, "secp256k1");
    }

    #[test]
    fn test_custom_curve_builds() {
        let curve = toy_custom().build().unwrap();
        assert_eq!(curve.params().prime_modulus, BigUint::from(1009u32));
        assert_eq!(curve.params().order, BigUint::from(1039u32));
        assert!(curve.contains(&curve.params().base_point));
    }

    #[test]
    fn test_custom_curve_bad_hex() {
        let mut custom = toy_custom();
        custom.b = "xyz".to_string();
        let err = custom.build().unwrap_err();
        assert!(err.to_string().contains("b is not valid hex"), "Got: {}", err);
    }

    #[test]
    fn test_custom_curve_rejects_tiny_modulus() {
        let mut custom = toy_custom();
        custom.n = "1".to_string();
        let err = custom.build().unwrap_err();
        assert!(err.to_string().contains("n must be at least 2"), "Got: {}", err);
    }

    #[test]
    fn test_custom_curve_overrides_named() {
        let config = AppConfig {
            curve: CurveName::P384,
            custom_curve: Some(toy_custom()),
            signing: SigningConfig { max_attempts: 8 },
        };
        let curve = config.build_curve().unwrap();
        assert!(matches!(curve, CurveBackend::Custom(_)));
        assert_eq!(curve.params().name, "toy");
    }

    #[test]
    fn test_max_attempts_bounds() {
        assert!(SigningConfig { max_attempts: 0 }.validate().is_err());
        assert!(SigningConfig { max_attempts: 1 }.validate().is_ok());
        assert!(SigningConfig { max_attempts: MAX_SIGN_ATTEMPTS_LIMIT }.validate().is_ok());
        assert!(SigningConfig { max_attempts: MAX_SIGN_ATTEMPTS_LIMIT + 1 }.validate().is_err());
    }

    #[test]
    fn test_empty_custom_name_rejected() {
        let mut custom = toy_custom();
        custom.name = "  ".to_string();
        let config = AppConfig {
            curve: CurveName::P256,
            custom_curve: Some(custom),
            signing: SigningConfig { max_attempts: 8 },
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("name cannot be empty"), "Got: {}", err);
    }
}
