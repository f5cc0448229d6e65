//! External capabilities: curve arithmetic and randomness
//!
//! The signature core only talks to the traits in `traits`. This module
//! also ships the implementations: named curves on the RustCrypto curve
//! crates, generic short-Weierstrass curves for custom parameters, and
//! OS / seeded / scripted random sources.

pub mod backend;
pub mod errors;
pub mod named;
pub mod point;
pub mod random;
pub mod rustcrypto;
pub mod traits;
pub mod weierstrass;

// Re-export commonly used types for convenience
pub use backend::CurveBackend;
pub use errors::{RandomResult, RandomSourceError};
pub use named::{parse_hex, NamedCurve};
pub use point::{CurveParams, Point};
pub use random::{ScriptedRandom, SeededRandom, SystemRandom};
pub use rustcrypto::{P224Curve, P256Curve, P384Curve, P521Curve, PrimeOrderCurve, Secp256k1Curve};
pub use traits::{CurveArithmetic, RandomSource};
pub use weierstrass::WeierstrassCurve;
