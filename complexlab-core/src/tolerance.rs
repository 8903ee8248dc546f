use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::ComplexError;

/// Numeric tolerance for approximate equality of computed values.
///
/// Two reals `a` and `b` compare equal when
/// `|a − b| ≤ max(abs, rel · max(|a|, |b|))`. The absolute bound covers
/// values near zero, where a relative bound collapses; the relative bound
/// covers large magnitudes. Complex values are compared the same way
/// using the modulus of their difference and the larger of their moduli.
///
/// Both bounds are validated on construction and again on deserialization,
/// so a tolerance read from a settings file is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerance {
    /// Absolute bound on the difference.
    pub abs: f64,

    /// Bound on the difference relative to the larger magnitude.
    pub rel: f64,
}

impl<'de> Deserialize<'de> for Tolerance {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            abs: f64,
            rel: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.abs, raw.rel).map_err(serde::de::Error::custom)
    }
}

impl Tolerance {
    pub const DEFAULT_ABS: f64 = 1e-9;
    pub const DEFAULT_REL: f64 = 1e-9;

    pub const DEFAULT: Self = Self {
        abs: Self::DEFAULT_ABS,
        rel: Self::DEFAULT_REL,
    };

    pub fn new(abs: f64, rel: f64) -> crate::Result<Self> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(abs) || !valid(rel) {
            return Err(ComplexError::InvalidTolerance { abs, rel });
        }
        Ok(Self { abs, rel })
    }

    /// Purely absolute tolerance.
    pub fn absolute(abs: f64) -> crate::Result<Self> {
        Self::new(abs, 0.0)
    }

    /// Whether two reals are equal within this tolerance.
    ///
    /// NaN never compares equal. Equal infinities do.
    pub fn eq_f64(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        self.within((a - b).abs(), a.abs().max(b.abs()))
    }

    /// Whether two complex values are equal within this tolerance.
    ///
    /// The error is measured as `|a − b|` against the larger modulus, so a
    /// component that is tiny next to the other one (e.g. `r·cos(π/2)`
    /// after a polar round trip) does not need to match on its own scale.
    pub fn eq_complex(&self, a: Complex, b: Complex) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        self.within((a - b).modulus(), a.modulus().max(b.modulus()))
    }

    #[inline]
    fn within(&self, diff: f64, scale: f64) -> bool {
        diff <= self.abs.max(self.rel * scale)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
