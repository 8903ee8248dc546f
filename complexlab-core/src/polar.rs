use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use tracing::debug;

use crate::complex::Complex;
use crate::error::ComplexError;

/// A complex number in polar coordinates.
///
/// `angle` is in radians and may be any real number; angles produced by
/// [`Complex::to_polar`] are principal values in `(-π, π]`. `modulus` must
/// be non-negative for the value to convert back to cartesian form, but it
/// is not validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarForm {
    /// Distance from the origin.
    pub modulus: f64,

    /// Angle from the positive real axis, in radians.
    pub angle: f64,
}

impl PolarForm {
    #[inline]
    pub fn new(modulus: f64, angle: f64) -> Self {
        Self { modulus, angle }
    }

    /// Convert to cartesian form `(r·cos θ, r·sin θ)`.
    ///
    /// Fails with [`ComplexError::InvalidModulus`] if the modulus is
    /// negative or NaN.
    pub fn to_cartesian(self) -> crate::Result<Complex> {
        if self.modulus.is_nan() || self.modulus < 0.0 {
            debug!(modulus = self.modulus, "rejected polar form with invalid modulus");
            return Err(ComplexError::InvalidModulus(self.modulus));
        }
        let (sin, cos) = self.angle.sin_cos();
        Ok(Complex::new(self.modulus * cos, self.modulus * sin))
    }
}

impl From<Complex> for PolarForm {
    #[inline]
    fn from(c: Complex) -> Self {
        c.to_polar()
    }
}

impl std::fmt::Display for PolarForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}∠{}", self.modulus, self.angle)
    }
}

/// Map an angle to its principal value in `(-π, π]`.
///
/// Non-finite input is returned unchanged.
pub fn normalize_angle(theta: f64) -> f64 {
    if !theta.is_finite() {
        return theta;
    }
    if theta > -PI && theta <= PI {
        return theta;
    }
    // rem_euclid lands in [0, 2π); shift so -π folds onto π.
    let wrapped = (theta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
