use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::debug;

use crate::error::ComplexError;
use crate::polar::{normalize_angle, PolarForm};
use crate::tolerance::Tolerance;

/// A complex number represented as an ordered pair of `f64` components.
///
/// Values are `Copy` and immutable in practice: every operation returns a
/// new `Complex`. The arithmetic is written out by hand from the component
/// formulas rather than delegated to a numeric library.
///
/// Division is the one arithmetic operation that can fail, so there is no
/// `Div` impl; use [`checked_div`](Self::checked_div).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Like [`new`](Self::new) but rejects infinite or NaN components.
    pub fn try_new(re: f64, im: f64) -> crate::Result<Self> {
        if !re.is_finite() || !im.is_finite() {
            return Err(ComplexError::NonFiniteComponent { re, im });
        }
        Ok(Self { re, im })
    }

    /// Build a value from polar coordinates.
    ///
    /// Fails with [`ComplexError::InvalidModulus`] if `modulus` is negative
    /// or NaN.
    pub fn from_polar(modulus: f64, angle: f64) -> crate::Result<Self> {
        PolarForm::new(modulus, angle).to_cartesian()
    }

    /// `true` for `0 + 0i` (either sign of zero).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Distance from the origin, `√(re² + im²)`.
    ///
    /// Computed with `hypot`, so it neither underflows to zero for tiny
    /// non-zero values nor overflows for large finite ones.
    #[inline]
    pub fn modulus(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Complex conjugate: the imaginary part negated.
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Angle from the positive real axis, in radians, within `(-π, π]`.
    ///
    /// Uses the two-argument arctangent so all four quadrants are told
    /// apart. The phase of the origin is undefined; this returns `0.0` for
    /// it, including the signed zeros for which `atan2` would give `±π`.
    pub fn phase(self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        normalize_angle(self.im.atan2(self.re))
    }

    /// Convert to polar form `(modulus, phase)`.
    #[inline]
    pub fn to_polar(self) -> PolarForm {
        PolarForm::new(self.modulus(), self.phase())
    }

    /// Multiply both components by a real scalar.
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }

    /// `self / rhs`, equal to `self · conj(rhs) / |rhs|²`.
    ///
    /// Fails with [`ComplexError::DivisionByZero`] only when `rhs` is
    /// `0 + 0i`. The quotient is evaluated with Smith's method: both
    /// numerator and denominator are divided by the larger divisor
    /// component first, so `|rhs|²` is never formed and cannot underflow
    /// or overflow.
    pub fn checked_div(self, rhs: Self) -> crate::Result<Self> {
        if rhs.is_zero() {
            debug!(re = rhs.re, im = rhs.im, "rejected division by zero");
            return Err(ComplexError::DivisionByZero);
        }
        let Self { re: a, im: b } = self;
        let Self { re: c, im: d } = rhs;
        let quotient = if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Self::new((a + b * r) / den, (b - a * r) / den)
        } else {
            let r = c / d;
            let den = c * r + d;
            Self::new((a * r + b) / den, (b * r - a) / den)
        };
        Ok(quotient)
    }

    /// Multiplicative inverse `1 / self`.
    #[inline]
    pub fn checked_recip(self) -> crate::Result<Self> {
        Self::ONE.checked_div(self)
    }

    /// Comparison within `tol`; see [`Tolerance::eq_complex`].
    #[inline]
    pub fn approx_eq(self, other: Self, tol: &Tolerance) -> bool {
        tol.eq_complex(self, other)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(c: Complex) -> Self {
        (c.re, c.im)
    }
}

// -- Arithmetic operators --

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // (a + bi)(c + di) = (ac − bd) + (ad + bc)i
        let Self { re: a, im: b } = self;
        let Self { re: c, im: d } = rhs;
        Self::new(a * c - b * d, a * d + b * c)
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

/// Scalar multiplication: `Complex * f64`.
impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}
