//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations needed by the rope model
/// and the analytical solvers.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Machine epsilon.
    fn epsilon() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Natural exponential (e^self).
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// Inverse hyperbolic cosine. NaN below 1.
    fn acosh(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// `false` for NaN and infinities.
    fn is_finite(self) -> bool;
    /// Convert from f32.
    fn from_f32(v: f32) -> Self;
    /// Convert from f64 (tolerances and physical constants).
    fn from_f64(v: f64) -> Self;
    /// Widen to f64, used for diagnostics.
    fn to_f64(self) -> f64;

    /// Convert a count or index.
    fn from_usize(n: usize) -> Self {
        Self::from_f64(n as f64)
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn epsilon() -> Self { f32::EPSILON }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn exp(self) -> Self { libm::expf(self) }
    fn ln(self) -> Self { libm::logf(self) }
    fn sinh(self) -> Self { libm::sinhf(self) }
    fn cosh(self) -> Self { libm::coshf(self) }
    fn acosh(self) -> Self { libm::acoshf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn to_f64(self) -> f64 { self as f64 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn epsilon() -> Self { f64::EPSILON }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn exp(self) -> Self { libm::exp(self) }
    fn ln(self) -> Self { libm::log(self) }
    fn sinh(self) -> Self { libm::sinh(self) }
    fn cosh(self) -> Self { libm::cosh(self) }
    fn acosh(self) -> Self { libm::acosh(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_f64(v: f64) -> Self { v }
    fn to_f64(self) -> f64 { self }
}
