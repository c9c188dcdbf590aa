//! Machine constants and the `BesselFloat` trait.
//!
//! The rescale bounds are the largest magnitudes a recurrence sweep may
//! reach before both running values are scaled down together.

use num_traits::Float;

/// Floating-point trait for Bessel function computation.
///
/// Implemented for `f64` and `f32`. Provides machine constants and the
/// overflow thresholds used by the recurrence and scaling code.
pub trait BesselFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// Every coefficient table is stored as f64 and passes through here.
    fn from_f64(x: f64) -> Self;

    /// Largest argument for which `exp(x)` is finite, ln(MACH_HUGE) rounded down.
    fn exp_limit() -> Self;

    /// Magnitude bound that triggers a rescale during a forward sweep.
    fn rescale_bound() -> Self;

    /// Magnitude bound that triggers a rescale during a Miller sweep.
    ///
    /// Larger than [`rescale_bound`](Self::rescale_bound): the Miller
    /// sweep only needs to keep one step of headroom below MACH_HUGE.
    fn miller_bound() -> Self;

    /// Fused multiply-add: `self * a + b`.
    ///
    /// With `std` enabled, uses hardware FMA via the C library `fma()`.
    /// Without `std`, falls back to plain `self * a + b` to avoid the
    /// slow software FMA in libm.
    ///
    /// Named `fma` to avoid ambiguity with [`Float::mul_add`].
    fn fma(self, a: Self, b: Self) -> Self;
}

impl BesselFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn exp_limit() -> f64 {
        709.782712893384
    }
    #[inline]
    fn rescale_bound() -> f64 {
        1.0e200
    }
    #[inline]
    fn miller_bound() -> f64 {
        1.0e280
    }

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        self * a + b
    }
}

impl BesselFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn exp_limit() -> f32 {
        88.72
    }
    #[inline]
    fn rescale_bound() -> f32 {
        1.0e20
    }
    #[inline]
    fn miller_bound() -> f32 {
        1.0e30
    }

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        self * a + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_limit_is_last_finite_exponent() {
        assert!(f64::exp_limit().exp().is_finite());
        assert!((f64::exp_limit() + 1e-9).exp().is_infinite());
        assert!(f32::exp_limit().exp().is_finite());
    }

    #[test]
    fn rescale_bounds_leave_headroom() {
        // One recurrence step multiplies by at most 2n/x ~ 1e5 for the orders
        // and arguments this crate handles.
        assert!(f64::miller_bound() * 1e20 < f64::MACH_HUGE);
        assert!(f64::rescale_bound() < f64::miller_bound());
        assert!(f32::miller_bound() * 1e5 < f32::MACH_HUGE);
    }
}
