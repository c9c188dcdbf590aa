//! Order-0 and order-1 kernels of the modified Bessel functions I and K.
//!
//! Below `x = 2` both families are summed from the `(x/2)²` power series,
//! K with the logarithmic companion term. Above it, I is read from fits of
//! `I·e^{-x}` on `[2, 6)`, `[6, 12)`, `[12, 24)` and from a fit of
//! `√x·I·e^{-x}` in `48/x` beyond 24; K from a single fit of `√x·K·e^{x}`.
//! The unscaled forms are rebuilt from the scaled ones.

use crate::algo::constants::{EULER, MODIFIED_ASYMPTOTIC_FLOOR, SERIES_LIMIT};
use crate::algo::tables::{
    I0_CHEB_A, I0_CHEB_B, I0_CHEB_C, I0_CHEB_D, I0_SERIES, I1_CHEB_A, I1_CHEB_B, I1_CHEB_C,
    I1_CHEB_D, I1_SERIES, K0_CHEB, K0_SERIES, K1_CHEB, K1_SERIES,
};
use crate::machine::BesselFloat;
use crate::types::Scaling;
use crate::utils::{chebyshev, even_odd_horner, scale_by_exp};

/// Chebyshev fits of `I·e^{-x}` for one order, one table per sub-interval.
struct IFits {
    near: &'static [f64],
    middle: &'static [f64],
    far: &'static [f64],
    asymptotic: &'static [f64],
}

const I0_FITS: IFits = IFits {
    near: &I0_CHEB_A,
    middle: &I0_CHEB_B,
    far: &I0_CHEB_C,
    asymptotic: &I0_CHEB_D,
};

const I1_FITS: IFits = IFits {
    near: &I1_CHEB_A,
    middle: &I1_CHEB_B,
    far: &I1_CHEB_C,
    asymptotic: &I1_CHEB_D,
};

/// `I·e^{-x}` for finite `x ≥ 2`.
fn scaled_i_fit<T: BesselFloat>(x: T, fits: &IFits) -> T {
    if x < T::from_f64(6.0) {
        return chebyshev(fits.near, (x - T::from_f64(4.0)) * T::from_f64(0.5));
    }
    if x < T::from_f64(12.0) {
        return chebyshev(fits.middle, (x - T::from_f64(9.0)) / T::from_f64(3.0));
    }
    if x < T::from_f64(MODIFIED_ASYMPTOTIC_FLOOR) {
        return chebyshev(fits.far, (x - T::from_f64(18.0)) / T::from_f64(6.0));
    }
    let s = T::from_f64(MODIFIED_ASYMPTOTIC_FLOOR) / x;
    chebyshev(fits.asymptotic, s + s - T::one()) / x.sqrt()
}

/// Shared tail of `i0`/`i1` above the series region.
fn i_above_series<T: BesselFloat>(x: T, fits: &IFits, scaling: Scaling) -> T {
    if x.is_infinite() {
        return match scaling {
            Scaling::Unscaled => T::infinity(),
            Scaling::Exponential => T::zero(),
        };
    }
    let scaled = scaled_i_fit(x, fits);
    match scaling {
        Scaling::Unscaled => scale_by_exp(scaled, x),
        Scaling::Exponential => scaled,
    }
}

/// `√x·K·e^{x}` fit for `x ≥ 2`, returned in the requested form.
fn k_above_series<T: BesselFloat>(x: T, table: &[f64], scaling: Scaling) -> T {
    if x.is_infinite() {
        return T::zero();
    }
    let s = T::from_f64(2.0) / x;
    let scaled = chebyshev(table, s + s - T::one()) / x.sqrt();
    match scaling {
        Scaling::Unscaled => scaled * (-x).exp(),
        Scaling::Exponential => scaled,
    }
}

/// Multiply a raw small-x value by `e^{∓x}` when the scaled form is asked for.
#[inline]
fn apply_small_scaling<T: BesselFloat>(raw: T, exponent: T, scaling: Scaling) -> T {
    match scaling {
        Scaling::Unscaled => raw,
        Scaling::Exponential => raw * exponent.exp(),
    }
}

/// I0(x), or `I0(x)·e^{-x}` with [`Scaling::Exponential`]. NaN for x < 0.
pub(crate) fn i0<T: BesselFloat>(x: T, scaling: Scaling) -> T {
    if x.is_nan() || x < T::zero() {
        return T::nan();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        return apply_small_scaling(even_odd_horner(&I0_SERIES, h * h), -x, scaling);
    }
    i_above_series(x, &I0_FITS, scaling)
}

/// I1(x), or `I1(x)·e^{-x}` with [`Scaling::Exponential`]. NaN for x < 0.
pub(crate) fn i1<T: BesselFloat>(x: T, scaling: Scaling) -> T {
    if x.is_nan() || x < T::zero() {
        return T::nan();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        return apply_small_scaling(h * even_odd_horner(&I1_SERIES, h * h), -x, scaling);
    }
    i_above_series(x, &I1_FITS, scaling)
}

/// K0(x), or `K0(x)·e^{x}` with [`Scaling::Exponential`]. +∞ at the origin.
pub(crate) fn k0<T: BesselFloat>(x: T, scaling: Scaling) -> T {
    if x.is_nan() || x < T::zero() {
        return T::nan();
    }
    if x == T::zero() {
        return T::infinity();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        let u = h * h;
        let log_term = h.ln() + T::from_f64(EULER);
        let i = even_odd_horner(&I0_SERIES, u);
        let harmonic = u * even_odd_horner(&K0_SERIES, u);
        return apply_small_scaling(harmonic - log_term * i, x, scaling);
    }
    k_above_series(x, &K0_CHEB, scaling)
}

/// K1(x), or `K1(x)·e^{x}` with [`Scaling::Exponential`]. +∞ at the origin.
pub(crate) fn k1<T: BesselFloat>(x: T, scaling: Scaling) -> T {
    if x.is_nan() || x < T::zero() {
        return T::nan();
    }
    if x == T::zero() {
        return T::infinity();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        let u = h * h;
        let log_term = h.ln() + T::from_f64(EULER);
        let i = h * even_odd_horner(&I1_SERIES, u);
        let harmonic = h * T::from_f64(0.5) * even_odd_horner(&K1_SERIES, u);
        let raw = log_term.fma(i, x.recip()) - harmonic;
        return apply_small_scaling(raw, x, scaling);
    }
    k_above_series(x, &K1_CHEB, scaling)
}

#[cfg(test)]
mod tests {
    use super::*;

    const U: Scaling = Scaling::Unscaled;
    const E: Scaling = Scaling::Exponential;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn origin_values() {
        assert_eq!(i0(0.0_f64, U), 1.0);
        assert_eq!(i1(0.0_f64, U), 0.0);
        assert_eq!(i0(0.0_f64, E), 1.0);
        assert_eq!(k0(0.0_f64, U), f64::INFINITY);
        assert_eq!(k1(0.0_f64, E), f64::INFINITY);
    }

    #[test]
    fn infinity_limits() {
        assert_eq!(i0(f64::INFINITY, U), f64::INFINITY);
        assert_eq!(i1(f64::INFINITY, U), f64::INFINITY);
        assert_eq!(i0(f64::INFINITY, E), 0.0);
        assert_eq!(i1(f64::INFINITY, E), 0.0);
        for s in [U, E] {
            assert_eq!(k0(f64::INFINITY, s), 0.0);
            assert_eq!(k1(f64::INFINITY, s), 0.0);
        }
    }

    #[test]
    fn invalid_arguments_give_nan() {
        for s in [U, E] {
            for f in [i0::<f64>, i1::<f64>, k0::<f64>, k1::<f64>] {
                assert!(f(-2.0, s).is_nan());
                assert!(f(f64::NAN, s).is_nan());
            }
        }
    }

    #[test]
    fn reference_values() {
        // mpmath, 30 digits
        assert!(rel(i0(1.0_f64, U), 1.2660658777520083356) < 1e-15);
        assert!(rel(k0(1.0_f64, U), 0.42102443824070833334) < 1e-14);
        assert!(rel(i1(0.5_f64, U), 0.25789430539089631636) < 1e-15);
        assert!(rel(k1(0.5_f64, U), 1.6564411200033008937) < 1e-14);
        assert!(rel(i0(5.0_f64, U), 27.239871823604446895) < 1e-14);
        assert!(rel(i1(10.0_f64, E), 0.12126268138445551872) < 1e-14);
        assert!(rel(i0(20.0_f64, E), 0.089780311884826021596) < 1e-14);
        assert!(rel(k0(10.0_f64, E), 0.39163193443659866573) < 1e-14);
        assert!(rel(k1(3.0_f64, U), 0.040156431128194184377) < 1e-14);
        assert!(rel(i1(50.0_f64, E), 0.055993123892895399644) < 1e-14);
    }

    #[test]
    fn unscaled_i_survives_past_exp_limit() {
        // I0(713) ≈ 6.705e307 although e^713 overflows.
        let v = i0(713.0_f64, U);
        assert!(v.is_finite());
        assert!(rel(v, 6.705128263670996e307) < 1e-13);
        assert!(i0(720.0_f64, U).is_infinite());
    }

    #[test]
    fn unscaled_k_underflows_to_zero() {
        assert_eq!(k0(800.0_f64, U), 0.0);
        assert!(k0(800.0_f64, E) > 0.0);
    }

    #[test]
    fn continuous_across_fit_boundaries() {
        for edge in [2.0_f64, 6.0, 12.0, 24.0] {
            let below = edge * (1.0 - 1e-15);
            for f in [i0::<f64>, i1::<f64>, k0::<f64>, k1::<f64>] {
                let (a, b) = (f(below, E), f(edge, E));
                assert!(rel(a, b) < 1e-13, "x = {edge}: {a} vs {b}");
            }
        }
    }
}
