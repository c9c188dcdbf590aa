//! Order-0 and order-1 kernels of the ordinary Bessel functions J and Y.
//!
//! For `x < 2` the power series in `u = (x/2)²` is summed from fixed
//! tables; Y adds the logarithmic term `(γ + ln(x/2))·J` to its harmonic
//! companion series. For `x ≥ 2` the fitted auxiliary functions `P`, `Q`
//! of the Hankel expansion are combined with the trigonometric envelope.
//!
//! The kernels are stateless, so every higher-order engine shares them.

use crate::algo::constants::{EULER, FRAC_1_PI, FRAC_2_PI, SERIES_LIMIT};
use crate::algo::tables::{
    J0_SERIES, J1_SERIES, P0_CHEB, P1_CHEB, Q0_CHEB, Q1_CHEB, Y0_SERIES, Y1_SERIES,
};
use crate::machine::BesselFloat;
use crate::utils::{chebyshev, even_odd_horner, phase};

/// Fitted Hankel auxiliary functions `(P, Q)` at `x ≥ 2`.
#[inline]
fn hankel_pq<T: BesselFloat>(x: T, p_table: &[f64], q_table: &[f64]) -> (T, T) {
    let s = T::from_f64(2.0) / x;
    let t = s + s - T::one();
    (chebyshev(p_table, t), s * chebyshev(q_table, t))
}

/// `√(2/(πx))`, the amplitude of the oscillatory envelope.
#[inline]
fn envelope<T: BesselFloat>(x: T) -> T {
    (T::from_f64(FRAC_2_PI) / x).sqrt()
}

/// J0(x) for x ≥ 0; NaN otherwise.
pub(crate) fn j0<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    if x.is_nan() || x < zero {
        return T::nan();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        return even_odd_horner(&J0_SERIES, h * h);
    }
    if x.is_infinite() {
        return zero;
    }
    let (p, q) = hankel_pq(x, &P0_CHEB, &Q0_CHEB);
    let (c, s) = phase(x, 1);
    envelope(x) * (p * c - q * s)
}

/// J1(x) for x ≥ 0; NaN otherwise.
pub(crate) fn j1<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    if x.is_nan() || x < zero {
        return T::nan();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        return h * even_odd_horner(&J1_SERIES, h * h);
    }
    if x.is_infinite() {
        return zero;
    }
    let (p, q) = hankel_pq(x, &P1_CHEB, &Q1_CHEB);
    let (c, s) = phase(x, 3);
    envelope(x) * (p * c - q * s)
}

/// Y0(x) for x ≥ 0 (−∞ at the origin); NaN otherwise.
pub(crate) fn y0<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    if x.is_nan() || x < zero {
        return T::nan();
    }
    if x == zero {
        return T::neg_infinity();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        let u = h * h;
        let log_term = h.ln() + T::from_f64(EULER);
        let j = even_odd_horner(&J0_SERIES, u);
        let harmonic = u * even_odd_horner(&Y0_SERIES, u);
        return T::from_f64(FRAC_2_PI) * log_term.fma(j, harmonic);
    }
    if x.is_infinite() {
        return zero;
    }
    let (p, q) = hankel_pq(x, &P0_CHEB, &Q0_CHEB);
    let (c, s) = phase(x, 1);
    envelope(x) * (p * s + q * c)
}

/// Y1(x) for x ≥ 0 (−∞ at the origin); NaN otherwise.
pub(crate) fn y1<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    if x.is_nan() || x < zero {
        return T::nan();
    }
    if x == zero {
        return T::neg_infinity();
    }
    if x < T::from_f64(SERIES_LIMIT) {
        let h = x * T::from_f64(0.5);
        let u = h * h;
        let log_term = h.ln() + T::from_f64(EULER);
        let j = h * even_odd_horner(&J1_SERIES, u);
        let harmonic = h * T::from_f64(FRAC_1_PI) * even_odd_horner(&Y1_SERIES, u);
        return T::from_f64(FRAC_2_PI) * (log_term * j - x.recip()) - harmonic;
    }
    if x.is_infinite() {
        return zero;
    }
    let (p, q) = hankel_pq(x, &P1_CHEB, &Q1_CHEB);
    let (c, s) = phase(x, 3);
    envelope(x) * (p * s + q * c)
}
