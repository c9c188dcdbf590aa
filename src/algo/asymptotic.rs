//! Large-argument Hankel expansions for order n.
//!
//! With `μ = 4n²` the terms are `t_0 = 1`,
//! `t_k = t_{k-1}·(μ - (2k-1)²)/(8kx)`. J sums them into the phase pair
//! `P = t_0 - t_2 + t_4 - …`, `Q = t_1 - t_3 + …`; the scaled modified
//! function takes the plain alternating sum.

use crate::algo::constants::{FRAC_2_PI, MAX_SERIES_TERMS, PI};
use crate::machine::BesselFloat;
use crate::utils::phase;

/// Walk the Hankel terms, handing each `(k, t_k)` to `accept` until it
/// reports convergence or the terms start to grow.
fn hankel_terms<T: BesselFloat>(n: u32, x: T, mut accept: impl FnMut(usize, T) -> bool) {
    let order = T::from_f64(f64::from(n));
    let mu = T::from_f64(4.0) * order * order;
    let eight_x = T::from_f64(8.0) * x;
    let mut term = T::one();
    if accept(0, term) {
        return;
    }
    for k in 1..MAX_SERIES_TERMS {
        let odd = T::from_f64((2 * k - 1) as f64);
        let next = term * (mu - odd * odd) / (T::from_f64(k as f64) * eight_x);
        // Past the smallest term the expansion diverges.
        if k > 1 && next.abs() > term.abs() {
            return;
        }
        term = next;
        if accept(k, term) {
            return;
        }
    }
}

/// J_n(x) from the Hankel expansion; accurate for `x ≥ max(n², 25)`.
pub(crate) fn ordinary_asymptotic<T: BesselFloat>(n: u32, x: T) -> T {
    let mut p = T::zero();
    let mut q = T::zero();
    hankel_terms(n, x, |k, t| {
        match k % 4 {
            0 => p = p + t,
            1 => q = q + t,
            2 => p = p - t,
            _ => q = q - t,
        }
        k > 1 && t.abs() < T::MACH_EPSILON * (p.abs() + q.abs())
    });
    let (c, s) = phase(x, 2 * n + 1);
    (T::from_f64(FRAC_2_PI) / x).sqrt() * (p * c - q * s)
}

/// `I_n(x)·e^{-x}` from the Hankel expansion; accurate for
/// `x ≥ max(n²/2, 24)`.
pub(crate) fn scaled_modified_asymptotic<T: BesselFloat>(n: u32, x: T) -> T {
    let mut sum = T::zero();
    hankel_terms(n, x, |k, t| {
        if k % 2 == 0 {
            sum = sum + t;
        } else {
            sum = sum - t;
        }
        t.abs() < T::MACH_EPSILON * sum.abs()
    });
    sum / (T::from_f64(2.0 * PI) * x).sqrt()
}
