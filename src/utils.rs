//! Polynomial evaluation and overflow-safe scaling helpers.

use crate::algo::constants::{EXP_SHIFT, FRAC_1_SQRT_2};
use crate::machine::BesselFloat;

/// Evaluate `Σ c[k]·u^k`, accumulating even and odd powers separately.
///
/// Both halves run Horner in `u²` and are joined as `E(u²) + u·O(u²)`,
/// which halves the dependency chain and keeps rounding error below the
/// plain Horner scheme for the alternating series used at small x.
#[inline]
pub(crate) fn even_odd_horner<T: BesselFloat>(c: &[f64], u: T) -> T {
    let u2 = u * u;
    let mut even = T::zero();
    let mut odd = T::zero();
    for pair in c.chunks(2).rev() {
        even = even.fma(u2, T::from_f64(pair[0]));
        if let Some(&c_odd) = pair.get(1) {
            odd = odd.fma(u2, T::from_f64(c_odd));
        }
    }
    u.fma(odd, even)
}

/// Evaluate the Chebyshev sum `Σ c[k]·T_k(t)` by Clenshaw recurrence.
///
/// Tables store `c[0]` already halved, so no special case is needed for
/// the leading term. `t` must lie in `[-1, 1]`.
#[inline]
pub(crate) fn chebyshev<T: BesselFloat>(c: &[f64], t: T) -> T {
    let two_t = t + t;
    let mut b1 = T::zero();
    let mut b2 = T::zero();
    for &ck in c[1..].iter().rev() {
        let b0 = two_t.fma(b1, T::from_f64(ck)) - b2;
        b2 = b1;
        b1 = b0;
    }
    t.fma(b1, T::from_f64(c[0])) - b2
}

/// Compute `v·exp(x)` for `v ≥ 0` without overflowing early.
///
/// Past the direct-exp limit the exponent is split as
/// `exp(x - shift)·exp(shift)` and the small factor `v` is applied first,
/// so the result is finite whenever the true product is.
#[inline]
pub(crate) fn scale_by_exp<T: BesselFloat>(v: T, x: T) -> T {
    if v == T::zero() {
        return v;
    }
    if x <= T::exp_limit() {
        return v * x.exp();
    }
    let shift = T::from_f64(EXP_SHIFT);
    (v * (x - shift).exp()) * shift.exp()
}

/// Return `(cos(x - m·π/4), sin(x - m·π/4))` for odd `m`.
///
/// Built from `cos x` and `sin x` so that no rounding is introduced by
/// subtracting the phase from a large argument.
#[inline]
pub(crate) fn phase<T: BesselFloat>(x: T, m: u32) -> (T, T) {
    let (s, c) = x.sin_cos();
    let r = T::from_f64(FRAC_1_SQRT_2);
    let one = T::one();
    // Signs of (√2·cos, √2·sin) of m·π/4 for m ≡ 1, 3, 5, 7 (mod 8).
    let (ca, sa) = match m % 8 {
        1 => (one, one),
        3 => (-one, one),
        5 => (-one, -one),
        _ => (one, -one),
    };
    ((c * ca + s * sa) * r, (s * ca - c * sa) * r)
}
