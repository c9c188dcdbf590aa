//! Power series for J_n and I_n at small argument.
//!
//! `(x/2)^n / n! · Σ (∓u)^k n! / (k! (n+k)!)` with `u = (x/2)²`, the sign
//! negative for J and positive for I. Each term is built from the previous
//! one, so no factorial larger than `n!` is ever formed.

use crate::algo::constants::MAX_SERIES_TERMS;
use crate::machine::BesselFloat;
use crate::types::Family;

/// Sum the order-`n` series at `x`, given `1/n!` for the target type.
///
/// Converges to working precision in well under [`MAX_SERIES_TERMS`]
/// terms for `x < 2`; callers stay in that range.
pub(crate) fn power_series<T: BesselFloat>(family: Family, n: u32, x: T, inv_factorial: T) -> T {
    let h = x * T::from_f64(0.5);
    let u = match family {
        Family::Ordinary => -(h * h),
        Family::Modified => h * h,
    };
    let order = T::from_f64(f64::from(n));
    let mut term = T::one();
    let mut sum = T::one();
    for k in 1..=MAX_SERIES_TERMS {
        let k = T::from_f64(k as f64);
        term = term * u / (k * (order + k));
        sum = sum + term;
        if term.abs() <= T::MACH_EPSILON * sum.abs() {
            break;
        }
    }
    h.powi(n as i32) * inv_factorial * sum
}
