//! Three-term recurrences in the order.
//!
//! `f_{k+1} = (2k/x)·f_k - f_{k-1}` for J and Y, `f_{k+1} = (2k/x)·f_k + f_{k-1}`
//! for K, and the same relation read downward for Miller's algorithm on
//! J and I. Running values are rescaled together whenever they pass a
//! bound, so only their ratio is carried until the final normalization.

use crate::machine::BesselFloat;
use crate::types::Family;

/// Sign of the `f_{k∓1}` term: negative for the ordinary family.
#[inline]
fn neighbour_sign<T: BesselFloat>(family: Family) -> T {
    match family {
        Family::Ordinary => -T::one(),
        Family::Modified => T::one(),
    }
}

/// A value stored as `value · rescale_bound^rescales`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rescaled<T> {
    pub(crate) value: T,
    pub(crate) rescales: u32,
}

impl<T: BesselFloat> Rescaled<T> {
    /// Reapply the stored rescalings, saturating to ±∞.
    pub(crate) fn unscale(self) -> T {
        let bound = T::rescale_bound();
        let mut v = self.value;
        for _ in 0..self.rescales {
            v = v * bound;
            if v.is_infinite() {
                break;
            }
        }
        v
    }

    /// Multiply the mantissa part, leaving the rescale count alone.
    pub(crate) fn scale(self, factor: T) -> Self {
        Self {
            value: self.value * factor,
            rescales: self.rescales,
        }
    }
}

/// Forward sweep from orders 0 and 1 up to order `n ≥ 1`.
///
/// Stops early once a step is no longer finite; the caller maps that to
/// the limit of the function it evaluates.
pub(crate) fn forward<T: BesselFloat>(family: Family, f0: T, f1: T, n: u32, x: T) -> Rescaled<T> {
    let sign = neighbour_sign::<T>(family);
    let bound = T::rescale_bound();
    let mut prev = f0;
    let mut cur = f1;
    let mut rescales = 0;
    for k in 1..n {
        let ratio = T::from_f64(f64::from(2 * k)) / x;
        let mut next = ratio.fma(cur, sign * prev);
        if !next.is_finite() {
            return Rescaled {
                value: next,
                rescales,
            };
        }
        if next.abs() > bound {
            next = next / bound;
            cur = cur / bound;
            rescales += 1;
        }
        prev = cur;
        cur = next;
    }
    Rescaled {
        value: cur,
        rescales,
    }
}

/// Unnormalized values left by a Miller sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MillerSweep<T> {
    /// Value at the requested order.
    pub(crate) target: T,
    /// Value at order 0.
    pub(crate) f0: T,
    /// Value at order 1.
    pub(crate) f1: T,
}

/// Backward sweep from order `start` down to 0, seeded with
/// `f_{start+1} = 0`, `f_start = 1`. Requires `start > n ≥ 1`.
pub(crate) fn miller<T: BesselFloat>(family: Family, n: u32, x: T, start: u32) -> MillerSweep<T> {
    let sign = neighbour_sign::<T>(family);
    let bound = T::miller_bound();
    let mut next = T::zero();
    let mut cur = T::one();
    let mut target = T::zero();
    for k in (1..=start).rev() {
        let ratio = T::from_f64(f64::from(2 * k)) / x;
        let mut prev = ratio.fma(cur, sign * next);
        if prev.abs() > bound {
            prev = prev / bound;
            cur = cur / bound;
            target = target / bound;
        }
        next = cur;
        cur = prev;
        if k - 1 == n {
            target = cur;
        }
    }
    MillerSweep {
        target,
        f0: cur,
        f1: next,
    }
}
