//! Per-order constants fixed when a higher-order engine is built.

use crate::algo::constants::{
    MILLER_SQRT_WEIGHT, MODIFIED_ASYMPTOTIC_FLOOR, ORDINARY_ASYMPTOTIC_FLOOR,
};
use crate::algo::tables::INV_FACTORIAL;
use crate::machine::BesselFloat;
use crate::types::Family;

/// Derived constants of one order `n ≥ 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrderConstants<T> {
    /// `1/n!`, the series prefactor.
    pub(crate) inv_factorial: T,
    /// `⌊n + 1 + 8·ln(n + 3)⌋`, the argument-independent Miller start.
    pub(crate) miller_start: u32,
    /// Argument from which the order-n asymptotic expansion is used:
    /// `max(n², 25)` for J, `max(n²/2, 24)` for I.
    pub(crate) asymptotic_limit: T,
}

impl<T: BesselFloat> OrderConstants<T> {
    /// Constants for order `n`; `n` must not exceed the factorial table.
    pub(crate) fn new(family: Family, n: u32) -> Self {
        let order = f64::from(n);
        let nt = T::from_f64(order);
        let base = nt + T::one() + T::from_f64(8.0) * (nt + T::from_f64(3.0)).ln();
        let asymptotic_limit = match family {
            Family::Ordinary => (order * order).max(ORDINARY_ASYMPTOTIC_FLOOR),
            Family::Modified => (0.5 * order * order).max(MODIFIED_ASYMPTOTIC_FLOOR),
        };
        Self {
            inv_factorial: T::from_f64(INV_FACTORIAL[n as usize]),
            miller_start: base.to_u32().unwrap_or(n + 1),
            asymptotic_limit: T::from_f64(asymptotic_limit),
        }
    }

    /// Miller start order at `x`. The modified family adds `6·√x`, since
    /// its backward-sweep error decays more slowly as x grows.
    pub(crate) fn miller_start_at(&self, family: Family, x: T) -> u32 {
        match family {
            Family::Ordinary => self.miller_start,
            Family::Modified => {
                let extra = (T::from_f64(MILLER_SQRT_WEIGHT) * x.sqrt()).ceil();
                self.miller_start + extra.to_u32().unwrap_or(0)
            }
        }
    }
}
