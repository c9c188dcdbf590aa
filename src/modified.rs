//! Modified Bessel functions I_n and K_n of integer order, with their
//! exponentially scaled forms.

use crate::algo::asymptotic::scaled_modified_asymptotic;
use crate::algo::constants::SERIES_LIMIT;
use crate::algo::ik01::{i0, i1, k0, k1};
use crate::algo::recurrence::{forward, miller};
use crate::algo::series::power_series;
use crate::algo::thresholds::OrderConstants;
use crate::factory::validate;
use crate::machine::BesselFloat;
use crate::types::{Error, Family, Regime, Scaling};
use crate::utils::scale_by_exp;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Engine<T> {
    Kernel,
    Recurrence(OrderConstants<T>),
}

/// Evaluator of `I_n(x)` and `K_n(x)` for a fixed order `0 ≤ n ≤ 100`.
///
/// Each function comes in an unscaled form and an exponentially scaled
/// one (`I_n(x)·e^{-x}`, `K_n(x)·e^{x}`) that stays representable far
/// beyond the point where the unscaled value overflows or underflows.
///
/// # Example
///
/// ```
/// use real_bessel::ModifiedBessel;
///
/// let k10 = ModifiedBessel::<f64>::instance_of(10).unwrap();
/// let k = k10.bessel_k(10.0);
/// assert!((k / 0.0016142553003906700 - 1.0).abs() < 1e-13);
/// assert!((k10.bessel_kc(10.0) / (k * 10.0_f64.exp()) - 1.0).abs() < 1e-13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedBessel<T> {
    order: u32,
    engine: Engine<T>,
}

impl<T: BesselFloat> ModifiedBessel<T> {
    /// The order-0 kernel.
    pub const ORDER_0: Self = Self {
        order: 0,
        engine: Engine::Kernel,
    };

    /// The order-1 kernel.
    pub const ORDER_1: Self = Self {
        order: 1,
        engine: Engine::Kernel,
    };

    /// Engine for `order`, or [`Error::InvalidOrder`] outside `0..=100`.
    pub fn instance_of(order: i32) -> Result<Self, Error> {
        Ok(Self::with_order(validate(order)?))
    }

    pub(crate) fn with_order(order: u32) -> Self {
        match order {
            0 => Self::ORDER_0,
            1 => Self::ORDER_1,
            n => {
                let constants = OrderConstants::new(Family::Modified, n);
                log::trace!(
                    "modified engine n={n}: miller_start={} (+6√x), asymptotic from x={:?}",
                    constants.miller_start,
                    constants.asymptotic_limit
                );
                Self {
                    order: n,
                    engine: Engine::Recurrence(constants),
                }
            }
        }
    }

    /// The order n.
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Regime that [`bessel_i`](Self::bessel_i) and
    /// [`bessel_ic`](Self::bessel_ic) use at `x`; `None` for orders 0 and 1
    /// and for arguments outside the domain.
    pub fn i_regime(&self, x: T) -> Option<Regime> {
        match &self.engine {
            Engine::Kernel => None,
            Engine::Recurrence(c) => {
                if x.is_nan() || x < T::zero() {
                    None
                } else {
                    Some(select_i(c, x))
                }
            }
        }
    }

    /// Modified Bessel function of the first kind, `I_n(x)`.
    pub fn bessel_i(&self, x: T) -> T {
        self.eval_i(x, Scaling::Unscaled)
    }

    /// Modified Bessel function of the second kind, `K_n(x)`. +∞ at the origin.
    pub fn bessel_k(&self, x: T) -> T {
        self.eval_k(x, Scaling::Unscaled)
    }

    /// Scaled first kind, `I_n(x)·e^{-x}`.
    pub fn bessel_ic(&self, x: T) -> T {
        self.eval_i(x, Scaling::Exponential)
    }

    /// Scaled second kind, `K_n(x)·e^{x}`.
    pub fn bessel_kc(&self, x: T) -> T {
        self.eval_k(x, Scaling::Exponential)
    }

    /// `I_n(x)` in the requested form.
    pub fn eval_i(&self, x: T, scaling: Scaling) -> T {
        let c = match &self.engine {
            Engine::Kernel if self.order == 0 => return i0(x, scaling),
            Engine::Kernel => return i1(x, scaling),
            Engine::Recurrence(c) => c,
        };
        if x.is_nan() || x < T::zero() {
            return T::nan();
        }
        if x == T::zero() {
            return T::zero();
        }
        if x.is_infinite() {
            return match scaling {
                Scaling::Unscaled => T::infinity(),
                Scaling::Exponential => T::zero(),
            };
        }
        let n = self.order;
        match select_i(c, x) {
            Regime::PowerSeries => {
                let raw = power_series(Family::Modified, n, x, c.inv_factorial);
                match scaling {
                    Scaling::Unscaled => raw,
                    Scaling::Exponential => raw * (-x).exp(),
                }
            }
            Regime::Asymptotic => {
                let scaled = scaled_modified_asymptotic(n, x);
                match scaling {
                    Scaling::Unscaled => scale_by_exp(scaled, x),
                    Scaling::Exponential => scaled,
                }
            }
            _ => {
                let start = c.miller_start_at(Family::Modified, x);
                let sweep = miller(Family::Modified, n, x, start);
                let anchor = i0(x, scaling);
                if anchor.is_infinite() {
                    // I_0 has overflowed although I_n may still be finite;
                    // the normalization below then returns +∞.
                    log::debug!(
                        "I_{n}({x:?}): order-0 anchor overflowed, unscaled result saturates"
                    );
                }
                sweep.target / sweep.f0 * anchor
            }
        }
    }

    /// `K_n(x)` in the requested form.
    ///
    /// The forward sweep always runs on the scaled kernels; the unscaled
    /// value takes one factor `e^{-x}` before the rescalings are reapplied.
    pub fn eval_k(&self, x: T, scaling: Scaling) -> T {
        if let Engine::Kernel = self.engine {
            return if self.order == 0 { k0(x, scaling) } else { k1(x, scaling) };
        }
        if x.is_nan() || x < T::zero() {
            return T::nan();
        }
        if x == T::zero() {
            return T::infinity();
        }
        if x.is_infinite() {
            return T::zero();
        }
        let kc0 = k0(x, Scaling::Exponential);
        let kc1 = k1(x, Scaling::Exponential);
        let swept = forward(Family::Modified, kc0, kc1, self.order, x);
        let k = match scaling {
            Scaling::Unscaled => swept.scale((-x).exp()).unscale(),
            Scaling::Exponential => swept.unscale(),
        };
        if k.is_finite() { k } else { T::infinity() }
    }
}

fn select_i<T: BesselFloat>(c: &OrderConstants<T>, x: T) -> Regime {
    if x < T::from_f64(SERIES_LIMIT) {
        Regime::PowerSeries
    } else if x < c.asymptotic_limit {
        Regime::BackwardRecurrence
    } else {
        Regime::Asymptotic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    fn engine(n: i32) -> ModifiedBessel<f64> {
        ModifiedBessel::instance_of(n).unwrap()
    }

    #[test]
    fn regime_selection() {
        let e = engine(10);
        assert_eq!(e.i_regime(1.9), Some(Regime::PowerSeries));
        assert_eq!(e.i_regime(2.0), Some(Regime::BackwardRecurrence));
        assert_eq!(e.i_regime(49.0), Some(Regime::BackwardRecurrence));
        assert_eq!(e.i_regime(50.0), Some(Regime::Asymptotic));
        assert_eq!(engine(2).i_regime(24.0), Some(Regime::Asymptotic));
        assert_eq!(engine(0).i_regime(24.0), None);
        assert_eq!(e.i_regime(f64::NAN), None);
    }

    #[test]
    fn first_kind_values() {
        // mpmath
        assert!(rel(engine(2).bessel_i(1.5), 0.33783461833568073) < 1e-14);
        assert!(rel(engine(5).bessel_i(3.0), 0.091206477661513349) < 1e-13);
        assert!(rel(engine(10).bessel_i(10.0), 21.891706163723371) < 1e-13);
        assert!(rel(engine(50).bessel_i(30.0), 0.00014590106916468947) < 1e-13);
        assert!(rel(engine(100).bessel_i(100.0), 4.6415349416161991e21) < 1e-13);
        assert!(rel(engine(3).bessel_i(40.0), 13291455664733660.0) < 1e-13);
        assert!(rel(engine(30).bessel_i(450.0), 1.8720823626117284e193) < 1e-13);
    }

    #[test]
    fn scaled_first_kind_values() {
        // mpmath
        assert!(rel(engine(20).bessel_ic(5.0), 3.3853058504733224e-13) < 1e-13);
        assert!(rel(engine(2).bessel_ic(30.0), 0.068351524442327457) < 1e-13);
        assert!(rel(engine(100).bessel_ic(720.0), 1.4425409833758346e-5) < 1e-13);
    }

    #[test]
    fn second_kind_values() {
        // mpmath
        assert!(rel(engine(10).bessel_k(10.0), 0.0016142553003906700) < 1e-13);
        assert!(rel(engine(20).bessel_k(5.0), 482700052.06214847) < 1e-13);
        assert!(rel(engine(50).bessel_kc(30.0), 628051444834943.34) < 1e-13);
        assert!(rel(engine(100).bessel_k(100.0), 7.6171296304940854e-25) < 1e-13);
        assert!(rel(engine(30).bessel_k(450.0), 5.9220195694648446e-197) < 1e-13);
    }

    #[test]
    fn limits() {
        let e = engine(4);
        assert_eq!(e.bessel_i(0.0), 0.0);
        assert_eq!(e.bessel_ic(0.0), 0.0);
        assert_eq!(e.bessel_k(0.0), f64::INFINITY);
        assert_eq!(e.bessel_kc(0.0), f64::INFINITY);
        assert_eq!(e.bessel_i(f64::INFINITY), f64::INFINITY);
        assert_eq!(e.bessel_ic(f64::INFINITY), 0.0);
        assert_eq!(e.bessel_k(f64::INFINITY), 0.0);
        assert_eq!(e.bessel_kc(f64::INFINITY), 0.0);
        for f in [
            ModifiedBessel::<f64>::bessel_i,
            ModifiedBessel::<f64>::bessel_k,
            ModifiedBessel::<f64>::bessel_ic,
            ModifiedBessel::<f64>::bessel_kc,
        ] {
            assert!(f(&e, -3.0).is_nan());
            assert!(f(&e, f64::NAN).is_nan());
        }
        assert_eq!(engine(100).bessel_k(1e-2), f64::INFINITY);
        assert_eq!(engine(2).bessel_k(800.0), 0.0);
    }

    #[test]
    fn overflowed_anchor_saturates() {
        // I_100(720) ≈ 7.098e307 is finite, but I_0(720) is not; the
        // unscaled Miller path reproduces the overflow.
        assert!(engine(100).bessel_i(720.0).is_infinite());
    }
}
