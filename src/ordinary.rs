//! Ordinary Bessel functions J_n and Y_n of integer order.

use crate::algo::asymptotic::ordinary_asymptotic;
use crate::algo::constants::SERIES_LIMIT;
use crate::algo::jy01::{j0, j1, y0, y1};
use crate::algo::recurrence::{forward, miller};
use crate::algo::series::power_series;
use crate::algo::thresholds::OrderConstants;
use crate::factory::validate;
use crate::machine::BesselFloat;
use crate::types::{Error, Family, Regime};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Engine<T> {
    /// Orders 0 and 1: closed-form kernels.
    Kernel,
    /// Orders 2 and above: kernels combined through the recurrence.
    Recurrence(OrderConstants<T>),
}

/// Evaluator of `J_n(x)` and `Y_n(x)` for a fixed order `0 ≤ n ≤ 100`.
///
/// Immutable after construction; cheap to copy and safe to share between
/// threads. Arguments `x < 0` and NaN give NaN.
///
/// # Example
///
/// ```
/// use real_bessel::OrdinaryBessel;
///
/// let j = OrdinaryBessel::<f64>::ORDER_0;
/// assert!((j.bessel_j(1.0) - 0.7651976865579666).abs() < 1e-15);
///
/// let j5 = OrdinaryBessel::<f64>::instance_of(5).unwrap();
/// assert_eq!(j5.order(), 5);
/// assert_eq!(j5.bessel_j(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinaryBessel<T> {
    order: u32,
    engine: Engine<T>,
}

impl<T: BesselFloat> OrdinaryBessel<T> {
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
    ///
    /// Orders 0 and 1 return the shared kernels.
    pub fn instance_of(order: i32) -> Result<Self, Error> {
        Ok(Self::with_order(validate(order)?))
    }

    /// Engine for an order already checked against `MAX_ORDER`.
    pub(crate) fn with_order(order: u32) -> Self {
        match order {
            0 => Self::ORDER_0,
            1 => Self::ORDER_1,
            n => {
                let constants = OrderConstants::new(Family::Ordinary, n);
                log::trace!(
                    "ordinary engine n={n}: miller_start={}, asymptotic from x={:?}",
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

    /// Regime that [`bessel_j`](Self::bessel_j) uses at `x`.
    ///
    /// J has four bands: the power series below 2, Miller's algorithm up
    /// to `x = n`, forward recurrence from `n` up to `max(n², 25)`, and the
    /// asymptotic series beyond. The order-n asymptotic series is not
    /// accurate close to `x = n`, which is what the forward band covers.
    ///
    /// `None` for orders 0 and 1, which have no regime switch of their own,
    /// and for arguments outside the domain.
    pub fn j_regime(&self, x: T) -> Option<Regime> {
        match &self.engine {
            Engine::Kernel => None,
            Engine::Recurrence(c) => {
                if x.is_nan() || x < T::zero() {
                    None
                } else {
                    Some(self.select_j(c, x))
                }
            }
        }
    }

    /// Series, then Miller, then forward recurrence, then asymptotic.
    fn select_j(&self, c: &OrderConstants<T>, x: T) -> Regime {
        if x < T::from_f64(SERIES_LIMIT) {
            Regime::PowerSeries
        } else if x < T::from_f64(f64::from(self.order)) {
            Regime::BackwardRecurrence
        } else if x < c.asymptotic_limit {
            Regime::ForwardRecurrence
        } else {
            Regime::Asymptotic
        }
    }

    /// Bessel function of the first kind, `J_n(x)`.
    pub fn bessel_j(&self, x: T) -> T {
        let c = match &self.engine {
            Engine::Kernel if self.order == 0 => return j0(x),
            Engine::Kernel => return j1(x),
            Engine::Recurrence(c) => c,
        };
        if x.is_nan() || x < T::zero() {
            return T::nan();
        }
        if x == T::zero() || x.is_infinite() {
            return T::zero();
        }
        let n = self.order;
        match self.select_j(c, x) {
            Regime::PowerSeries => power_series(Family::Ordinary, n, x, c.inv_factorial),
            Regime::BackwardRecurrence => {
                let sweep = miller(Family::Ordinary, n, x, c.miller_start);
                // J0 and J1 have no common zero, so one of them anchors the sweep.
                if sweep.f0.abs() >= sweep.f1.abs() {
                    sweep.target / sweep.f0 * j0(x)
                } else {
                    sweep.target / sweep.f1 * j1(x)
                }
            }
            Regime::ForwardRecurrence => forward(Family::Ordinary, j0(x), j1(x), n, x).unscale(),
            Regime::Asymptotic => ordinary_asymptotic(n, x),
        }
    }

    /// Bessel function of the second kind, `Y_n(x)`. −∞ at the origin.
    ///
    /// Always reached by forward recurrence from `Y_0` and `Y_1`; a sweep
    /// that leaves the finite range returns −∞.
    pub fn bessel_y(&self, x: T) -> T {
        if let Engine::Kernel = self.engine {
            return if self.order == 0 { y0(x) } else { y1(x) };
        }
        if x.is_nan() || x < T::zero() {
            return T::nan();
        }
        if x == T::zero() {
            return T::neg_infinity();
        }
        if x.is_infinite() {
            return T::zero();
        }
        let y = forward(Family::Ordinary, y0(x), y1(x), self.order, x).unscale();
        if y.is_finite() { y } else { T::neg_infinity() }
    }
}
