//! Core types for Bessel function computation.

use core::fmt;

/// Bessel function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Ordinary Bessel functions J (first kind) and Y (second kind).
    Ordinary,
    /// Modified Bessel functions I (first kind) and K (second kind).
    Modified,
}

/// Scaling option for modified Bessel function computation.
///
/// The `Exponential` variant returns `factor · f(x)`, where factor is:
/// - I: `exp(-x)`
/// - K: `exp(x)`
///
/// The unscaled value is always `scaled · exp(∓x)`; the `f64` carries no
/// tag, so callers must remember which form they asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scaling {
    /// No scaling applied.
    Unscaled,
    /// Exponential scaling to prevent overflow/underflow.
    Exponential,
}

/// Algorithm used for one evaluation of a higher-order function.
///
/// Selected per call from the argument and the order; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Direct power series in `(x/2)²`.
    PowerSeries,
    /// Miller's algorithm: downward sweep from a high start order,
    /// normalized against an order-0 or order-1 kernel.
    BackwardRecurrence,
    /// Upward sweep from the order-0 and order-1 kernels. For J this is
    /// the band `n ≤ x < max(n², 25)`; I never uses it.
    ForwardRecurrence,
    /// Large-argument asymptotic series for the requested order.
    Asymptotic,
}

/// Error type for Bessel engine construction.
///
/// Evaluation itself never fails: arguments outside the domain produce NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Requested order lies outside `0..=MAX_ORDER`.
    InvalidOrder(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOrder(order) => {
                write!(
                    f,
                    "invalid order {order}: must be in 0..={}",
                    crate::factory::MAX_ORDER
                )
            }
        }
    }
}

impl core::error::Error for Error {}
