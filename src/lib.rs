//! Pure Rust Bessel functions of integer order and real argument.
//!
//! This crate evaluates the ordinary Bessel functions J_n, Y_n and the
//! modified Bessel functions I_n, K_n for orders `0..=100` and `x ≥ 0`,
//! together with the exponentially scaled forms `I_n(x)·e^{-x}` and
//! `K_n(x)·e^{x}`, to near double precision.
//!
//! Orders 0 and 1 use dedicated kernels. Higher orders combine them through
//! the three-term recurrence, run upward for Y and K and downward
//! (Miller's algorithm) for J and I, or switch to a power series at small
//! argument and a Hankel expansion at large argument.
//!
//! # Quick start
//!
//! ```
//! use real_bessel::{besselj, besselk_scaled, OrdinaryBessel};
//!
//! let j = besselj(0, 1.0_f64).unwrap();
//! assert!((j - 0.7651976865579666).abs() < 1e-15);
//!
//! // An engine can be kept and reused for many arguments.
//! let j10 = OrdinaryBessel::<f64>::instance_of(10).unwrap();
//! let samples: Vec<f64> = (1..=5).map(|k| j10.bessel_j(k as f64)).collect();
//! assert_eq!(samples.len(), 5);
//!
//! // Scaled K stays finite where K itself underflows.
//! assert!(besselk_scaled(3, 1000.0_f64).unwrap() > 0.0);
//! ```
//!
//! # Domain
//!
//! Evaluation never fails. Negative or NaN arguments give NaN; the
//! documented limits at `x = 0` and `x = ∞` are returned exactly. Only the
//! order is validated, once, when an engine is built.
//!
//! # Known limitation
//!
//! For very high orders the unscaled `I_n(x)` is normalized against
//! `I_0(x)`. Once `I_0` overflows (x above roughly 713) the result is +∞
//! even where `I_n(x)` itself is still representable, for example
//! `I_100(720) ≈ 7.1e307`. The scaled form is unaffected.
//!
//! # Features
//!
//! - `std` (default): use the standard library's math functions.
//! - `libm`: supply the math functions through `libm` in `no_std` builds.

#![cfg_attr(not(feature = "std"), no_std)]

pub(crate) mod algo;
pub mod factory;
pub mod machine;
pub mod modified;
pub mod ordinary;
pub mod types;
pub(crate) mod utils;

pub use factory::{Bessel, MAX_ORDER, accepts_parameter};
pub use machine::BesselFloat;
pub use modified::ModifiedBessel;
pub use ordinary::OrdinaryBessel;
pub use types::{Error, Family, Regime, Scaling};

// ── Single-value convenience functions ──

/// Bessel function of the first kind, J_n(x).
///
/// # Errors
///
/// [`Error::InvalidOrder`] if `n` is outside `0..=MAX_ORDER`.
pub fn besselj<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    Ok(OrdinaryBessel::instance_of(n)?.bessel_j(x))
}

/// Bessel function of the second kind, Y_n(x).
///
/// # Errors
///
/// [`Error::InvalidOrder`] if `n` is outside `0..=MAX_ORDER`.
pub fn bessely<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    Ok(OrdinaryBessel::instance_of(n)?.bessel_y(x))
}

/// Modified Bessel function of the first kind, I_n(x).
///
/// # Errors
///
/// [`Error::InvalidOrder`] if `n` is outside `0..=MAX_ORDER`.
pub fn besseli<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    Ok(ModifiedBessel::instance_of(n)?.bessel_i(x))
}

/// Modified Bessel function of the second kind, K_n(x).
///
/// # Errors
///
/// [`Error::InvalidOrder`] if `n` is outside `0..=MAX_ORDER`.
pub fn besselk<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    Ok(ModifiedBessel::instance_of(n)?.bessel_k(x))
}

/// Exponentially scaled I_n(x)·e^{-x}.
///
/// # Errors
///
/// [`Error::InvalidOrder`] if `n` is outside `0..=MAX_ORDER`.
pub fn besseli_scaled<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    Ok(ModifiedBessel::instance_of(n)?.bessel_ic(x))
}

/// Exponentially scaled K_n(x)·e^{x}.
///
/// # Errors
///
/// [`Error::InvalidOrder`] if `n` is outside `0..=MAX_ORDER`.
pub fn besselk_scaled<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    Ok(ModifiedBessel::instance_of(n)?.bessel_kc(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_functions_match_engines() {
        let x = 7.5_f64;
        let o = OrdinaryBessel::<f64>::instance_of(4).unwrap();
        let m = ModifiedBessel::<f64>::instance_of(4).unwrap();
        assert_eq!(besselj(4, x).unwrap(), o.bessel_j(x));
        assert_eq!(bessely(4, x).unwrap(), o.bessel_y(x));
        assert_eq!(besseli(4, x).unwrap(), m.bessel_i(x));
        assert_eq!(besselk(4, x).unwrap(), m.bessel_k(x));
        assert_eq!(besseli_scaled(4, x).unwrap(), m.bessel_ic(x));
        assert_eq!(besselk_scaled(4, x).unwrap(), m.bessel_kc(x));
    }

    #[test]
    fn convenience_functions_validate_order() {
        assert_eq!(besselj(-1, 1.0_f64), Err(Error::InvalidOrder(-1)));
        assert_eq!(besselk_scaled(200, 1.0_f32), Err(Error::InvalidOrder(200)));
    }

    #[test]
    fn f32_evaluation() {
        let j = besselj(3, 2.5_f32).unwrap();
        // J_3(2.5) = 0.21660039...
        assert!((j - 0.216_600_39).abs() < 1e-5);
        let k = besselk(2, 1.0_f32).unwrap();
        // K_2(1) = 1.6248389...
        assert!((k - 1.624_838_9).abs() < 1e-4);
    }
}
