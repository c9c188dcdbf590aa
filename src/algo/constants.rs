//! Shared mathematical constants and regime thresholds.
//!
//! Module-specific constants remain in their respective files.

#![allow(clippy::excessive_precision)]

/// Euler–Mascheroni constant γ.
pub(crate) const EULER: f64 = 5.77215664901532860606512090082402431e-01;

/// π
pub(crate) const PI: f64 = core::f64::consts::PI;

/// 1/π
pub(crate) const FRAC_1_PI: f64 = core::f64::consts::FRAC_1_PI;

/// 2/π
pub(crate) const FRAC_2_PI: f64 = core::f64::consts::FRAC_2_PI;

/// 1/√2
pub(crate) const FRAC_1_SQRT_2: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// Below this argument every function is summed as a power series in (x/2)².
pub(crate) const SERIES_LIMIT: f64 = 2.0;

/// Modified-I kernels switch from sub-interval fits of `I·e^{-x}` to the
/// fitted asymptotic form here; it is also the floor of the order-n
/// asymptotic threshold for I.
pub(crate) const MODIFIED_ASYMPTOTIC_FLOOR: f64 = 24.0;

/// Floor of the order-n asymptotic threshold for J.
pub(crate) const ORDINARY_ASYMPTOTIC_FLOOR: f64 = 25.0;

/// Exponent split used when rebuilding `I` from `I·e^{-x}` near overflow.
pub(crate) const EXP_SHIFT: f64 = 20.0;

/// Weight of √x in the Miller start order for the modified family.
pub(crate) const MILLER_SQRT_WEIGHT: f64 = 6.0;

/// Upper bound on terms of any series summed term by term.
pub(crate) const MAX_SERIES_TERMS: usize = 64;
