//! Internal algorithm modules for Bessel function computation.
//!
//! All functions are `pub(crate)`; they are not part of the public API.
//!
//! # Layout
//!
//! - `jy01`, `ik01`: order-0 and order-1 kernels. Stateless, so every
//!   higher-order engine shares them.
//! - `series`, `recurrence`, `asymptotic`: the three ways of reaching order
//!   n ≥ 2 from the kernels or from scratch.
//! - `thresholds`: per-order constants fixed at construction.
//! - `tables`, `constants`: coefficient data and shared constants.
//!
//! # Argument conventions
//!
//! Kernels accept any `x` and return NaN for negative or NaN input. The
//! higher-order routines assume the caller has already handled NaN, zero
//! and infinite arguments and picked the routine for the current regime.

pub(crate) mod constants;
pub(crate) mod tables;

pub(crate) mod ik01;
pub(crate) mod jy01;

pub(crate) mod asymptotic;
pub(crate) mod recurrence;
pub(crate) mod series;
pub(crate) mod thresholds;
