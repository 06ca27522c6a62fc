//! # ps-math
//!
//! Numerical side of pstats: the Poisson calculator contract and its
//! `statrs`-backed implementation, moment selection, random number
//! generation, and small statistics utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calculator contract and the standard Poisson calculator.
pub mod calculator;

/// Floating-point comparison utilities.
pub mod comparison;

/// Moment selection and result mapping.
pub mod moments;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{PoissonCalculator, StandardPoissonCalculator};
pub use comparison::{close, close_enough};
pub use moments::{Moment, Moments};
pub use random_numbers::MersenneTwisterUniformRng;
pub use statistics::Statistics;
