//! # pstats
//!
//! A small statistics library built around distribution *facades*: each
//! facade stores its parameters and forwards every operation to an injected
//! calculator.  The Poisson distribution is provided.
//!
//! This crate re-exports the public items of the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `ps-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use pstats::prelude::*;
//!
//! let calc = StandardPoissonCalculator::with_seed(42);
//! let d = Poisson::new(5.0, Handle::new(calc)).unwrap();
//!
//! let p = d.cdf(3.0).unwrap();
//! assert_eq!(d.ppf(p).unwrap(), 3.0);
//! assert_eq!(d.stats("mv").unwrap().mean(), Some(5.0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, errors, handles, and settings.
pub use ps_core as core;

/// Calculators, moments, RNG, and statistics utilities.
pub use ps_math as math;

/// Distribution facades.
pub use ps_distributions as distributions;

/// The items most programs need.
pub mod prelude {
    pub use ps_core::{AliasMode, Error, Handle, Real, Result, Settings, SurvivalConvention};
    pub use ps_distributions::{Moment, Moments, Poisson, ProbabilityDistribution};
    pub use ps_math::{PoissonCalculator, StandardPoissonCalculator};
}
