//! # ps-distributions
//!
//! Probability distribution facades.
//!
//! A facade stores its parameters and forwards every operation to a
//! calculator from `ps-math`.  All facades implement
//! [`ProbabilityDistribution`], so generic code can hold any of them as
//! `&dyn ProbabilityDistribution`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The `ProbabilityDistribution` capability trait.
pub mod distribution;

/// Poisson distribution facade.
pub mod poisson;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distribution::ProbabilityDistribution;
pub use poisson::Poisson;
pub use ps_math::moments::{Moment, Moments, DEFAULT_MOMENTS};
