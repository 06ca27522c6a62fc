//! Calculator contract for the Poisson distribution.
//!
//! A distribution facade stores its rate and forwards every operation to a
//! [`PoissonCalculator`], passing the rate along with the operation's own
//! argument.  Calculators own all numerics and all argument validation;
//! whatever they return reaches the caller unchanged.

/// `statrs`-backed implementation.
pub mod poisson;

pub use poisson::{StandardPoissonCalculator, MAX_SEARCH_STEPS};

use ps_core::{errors::Error, Probability, Real, Result};

use crate::moments::Moments;

/// Numerical back end for a Poisson distribution with rate `lambda`.
///
/// Implementations must be safe to share between threads: facades are
/// immutable and may be used concurrently, and they add no locking of
/// their own.
pub trait PoissonCalculator: Send + Sync {
    /// Draw one random variate.
    fn rvs(&self, lambda: Real) -> Result<Real>;

    /// Probability mass `P(X = x)`.
    fn pmf(&self, x: Real, lambda: Real) -> Result<Real>;

    /// Cumulative probability `P(X ≤ x)`.
    fn cdf(&self, x: Real, lambda: Real) -> Result<Real>;

    /// Survival probability; which tail is covered is up to the
    /// implementation and must be documented by it.
    fn sf(&self, x: Real, lambda: Real) -> Result<Real>;

    /// Percent-point function (inverse of [`cdf`](Self::cdf)).
    fn ppf(&self, p: Probability, lambda: Real) -> Result<Real>;

    /// Inverse survival function (inverse of [`sf`](Self::sf)).
    fn isf(&self, p: Probability, lambda: Real) -> Result<Real>;

    /// The moments named by `selector` (characters from `m`, `v`, `s`, `k`).
    fn stats(&self, selector: &str, lambda: Real) -> Result<Moments>;

    /// Single-argument mass function, without a rate.
    ///
    /// Only reached through a facade in legacy alias mode.  Calculators
    /// have no rate of their own, so the provided implementation fails.
    fn pmf_unary(&self, x: Real) -> Result<Real> {
        Err(Error::NotImplemented(format!(
            "single-argument pmf({x}) is not provided by this calculator"
        )))
    }
}

impl<C: PoissonCalculator + ?Sized> PoissonCalculator for Box<C> {
    fn rvs(&self, lambda: Real) -> Result<Real> {
        (**self).rvs(lambda)
    }

    fn pmf(&self, x: Real, lambda: Real) -> Result<Real> {
        (**self).pmf(x, lambda)
    }

    fn cdf(&self, x: Real, lambda: Real) -> Result<Real> {
        (**self).cdf(x, lambda)
    }

    fn sf(&self, x: Real, lambda: Real) -> Result<Real> {
        (**self).sf(x, lambda)
    }

    fn ppf(&self, p: Probability, lambda: Real) -> Result<Real> {
        (**self).ppf(p, lambda)
    }

    fn isf(&self, p: Probability, lambda: Real) -> Result<Real> {
        (**self).isf(p, lambda)
    }

    fn stats(&self, selector: &str, lambda: Real) -> Result<Moments> {
        (**self).stats(selector, lambda)
    }

    fn pmf_unary(&self, x: Real) -> Result<Real> {
        (**self).pmf_unary(x)
    }
}
