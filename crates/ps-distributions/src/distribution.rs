//! `ProbabilityDistribution` — the operations every distribution exposes.

use ps_core::{errors::Error, Probability, Real, Result, Size};
use ps_math::moments::{Moment, Moments, DEFAULT_MOMENTS};

/// A univariate probability distribution.
///
/// The trait is object safe; a collection of heterogeneous distributions
/// can be stored as `Box<dyn ProbabilityDistribution>`.
pub trait ProbabilityDistribution: std::fmt::Debug + Send + Sync {
    /// Draw one random variate.
    fn rvs(&self) -> Result<Real>;

    /// Probability mass at `x`.
    fn pmf(&self, x: Real) -> Result<Real>;

    /// Density at `x`.  For discrete distributions this is an alias of
    /// [`pmf`](Self::pmf).
    fn pdf(&self, x: Real) -> Result<Real>;

    /// Cumulative probability at `x`.
    fn cdf(&self, x: Real) -> Result<Real>;

    /// Survival probability at `x`.
    fn sf(&self, x: Real) -> Result<Real>;

    /// Percent-point function, the inverse of [`cdf`](Self::cdf).
    fn ppf(&self, p: Probability) -> Result<Real>;

    /// Inverse survival function, the inverse of [`sf`](Self::sf).
    fn isf(&self, p: Probability) -> Result<Real>;

    /// Moments selected by the characters of `selector`: `m` (mean),
    /// `v` (variance), `s` (skewness), `k` (excess kurtosis).
    fn stats(&self, selector: &str) -> Result<Moments>;

    /// `n` independent random variates.
    fn rvs_n(&self, n: Size) -> Result<Vec<Real>> {
        (0..n).map(|_| self.rvs()).collect()
    }

    /// Mean and variance.
    fn stats_default(&self) -> Result<Moments> {
        self.stats(DEFAULT_MOMENTS)
    }

    /// Mean of the distribution.
    fn mean(&self) -> Result<Real> {
        moment(self, Moment::Mean)
    }

    /// Variance of the distribution.
    fn variance(&self) -> Result<Real> {
        moment(self, Moment::Variance)
    }
}

fn moment<D: ProbabilityDistribution + ?Sized>(dist: &D, m: Moment) -> Result<Real> {
    let selector = m.symbol().to_string();
    dist.stats(&selector)?
        .get(m)
        .ok_or_else(|| Error::Postcondition(format!("stats(\"{selector}\") omitted the {m}")))
}
