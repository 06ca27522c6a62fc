//! Poisson distribution facade.
//!
//! [`Poisson`] models the number of independent events occurring in a fixed
//! interval at average rate `lambda`.  It holds `lambda` and a handle to a
//! [`PoissonCalculator`], and forwards each operation to the calculator with
//! `lambda` appended.  The facade validates nothing and catches nothing:
//! parameter checks, domain checks and numerical failures all belong to the
//! calculator and reach the caller unchanged.

use std::sync::Arc;

use ps_core::{errors::Error, AliasMode, Handle, Probability, Real, Result, Settings};
use ps_math::{Moments, PoissonCalculator, StandardPoissonCalculator};

use crate::distribution::ProbabilityDistribution;

/// Poisson distribution with rate `lambda`.
///
/// ```
/// use ps_distributions::{Poisson, ProbabilityDistribution};
/// use ps_math::StandardPoissonCalculator;
///
/// let d = Poisson::from_calculator(4.0, StandardPoissonCalculator::with_seed(7));
/// let m = d.stats("mv").unwrap();
/// assert_eq!(m.mean(), Some(4.0));
/// assert_eq!(m.variance(), Some(4.0));
/// assert_eq!(d.pmf(2.0).unwrap(), d.pdf(2.0).unwrap());
/// ```
pub struct Poisson<C = StandardPoissonCalculator> {
    lambda: Real,
    calculator: Arc<C>,
    alias_mode: AliasMode,
}

impl<C: PoissonCalculator> Poisson<C> {
    /// Create a facade over `calculator`, using the default
    /// [`AliasMode`] from [`Settings`].
    ///
    /// Fails with [`Error::InvalidArgument`] if the handle is null.
    /// `lambda` is stored as given.
    pub fn new(lambda: Real, calculator: Handle<C>) -> Result<Self> {
        Self::with_alias_mode(lambda, calculator, Settings::instance().alias_mode())
    }

    /// Create a facade with an explicit [`AliasMode`].
    pub fn with_alias_mode(
        lambda: Real,
        calculator: Handle<C>,
        alias_mode: AliasMode,
    ) -> Result<Self> {
        let calculator = calculator.into_arc().ok_or_else(|| {
            Error::InvalidArgument(
                "Poisson distribution requires a calculator, got a null handle".into(),
            )
        })?;
        Ok(Self {
            lambda,
            calculator,
            alias_mode,
        })
    }

    /// Create a facade owning `calculator`.
    pub fn from_calculator(lambda: Real, calculator: C) -> Self {
        Self {
            lambda,
            calculator: Arc::new(calculator),
            alias_mode: Settings::instance().alias_mode(),
        }
    }

    /// The rate parameter.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// The calculator this facade forwards to.
    pub fn calculator(&self) -> &Arc<C> {
        &self.calculator
    }

    /// How [`pdf`](ProbabilityDistribution::pdf) forwards.
    pub fn alias_mode(&self) -> AliasMode {
        self.alias_mode
    }
}

impl<C: PoissonCalculator> ProbabilityDistribution for Poisson<C> {
    fn rvs(&self) -> Result<Real> {
        self.calculator.rvs(self.lambda)
    }

    fn pmf(&self, x: Real) -> Result<Real> {
        self.calculator.pmf(x, self.lambda)
    }

    fn pdf(&self, x: Real) -> Result<Real> {
        match self.alias_mode {
            AliasMode::Corrected => self.calculator.pmf(x, self.lambda),
            AliasMode::Legacy => self.calculator.pmf_unary(x),
        }
    }

    fn cdf(&self, x: Real) -> Result<Real> {
        self.calculator.cdf(x, self.lambda)
    }

    fn sf(&self, x: Real) -> Result<Real> {
        self.calculator.sf(x, self.lambda)
    }

    fn ppf(&self, p: Probability) -> Result<Real> {
        self.calculator.ppf(p, self.lambda)
    }

    fn isf(&self, p: Probability) -> Result<Real> {
        self.calculator.isf(p, self.lambda)
    }

    fn stats(&self, selector: &str) -> Result<Moments> {
        self.calculator.stats(selector, self.lambda)
    }
}

impl<C> Clone for Poisson<C> {
    fn clone(&self) -> Self {
        Self {
            lambda: self.lambda,
            calculator: Arc::clone(&self.calculator),
            alias_mode: self.alias_mode,
        }
    }
}

impl<C> std::fmt::Debug for Poisson<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poisson")
            .field("lambda", &self.lambda)
            .field("calculator", &std::any::type_name::<C>())
            .field("alias_mode", &self.alias_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ps_core::SurvivalConvention;

    fn poisson(lambda: Real) -> Poisson {
        Poisson::with_alias_mode(
            lambda,
            Handle::new(
                StandardPoissonCalculator::with_seed(99)
                    .with_convention(SurvivalConvention::Exclusive),
            ),
            AliasMode::Corrected,
        )
        .unwrap()
    }

    #[test]
    fn stores_lambda_and_handle() {
        let handle = Handle::new(StandardPoissonCalculator::with_seed(1));
        let d = Poisson::with_alias_mode(2.5, handle.clone(), AliasMode::Legacy).unwrap();
        assert_eq!(d.lambda(), 2.5);
        assert!(handle.as_arc().is_some_and(|a| Arc::ptr_eq(a, d.calculator())));
        assert_eq!(d.alias_mode(), AliasMode::Legacy);
    }

    #[test]
    fn null_calculator_rejected() {
        let err = Poisson::<StandardPoissonCalculator>::new(1.0, Handle::null()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn lambda_is_not_validated_by_the_facade() {
        let d = Poisson::with_alias_mode(
            -1.0,
            Handle::new(StandardPoissonCalculator::with_seed(1)),
            AliasMode::Corrected,
        )
        .unwrap();
        assert_eq!(d.lambda(), -1.0);
        assert!(matches!(d.cdf(1.0), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn mean_equals_variance() {
        let d = poisson(4.0);
        let m = d.stats_default().unwrap();
        assert_abs_diff_eq!(m.mean().unwrap(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.variance().unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(m.len(), 2);
        assert_eq!(d.mean().unwrap(), 4.0);
        assert_eq!(d.variance().unwrap(), 4.0);
    }

    #[test]
    fn pdf_matches_pmf() {
        let d = poisson(3.0);
        for x in [0.0, 1.0, 2.0, 3.0, 7.0, 2.5, -1.0] {
            assert_eq!(d.pdf(x).unwrap(), d.pmf(x).unwrap());
        }
    }

    #[test]
    fn sample_mean_converges() {
        let d = poisson(7.0);
        let draws = d.rvs_n(20_000).unwrap();
        let mean = draws.iter().sum::<Real>() / draws.len() as Real;
        assert!((mean - 7.0).abs() < 0.15, "mean {mean}");
    }

    #[test]
    fn debug_names_calculator() {
        let s = format!("{:?}", poisson(1.0));
        assert!(s.contains("lambda: 1.0"));
        assert!(s.contains("StandardPoissonCalculator"));
    }
}
