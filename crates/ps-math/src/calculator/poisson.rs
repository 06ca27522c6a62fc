//! Standard Poisson calculator.
//!
//! Mass and tail probabilities come from the `statrs` crate; sampling uses
//! `rand_distr` driven by a seeded Mersenne Twister.  Inverse functions
//! bracket the answer outward from a Cornish–Fisher starting point, then
//! bisect the integer support.
//!
//! Conventions for rate `λ` and evaluation point `x`:
//!
//! | operation | result |
//! |-----------|--------|
//! | `pmf(x)` | `e^{-λ} λ^x / x!` for integer `x ≥ 0`, otherwise `0` |
//! | `cdf(x)` | `P(X ≤ ⌊x⌋)`, `0` for `x < 0` |
//! | `sf(x)`, exclusive | `P(X > ⌊x⌋)`, `1` for `x < 0` |
//! | `sf(x)`, inclusive | `P(X ≥ ⌈x⌉)`, `1` for `x ≤ 0` |
//! | `ppf(p)` | smallest `k ≥ 0` with `cdf(k) ≥ p ⊖ 8 ulp`; `ppf(0) = -1`, `ppf(1) = ∞` |
//! | `isf(p)`, exclusive | smallest `k ≥ 0` with `sf(k) ≤ p ⊕ 8 ulp`; `isf(1) = -1`, `isf(0) = ∞` |
//! | `isf(p)`, inclusive | exclusive result plus one |
//!
//! `p ⊖ 8 ulp` and `p ⊕ 8 ulp` widen the comparison by eight units in the
//! last place of the larger of the tail probability and `p` (see
//! [`close_enough`](crate::comparison::close_enough)), so a probability
//! returned by `cdf`/`sf` maps back onto the point it was computed at.
//!
//! `λ` must be finite and positive ([`Error::InvalidParameter`]); `x` must
//! not be NaN and `p` must lie in `[0, 1]` ([`Error::Domain`]).

use std::f64::consts::SQRT_2;
use std::sync::Mutex;

use num_traits::ToPrimitive;
use ps_core::{
    ensure_domain, ensure_param, errors::Error, Probability, Real, Result, Settings,
    SurvivalConvention,
};
use rand::Rng;
use rand_distr::{Distribution, Poisson as PoissonSampler};
use statrs::distribution::{Discrete, DiscreteCDF, Poisson};
use statrs::function::erf::erfc_inv;
use statrs::function::gamma::gamma_lr;
use tracing::{debug, trace};

use super::PoissonCalculator;
use crate::comparison::{at_least, at_most};
use crate::moments::{Moment, Moments};
use crate::random_numbers::MersenneTwisterUniformRng;

/// Upper bound on predicate evaluations in an inverse search.
///
/// Bracketing doubles its stride and bisection halves the bracket, so a
/// search over the whole `u64` range needs at most 128 evaluations.
pub const MAX_SEARCH_STEPS: u64 = 256;

/// Relative tolerance, in ulps, when comparing a tail probability to `p`.
const SEARCH_ULPS: u32 = 8;

/// Poisson calculator backed by `statrs` and `rand_distr`.
///
/// The survival convention and RNG seed are fixed at construction.  The
/// generator sits behind a `Mutex`, which makes the calculator `Sync`;
/// every other operation is a pure function of its arguments.
pub struct StandardPoissonCalculator {
    convention: SurvivalConvention,
    seed: u64,
    rng: Mutex<MersenneTwisterUniformRng>,
}

impl StandardPoissonCalculator {
    /// Create a calculator using the defaults in [`Settings`].
    ///
    /// Without a default seed the generator is seeded from OS entropy.
    pub fn new() -> Self {
        let settings = Settings::instance().snapshot();
        let rng = match settings.seed {
            Some(seed) => MersenneTwisterUniformRng::new(seed),
            None => MersenneTwisterUniformRng::from_entropy(),
        };
        Self::build(settings.survival_convention, rng)
    }

    /// Create a calculator whose generator starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(
            Settings::instance().survival_convention(),
            MersenneTwisterUniformRng::new(seed),
        )
    }

    /// Replace the survival convention.
    pub fn with_convention(mut self, convention: SurvivalConvention) -> Self {
        self.convention = convention;
        self
    }

    fn build(convention: SurvivalConvention, rng: MersenneTwisterUniformRng) -> Self {
        let seed = rng.seed();
        debug!(seed, ?convention, "created Poisson calculator");
        Self {
            convention,
            seed,
            rng: Mutex::new(rng),
        }
    }

    /// The survival convention in force.
    pub fn convention(&self) -> SurvivalConvention {
        self.convention
    }

    /// Seed the internal generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one variate using a caller-supplied generator.
    pub fn rvs_with<R: Rng + ?Sized>(&self, lambda: Real, rng: &mut R) -> Result<Real> {
        let sampler = sampler(lambda)?;
        Ok(sampler.sample(rng))
    }
}

impl Default for StandardPoissonCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StandardPoissonCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardPoissonCalculator")
            .field("convention", &self.convention)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl PoissonCalculator for StandardPoissonCalculator {
    fn rvs(&self, lambda: Real) -> Result<Real> {
        let sampler = sampler(lambda)?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| Error::Runtime("Poisson sampler RNG mutex poisoned".into()))?;
        Ok(sampler.sample(&mut *rng))
    }

    fn pmf(&self, x: Real, lambda: Real) -> Result<Real> {
        let dist = distribution(lambda)?;
        check_point(x)?;
        if x < 0.0 || x.fract() != 0.0 {
            return Ok(0.0);
        }
        Ok(x.to_u64().map_or(0.0, |k| dist.pmf(k)))
    }

    fn cdf(&self, x: Real, lambda: Real) -> Result<Real> {
        let dist = distribution(lambda)?;
        check_point(x)?;
        Ok(lower_tail(&dist, x))
    }

    fn sf(&self, x: Real, lambda: Real) -> Result<Real> {
        check_lambda(lambda)?;
        check_point(x)?;
        Ok(match self.convention {
            SurvivalConvention::Exclusive => upper_tail(lambda, x),
            SurvivalConvention::Inclusive => upper_tail(lambda, x.ceil() - 1.0),
        })
    }

    fn ppf(&self, p: Probability, lambda: Real) -> Result<Real> {
        let dist = distribution(lambda)?;
        check_probability(p)?;
        if p == 0.0 {
            return Ok(-1.0);
        }
        if p == 1.0 {
            return Ok(Real::INFINITY);
        }
        let start = cornish_fisher(lambda, lower_score(p));
        let k = smallest_satisfying(start, |k| at_least(dist.cdf(k), p, SEARCH_ULPS))
            .map_err(|steps| search_failed("ppf", p, lambda, steps))?;
        trace!(p, lambda, k, "ppf search finished");
        Ok(k as Real)
    }

    fn isf(&self, p: Probability, lambda: Real) -> Result<Real> {
        check_lambda(lambda)?;
        check_probability(p)?;
        let shift = match self.convention {
            SurvivalConvention::Exclusive => 0.0,
            SurvivalConvention::Inclusive => 1.0,
        };
        if p == 0.0 {
            return Ok(Real::INFINITY);
        }
        if p == 1.0 {
            return Ok(-1.0 + shift);
        }
        let start = cornish_fisher(lambda, upper_score(p));
        let k = smallest_satisfying(start, |k| at_most(exceeds(lambda, k), p, SEARCH_ULPS))
            .map_err(|steps| search_failed("isf", p, lambda, steps))?;
        trace!(p, lambda, k, "isf search finished");
        Ok(k as Real + shift)
    }

    fn stats(&self, selector: &str, lambda: Real) -> Result<Moments> {
        check_lambda(lambda)?;
        Moments::select(selector, |m| match m {
            Moment::Mean | Moment::Variance => lambda,
            Moment::Skewness => lambda.sqrt().recip(),
            Moment::Kurtosis => lambda.recip(),
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_lambda(lambda: Real) -> Result<()> {
    ensure_param!(
        lambda.is_finite() && lambda > 0.0,
        "lambda must be positive and finite, got {lambda}"
    );
    Ok(())
}

fn distribution(lambda: Real) -> Result<Poisson> {
    check_lambda(lambda)?;
    Poisson::new(lambda).map_err(|e| Error::InvalidParameter(e.to_string()))
}

fn sampler(lambda: Real) -> Result<PoissonSampler<Real>> {
    check_lambda(lambda)?;
    PoissonSampler::new(lambda).map_err(|e| Error::InvalidParameter(e.to_string()))
}

fn check_point(x: Real) -> Result<()> {
    ensure_domain!(!x.is_nan(), "evaluation point must not be NaN");
    Ok(())
}

fn check_probability(p: Probability) -> Result<()> {
    ensure_domain!(
        (0.0..=1.0).contains(&p),
        "probability must be in [0, 1], got {p}"
    );
    Ok(())
}

/// `P(X ≤ ⌊x⌋)`.
fn lower_tail(dist: &Poisson, x: Real) -> Real {
    if x < 0.0 {
        return 0.0;
    }
    x.floor().to_u64().map_or(1.0, |k| dist.cdf(k))
}

/// `P(X > ⌊x⌋)`.
fn upper_tail(lambda: Real, x: Real) -> Real {
    if x < 0.0 {
        return 1.0;
    }
    x.floor().to_u64().map_or(0.0, |k| exceeds(lambda, k))
}

/// `P(X > k)`, the regularized lower incomplete gamma `P(k + 1, λ)`.
fn exceeds(lambda: Real, k: u64) -> Real {
    gamma_lr(k as Real + 1.0, lambda)
}

/// Standard normal score with lower-tail probability `p`.
///
/// Goes through `erfc_inv(2p)` rather than `erf_inv(2p - 1)`, which loses
/// every digit of `p` below `1e-16`.
fn lower_score(p: Probability) -> Real {
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Standard normal score with upper-tail probability `p`.
fn upper_score(p: Probability) -> Real {
    SQRT_2 * erfc_inv(2.0 * p)
}

/// Cornish–Fisher estimate of the quantile at normal score `z`, clamped
/// to the support.
fn cornish_fisher(lambda: Real, z: Real) -> u64 {
    let guess = if z.is_finite() {
        lambda + lambda.sqrt() * z + (z * z - 1.0) / 6.0
    } else {
        lambda
    };
    guess.max(0.0).floor().to_u64().unwrap_or(u64::MAX)
}

fn tick(steps: &mut u64) -> std::result::Result<(), u64> {
    if *steps == MAX_SEARCH_STEPS {
        return Err(*steps);
    }
    *steps += 1;
    Ok(())
}

/// Smallest `k` for which the monotone predicate holds.
///
/// Brackets outward from `start` with doubling strides until the predicate
/// changes, then bisects.  Returns the number of evaluations on failure.
fn smallest_satisfying<F>(start: u64, holds: F) -> std::result::Result<u64, u64>
where
    F: Fn(u64) -> bool,
{
    let mut steps = 0;
    let mut stride: u64 = 1;
    tick(&mut steps)?;
    // invariant once bracketed: !holds(lo) && holds(hi)
    let (mut lo, mut hi) = if holds(start) {
        let mut hi = start;
        loop {
            if hi == 0 {
                return Ok(0);
            }
            let below = hi.saturating_sub(stride);
            tick(&mut steps)?;
            if !holds(below) {
                break (below, hi);
            }
            hi = below;
            stride = stride.saturating_mul(2);
        }
    } else {
        let mut lo = start;
        loop {
            let above = lo.checked_add(stride).ok_or(steps)?;
            tick(&mut steps)?;
            if holds(above) {
                break (lo, above);
            }
            lo = above;
            stride = stride.saturating_mul(2);
        }
    };
    while hi - lo > 1 {
        tick(&mut steps)?;
        let mid = lo + (hi - lo) / 2;
        if holds(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    trace!(start, k = hi, steps, "inverse search bracketed");
    Ok(hi)
}

fn search_failed(op: &str, p: Probability, lambda: Real, steps: u64) -> Error {
    debug!(op, p, lambda, steps, "inverse search gave up");
    Error::Numerical(format!(
        "{op}({p}) for lambda = {lambda} did not converge within {steps} steps"
    ))
}
