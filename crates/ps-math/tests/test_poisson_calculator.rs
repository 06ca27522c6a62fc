//! Property tests for the standard Poisson calculator.
//!
//! Complement conventions are exercised for both survival conventions, and
//! the inverse functions are checked against the forward ones.

use proptest::prelude::*;
use ps_core::{Real, SurvivalConvention};
use ps_math::comparison::EPSILON;
use ps_math::{close, PoissonCalculator, StandardPoissonCalculator, Statistics};

fn calculator(convention: SurvivalConvention) -> StandardPoissonCalculator {
    StandardPoissonCalculator::with_seed(1).with_convention(convention)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

proptest! {
    #[test]
    fn exclusive_complement(lambda in 0.05_f64..200.0, x in -5.0_f64..400.0) {
        let c = calculator(SurvivalConvention::Exclusive);
        let total = c.cdf(x, lambda).unwrap() + c.sf(x, lambda).unwrap();
        prop_assert!(close(total, 1.0, EPSILON), "cdf + sf = {total}");
    }

    #[test]
    fn inclusive_complement(lambda in 0.05_f64..200.0, k in 0_u32..400) {
        let c = calculator(SurvivalConvention::Inclusive);
        let x = Real::from(k);
        let total = c.cdf(x - 1.0, lambda).unwrap() + c.sf(x, lambda).unwrap();
        prop_assert!(close(total, 1.0, EPSILON), "cdf(x - 1) + sf(x) = {total}");
    }

    #[test]
    fn cdf_is_monotone(lambda in 0.05_f64..100.0, k in 0_u32..300) {
        let c = calculator(SurvivalConvention::Exclusive);
        let x = Real::from(k);
        prop_assert!(c.cdf(x, lambda).unwrap() <= c.cdf(x + 1.0, lambda).unwrap());
    }

    #[test]
    fn ppf_is_a_left_inverse(lambda in 0.05_f64..500.0, p in 0.000_001_f64..0.999_999) {
        let c = calculator(SurvivalConvention::Exclusive);
        let k = c.ppf(p, lambda).unwrap();
        prop_assert!(k >= 0.0 && k.fract() == 0.0);
        prop_assert!(c.cdf(k, lambda).unwrap() >= p * (1.0 - 1e-12));
        if k > 0.0 {
            prop_assert!(c.cdf(k - 1.0, lambda).unwrap() < p);
        }
    }

    #[test]
    fn isf_is_a_left_inverse(lambda in 0.05_f64..500.0, p in 0.000_001_f64..0.999_999) {
        let c = calculator(SurvivalConvention::Exclusive);
        let k = c.isf(p, lambda).unwrap();
        prop_assert!(k >= 0.0 && k.fract() == 0.0);
        prop_assert!(c.sf(k, lambda).unwrap() <= p * (1.0 + 1e-12));
        if k > 0.0 {
            prop_assert!(c.sf(k - 1.0, lambda).unwrap() > p);
        }
    }

    #[test]
    fn pmf_sums_to_cdf(lambda in 0.05_f64..30.0, k in 0_u32..60) {
        let c = calculator(SurvivalConvention::Exclusive);
        let sum: Real = (0..=k).map(|j| c.pmf(Real::from(j), lambda).unwrap()).sum();
        prop_assert!(close(sum, c.cdf(Real::from(k), lambda).unwrap(), EPSILON));
    }
}

#[test]
fn empirical_moments_match_theory() {
    init_tracing();
    let c = StandardPoissonCalculator::with_seed(20_240_101);
    for lambda in [0.5, 4.0, 30.0] {
        let stats: Statistics = (0..50_000).map(|_| c.rvs(lambda).unwrap()).collect();
        let empirical = stats.moments("mvs").unwrap();
        let theory = c.stats("mvs", lambda).unwrap();
        let sd = lambda.sqrt();
        for (moment, expected) in theory.iter() {
            let got = empirical.get(moment).unwrap();
            // generous bands: ~10 standard errors at n = 50k
            let band = match moment {
                ps_math::Moment::Mean => 10.0 * sd / 50_000_f64.sqrt(),
                _ => 0.1 * expected.abs().max(1.0),
            };
            assert!(
                (got - expected).abs() < band,
                "lambda {lambda}: {moment} = {got}, expected {expected}"
            );
        }
    }
}

#[test]
fn calculators_are_shareable_across_threads() {
    init_tracing();
    let c = std::sync::Arc::new(StandardPoissonCalculator::with_seed(5));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = std::sync::Arc::clone(&c);
            std::thread::spawn(move || {
                (0..1_000)
                    .map(|_| c.rvs(2.0).unwrap())
                    .sum::<Real>()
            })
        })
        .collect();
    let total: Real = handles.into_iter().map(|h| h.join().unwrap()).sum();
    let mean = total / 4_000.0;
    assert!((mean - 2.0).abs() < 0.2, "mean {mean}");
}

#[test]
fn ppf_median_for_large_lambda() {
    init_tracing();
    let c = calculator(SurvivalConvention::Exclusive);
    let k = c.ppf(0.5, 1.0e4).unwrap();
    assert!((k - 1.0e4).abs() < 2.0, "median {k}");
}
