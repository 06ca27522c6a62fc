//! Process-wide defaults are read once, when an instance is built.
//!
//! Kept in its own test binary because it mutates the global settings.

use ps_core::{AliasMode, Handle, ScopedSettings, Settings, SurvivalConvention};
use ps_distributions::{Poisson, ProbabilityDistribution};
use ps_math::StandardPoissonCalculator;

#[test]
fn defaults_are_captured_at_construction() {
    let _guard = ScopedSettings::new();
    let settings = Settings::instance();

    settings.set_alias_mode(AliasMode::Legacy);
    settings.set_survival_convention(SurvivalConvention::Inclusive);
    settings.set_seed(314);

    let calc = StandardPoissonCalculator::new();
    assert_eq!(calc.seed(), 314);
    assert_eq!(calc.convention(), SurvivalConvention::Inclusive);

    let legacy = Poisson::new(2.0, Handle::new(calc)).unwrap();
    let twin = Poisson::from_calculator(2.0, StandardPoissonCalculator::new());
    assert_eq!(legacy.alias_mode(), AliasMode::Legacy);
    assert_eq!(legacy.rvs_n(16).unwrap(), twin.rvs_n(16).unwrap());

    settings.reset();
    let corrected = Poisson::from_calculator(2.0, StandardPoissonCalculator::new());
    assert_eq!(corrected.alias_mode(), AliasMode::Corrected);
    assert_eq!(
        corrected.calculator().convention(),
        SurvivalConvention::Exclusive
    );

    // existing instances keep what they captured
    assert_eq!(legacy.alias_mode(), AliasMode::Legacy);
    assert!(legacy.pdf(1.0).is_err());
    assert_eq!(corrected.pdf(1.0).unwrap(), corrected.pmf(1.0).unwrap());
    assert_eq!(legacy.sf(0.0).unwrap(), 1.0);
}
