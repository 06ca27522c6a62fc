//! Global library settings.
//!
//! [`Settings`] holds the process-wide defaults that distribution facades
//! and calculators read **once, at construction**:
//!
//! * [`AliasMode`] — how a facade's `pdf` alias forwards to its calculator;
//! * [`SurvivalConvention`] — whether `sf(x)` is `P(X > x)` or `P(X ≥ x)`;
//! * the default RNG seed used by calculators built without an explicit one.
//!
//! Changing a setting never affects instances that already exist, so every
//! facade stays immutable for its whole lifetime.  The values live behind a
//! `Mutex` so that they can be changed from any thread; use
//! [`ScopedSettings`] in tests to restore the previous values on drop.

use std::sync::{Mutex, OnceLock};

/// How a distribution's `pdf` alias forwards to its calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AliasMode {
    /// `pdf(x)` computes exactly what `pmf(x)` computes.
    #[default]
    Corrected,
    /// `pdf(x)` calls the calculator's single-argument `pmf` entry point,
    /// without the rate parameter.  Kept for parity with consumers that
    /// depend on the historical forwarding.
    Legacy,
}

/// Which tail the survival function covers at an integer point `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SurvivalConvention {
    /// `sf(k) = P(X > k)`, so that `cdf(k) + sf(k) = 1`.
    #[default]
    Exclusive,
    /// `sf(k) = P(X ≥ k)`, so that `cdf(k - 1) + sf(k) = 1`.
    Inclusive,
}

/// A point-in-time copy of every setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SettingsSnapshot {
    /// Default alias mode for new facades.
    pub alias_mode: AliasMode,
    /// Default survival convention for new calculators.
    pub survival_convention: SurvivalConvention,
    /// Default RNG seed for new calculators; `None` means "seed from entropy".
    pub seed: Option<u64>,
}

/// Process-wide settings used by the pstats library.
pub struct Settings {
    state: Mutex<SettingsSnapshot>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            state: Mutex::new(SettingsSnapshot::default()),
        })
    }

    /// Copy of all current values.
    pub fn snapshot(&self) -> SettingsSnapshot {
        *self.state.lock().expect("Settings mutex poisoned")
    }

    /// Replace all values at once.
    pub fn restore(&self, snapshot: SettingsSnapshot) {
        *self.state.lock().expect("Settings mutex poisoned") = snapshot;
    }

    /// Default alias mode for new facades.
    pub fn alias_mode(&self) -> AliasMode {
        self.snapshot().alias_mode
    }

    /// Set the default alias mode for facades created from now on.
    pub fn set_alias_mode(&self, mode: AliasMode) {
        self.state.lock().expect("Settings mutex poisoned").alias_mode = mode;
    }

    /// Default survival convention for new calculators.
    pub fn survival_convention(&self) -> SurvivalConvention {
        self.snapshot().survival_convention
    }

    /// Set the default survival convention for calculators created from now on.
    pub fn set_survival_convention(&self, convention: SurvivalConvention) {
        self.state
            .lock()
            .expect("Settings mutex poisoned")
            .survival_convention = convention;
    }

    /// Default RNG seed.  Returns `None` if no seed has been set.
    pub fn seed(&self) -> Option<u64> {
        self.snapshot().seed
    }

    /// Set the default RNG seed for calculators created from now on.
    pub fn set_seed(&self, seed: u64) {
        self.state.lock().expect("Settings mutex poisoned").seed = Some(seed);
    }

    /// Clear the default seed, so new calculators seed from OS entropy.
    pub fn reset_seed(&self) {
        self.state.lock().expect("Settings mutex poisoned").seed = None;
    }

    /// Reset every setting to its default.
    pub fn reset(&self) {
        self.restore(SettingsSnapshot::default());
    }
}

/// Guard that restores the settings it found on creation when dropped.
///
/// ```
/// use ps_core::{AliasMode, ScopedSettings, Settings};
///
/// let before = Settings::instance().alias_mode();
/// {
///     let _guard = ScopedSettings::new();
///     Settings::instance().set_alias_mode(AliasMode::Legacy);
///     assert_eq!(Settings::instance().alias_mode(), AliasMode::Legacy);
/// }
/// assert_eq!(Settings::instance().alias_mode(), before);
/// ```
#[must_use = "settings are restored when the guard is dropped"]
pub struct ScopedSettings {
    saved: SettingsSnapshot,
}

impl ScopedSettings {
    /// Capture the current settings.
    pub fn new() -> Self {
        Self {
            saved: Settings::instance().snapshot(),
        }
    }
}

impl Default for ScopedSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedSettings {
    fn drop(&mut self) {
        Settings::instance().restore(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only this test mutates the singleton inside this crate's unit tests.
    #[test]
    fn scoped_settings_restore() {
        let before = Settings::instance().snapshot();
        {
            let _guard = ScopedSettings::new();
            let s = Settings::instance();
            s.set_alias_mode(AliasMode::Legacy);
            s.set_survival_convention(SurvivalConvention::Inclusive);
            s.set_seed(42);
            assert_eq!(
                s.snapshot(),
                SettingsSnapshot {
                    alias_mode: AliasMode::Legacy,
                    survival_convention: SurvivalConvention::Inclusive,
                    seed: Some(42),
                }
            );
            s.reset_seed();
            assert_eq!(s.seed(), None);
        }
        assert_eq!(Settings::instance().snapshot(), before);
    }

    #[test]
    fn defaults() {
        let d = SettingsSnapshot::default();
        assert_eq!(d.alias_mode, AliasMode::Corrected);
        assert_eq!(d.survival_convention, SurvivalConvention::Exclusive);
        assert_eq!(d.seed, None);
    }
}
