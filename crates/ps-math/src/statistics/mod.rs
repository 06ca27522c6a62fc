//! Incremental sample statistics.
//!
//! [`Statistics`] accumulates samples one at a time with the streaming
//! central-moment updates of Welford and Terriberry, and reports the same
//! four moments a calculator's `stats` call does, so empirical and
//! theoretical moments can be compared directly.

use ps_core::{errors::Error, Real, Result};

use crate::moments::{Moment, Moments};

/// Incremental statistics accumulator.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    mean: Real,
    m2: Real,
    m3: Real,
    m4: Real,
    min: Real,
    max: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        let n1 = self.count as Real;
        self.count += 1;
        let n = self.count as Real;
        let delta = x - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1;
        self.mean += delta_n;
        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Number of samples.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sample mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then_some(self.mean)
    }

    /// Unbiased (Bessel-corrected) variance.  Returns `None` for fewer than
    /// 2 samples.
    pub fn variance(&self) -> Option<Real> {
        (self.count > 1).then(|| self.m2 / (self.count as Real - 1.0))
    }

    /// Standard deviation.  Returns `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(|v| v.sqrt())
    }

    /// Sample skewness `g1`.  Returns `None` for fewer than 2 samples or a
    /// constant sample.
    pub fn skewness(&self) -> Option<Real> {
        if self.count < 2 || self.m2 == 0.0 {
            return None;
        }
        let n = self.count as Real;
        Some(n.sqrt() * self.m3 / self.m2.powf(1.5))
    }

    /// Sample excess kurtosis `g2`.  Returns `None` for fewer than 2
    /// samples or a constant sample.
    pub fn excess_kurtosis(&self) -> Option<Real> {
        if self.count < 2 || self.m2 == 0.0 {
            return None;
        }
        let n = self.count as Real;
        Some(n * self.m4 / (self.m2 * self.m2) - 3.0)
    }

    /// Minimum sample value.  Returns `None` if no samples have been added.
    pub fn minimum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.min)
    }

    /// Maximum sample value.  Returns `None` if no samples have been added.
    pub fn maximum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.max)
    }

    /// The empirical moments named by `selector`.
    ///
    /// Fails with [`Error::Domain`] when a requested moment is undefined
    /// for the samples seen so far.
    pub fn moments(&self, selector: &str) -> Result<Moments> {
        Moment::parse_selector(selector)?
            .into_iter()
            .map(|m| {
                let value = match m {
                    Moment::Mean => self.mean(),
                    Moment::Variance => self.variance(),
                    Moment::Skewness => self.skewness(),
                    Moment::Kurtosis => self.excess_kurtosis(),
                };
                value.map(|v| (m, v)).ok_or_else(|| {
                    Error::Domain(format!("{m} undefined for {} samples", self.count))
                })
            })
            .collect()
    }

    /// Reset the accumulator to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<Real> for Statistics {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn basic_statistics() {
        let s: Statistics = [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().collect();
        assert_eq!(s.samples(), 5);
        assert_abs_diff_eq!(s.mean().unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.variance().unwrap(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.skewness().unwrap(), 0.0, epsilon = 1e-12);
        // population excess kurtosis of 1..=5 is -1.3
        assert_abs_diff_eq!(s.excess_kurtosis().unwrap(), -1.3, epsilon = 1e-12);
        assert_eq!(s.minimum(), Some(1.0));
        assert_eq!(s.maximum(), Some(5.0));
    }

    #[test]
    fn skewed_sample() {
        let s: Statistics = [0.0, 0.0, 0.0, 3.0].into_iter().collect();
        // m2 = 6.75, m3 = 10.125 → g1 = 2 * 10.125 / 6.75^1.5
        let expected = 2.0 * 10.125 / 6.75_f64.powf(1.5);
        assert_abs_diff_eq!(s.skewness().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn empty_statistics() {
        let mut s = Statistics::new();
        assert!(s.mean().is_none());
        assert!(s.variance().is_none());
        s.add(4.0);
        assert_eq!(s.mean(), Some(4.0));
        assert!(s.variance().is_none());
        assert!(matches!(s.moments("mv"), Err(Error::Domain(_))));
        s.reset();
        assert_eq!(s.samples(), 0);
    }

    #[test]
    fn moments_by_selector() {
        let s: Statistics = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        let m = s.moments("vm").unwrap();
        assert_eq!(m.len(), 2);
        assert_abs_diff_eq!(m.mean().unwrap(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.variance().unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert!(matches!(s.moments("q"), Err(Error::InvalidArgument(_))));
    }
}
