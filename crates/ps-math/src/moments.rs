//! Moment selection and result mapping.
//!
//! A *selector* is a short string whose characters pick moments:
//! `m` (mean), `v` (variance), `s` (skewness) and `k` (excess kurtosis).
//! The conventional default is [`DEFAULT_MOMENTS`] (`"mv"`).

use std::collections::BTreeMap;
use std::fmt;

use ps_core::{errors::Error, Real, Result};

/// Selector used when the caller does not ask for specific moments.
pub const DEFAULT_MOMENTS: &str = "mv";

/// One of the four summary moments.
///
/// The declaration order is the canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Moment {
    /// First raw moment.
    Mean,
    /// Second central moment.
    Variance,
    /// Standardised third central moment.
    Skewness,
    /// Excess kurtosis (standardised fourth central moment minus 3).
    Kurtosis,
}

impl Moment {
    /// All moments in canonical order.
    pub const ALL: [Moment; 4] = [
        Moment::Mean,
        Moment::Variance,
        Moment::Skewness,
        Moment::Kurtosis,
    ];

    /// Selector character for this moment.
    pub fn symbol(self) -> char {
        match self {
            Moment::Mean => 'm',
            Moment::Variance => 'v',
            Moment::Skewness => 's',
            Moment::Kurtosis => 'k',
        }
    }

    /// Parse a selector character.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'm' => Some(Moment::Mean),
            'v' => Some(Moment::Variance),
            's' => Some(Moment::Skewness),
            'k' => Some(Moment::Kurtosis),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Moment::Mean => "mean",
            Moment::Variance => "variance",
            Moment::Skewness => "skewness",
            Moment::Kurtosis => "kurtosis",
        }
    }

    /// Parse a full selector string.
    ///
    /// Duplicates collapse and the result is in canonical order.  Any
    /// character outside `{m, v, s, k}` is an [`Error::InvalidArgument`].
    pub fn parse_selector(selector: &str) -> Result<Vec<Moment>> {
        let mut wanted = [false; 4];
        for c in selector.chars() {
            let m = Moment::from_symbol(c).ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown moment selector '{c}' in \"{selector}\" (expected any of m, v, s, k)"
                ))
            })?;
            wanted[m as usize] = true;
        }
        Ok(Moment::ALL
            .into_iter()
            .filter(|m| wanted[*m as usize])
            .collect())
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The moments returned by a `stats` call, keyed by [`Moment`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moments {
    values: BTreeMap<Moment, Real>,
}

impl Moments {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `f` for every moment named in `selector`.
    pub fn select<F>(selector: &str, mut f: F) -> Result<Self>
    where
        F: FnMut(Moment) -> Real,
    {
        Ok(Moment::parse_selector(selector)?
            .into_iter()
            .map(|m| (m, f(m)))
            .collect())
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, moment: Moment, value: Real) -> Option<Real> {
        self.values.insert(moment, value)
    }

    /// Look up a moment.
    pub fn get(&self, moment: Moment) -> Option<Real> {
        self.values.get(&moment).copied()
    }

    /// Mean, if it was requested.
    pub fn mean(&self) -> Option<Real> {
        self.get(Moment::Mean)
    }

    /// Variance, if it was requested.
    pub fn variance(&self) -> Option<Real> {
        self.get(Moment::Variance)
    }

    /// Skewness, if it was requested.
    pub fn skewness(&self) -> Option<Real> {
        self.get(Moment::Skewness)
    }

    /// Excess kurtosis, if it was requested.
    pub fn kurtosis(&self) -> Option<Real> {
        self.get(Moment::Kurtosis)
    }

    /// Whether `moment` is present.
    pub fn contains(&self, moment: Moment) -> bool {
        self.values.contains_key(&moment)
    }

    /// Number of moments held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no moment is held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Moment, Real)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }
}

impl FromIterator<(Moment, Real)> for Moments {
    fn from_iter<I: IntoIterator<Item = (Moment, Real)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Moments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (m, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{m}: {v}")?;
        }
        f.write_str("}")
    }
}
