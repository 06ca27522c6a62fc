//! Error types for pstats.
//!
//! Every failure in the library is a variant of the single
//! `thiserror`-derived [`Error`] enum.  Distribution facades never create
//! errors of their own beyond construction; they relay whatever their
//! calculator returns.  The `ensure!` family of macros keeps argument checks
//! on one line.

use thiserror::Error;

/// The top-level error type used throughout pstats.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Invalid argument supplied by the caller (e.g. a null collaborator or
    /// an unknown moment selector).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid distribution parameter (e.g. `lambda <= 0`).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Evaluation point or probability outside the valid range.
    #[error("domain error: {0}")]
    Domain(String),

    /// Numerical failure (e.g. an inverse search that did not converge).
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Not implemented.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Shorthand `Result` type used throughout pstats.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ps_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ps_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ps_core::{ensure_post, errors::Error};
/// fn compute(x: f64) -> ps_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result > 0.0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ps_core::{ensure_param, errors::Error};
/// fn rate(lambda: f64) -> ps_core::errors::Result<f64> {
///     ensure_param!(lambda > 0.0, "lambda must be positive, got {lambda}");
///     Ok(lambda)
/// }
/// assert_eq!(
///     rate(0.0),
///     Err(Error::InvalidParameter("lambda must be positive, got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure_param {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ps_core::{ensure_domain, errors::Error};
/// fn prob(p: f64) -> ps_core::errors::Result<f64> {
///     ensure_domain!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
///     Ok(p)
/// }
/// assert!(prob(0.5).is_ok());
/// assert!(matches!(prob(1.5), Err(Error::Domain(_))));
/// ```
#[macro_export]
macro_rules! ensure_domain {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ps_core::{fail, errors::Error};
/// fn always_err() -> ps_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(lambda: f64, p: f64) -> Result<f64> {
        crate::ensure_param!(lambda.is_finite() && lambda > 0.0, "bad lambda {lambda}");
        crate::ensure_domain!((0.0..=1.0).contains(&p), "bad p {p}");
        Ok(lambda * p)
    }

    #[test]
    fn macros_map_to_variants() {
        assert_eq!(checked(2.0, 0.5), Ok(1.0));
        assert!(matches!(checked(-1.0, 0.5), Err(Error::InvalidParameter(_))));
        assert!(matches!(checked(f64::NAN, 0.5), Err(Error::InvalidParameter(_))));
        assert!(matches!(checked(1.0, 2.0), Err(Error::Domain(_))));
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Domain("p must be in [0, 1]".into()).to_string(),
            "domain error: p must be in [0, 1]"
        );
        assert_eq!(
            Error::Numerical("no convergence".into()).to_string(),
            "numerical error: no convergence"
        );
    }
}
