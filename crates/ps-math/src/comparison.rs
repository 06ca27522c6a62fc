//! Floating-point comparison utilities.

use ps_core::Real;

/// Absolute band for [`close`] when comparing probabilities that are
/// summed from several tail evaluations.
pub const EPSILON: Real = 1e-10;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `|a - b| <= n * epsilon` where `epsilon` is the
/// machine-epsilon relative to `max(|a|, |b|)`.
///
/// Used by the inverse searches so that a probability which was itself
/// produced by `cdf`/`sf` maps back onto the point it came from.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = (a.abs().max(b.abs())) * f64::EPSILON * n as f64;
    (a - b).abs() <= eps
}

/// Return `true` if `a >= b` or `a` is [`close_enough`] to `b`.
#[inline]
pub fn at_least(a: Real, b: Real, n: u32) -> bool {
    a >= b || close_enough(a, b, n)
}

/// Return `true` if `a <= b` or `a` is [`close_enough`] to `b`.
#[inline]
pub fn at_most(a: Real, b: Real, n: u32) -> bool {
    a <= b || close_enough(a, b, n)
}
