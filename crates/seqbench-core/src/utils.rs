//! Floating-point comparison helpers.
//!
//! Exact equality is the wrong tool for most `f64` results; these
//! tolerance-based comparisons back the crate's tests and are exposed for
//! downstream verification. Where the contract *is* exact (variance of a
//! constant sequence, mean of an empty one), tests compare directly
//! instead.

/// Verification tolerance for the statistics kernels.
///
/// Kernel results are expected to agree with high-precision references
/// within `1e-9` relative error.
pub const EPSILON: f64 = 1e-9;

/// Absolute approximate equality for `f64` values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, or
/// if both are NaN (for testing convenience).
///
/// # Example
///
/// ```
/// use seqbench_core::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(21.6, 21.6 + 1e-12, EPSILON));
/// assert!(!approx_eq(21.6, 21.7, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality for `f64` values.
///
/// The difference is scaled against the larger magnitude of the two
/// values, floored at `1.0` so results near zero compare absolutely.
///
/// # Example
///
/// ```
/// use seqbench_core::utils::relative_eq;
///
/// assert!(relative_eq(1.0e12, 1.0e12 + 1.0, 1e-9));
/// assert!(!relative_eq(1.0e12, 1.001e12, 1e-9));
/// assert!(relative_eq(0.0, 1e-12, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn relative_eq(a: f64, b: f64, rel_tolerance: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() < rel_tolerance * scale
}
