//! Mean and variance kernels.
//!
//! Both kernels accumulate in `f64` regardless of the element type and
//! return defined values for degenerate input instead of erroring: the
//! mean of an empty sequence is `0.0`, and the variance of an empty or
//! single-element sequence is `0.0`.
//!
//! Variance is **population** variance (divide by N, not N−1), computed
//! in a single pass with Welford's recurrence via [`RunningMoments`].
//! The single-pass form avoids the catastrophic cancellation of the naive
//! sum-of-squares formula and never revisits the data, so the variance
//! measurement traverses a container exactly once.

use crate::traits::SequenceElement;

/// Single-pass accumulator of count, running mean, and sum of squared
/// deviations (Welford's recurrence).
///
/// With no observations every reader returns `0.0`; pushing observations
/// updates the moments in O(1) each.
///
/// # Example
///
/// ```
/// use seqbench_core::stats::RunningMoments;
///
/// let mut moments = RunningMoments::new();
/// for v in [3.0, -5.0, 7.0, -5.0, 0.0] {
///     moments.push(v);
/// }
/// assert_eq!(moments.count(), 5);
/// assert!(moments.mean().abs() < 1e-9);
/// assert!((moments.population_variance() - 21.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RunningMoments {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Folds one observation into the moments.
    #[allow(clippy::cast_precision_loss)] // counts stay far below 2^53
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Number of observations pushed so far.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, `0.0` with no observations.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (divide by N) of the observations so far.
    ///
    /// Returns `0.0` for zero or one observation. Never negative: each
    /// Welford increment is the product of two same-signed factors.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // counts stay far below 2^53
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }
}

impl Default for RunningMoments {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic mean of a sequence: `f64` sum of all elements divided by
/// the count.
///
/// Returns `0.0` for an empty sequence. The plain sum/count form (rather
/// than the incremental Welford mean) keeps integer inputs that sum to
/// zero at exactly `0.0`.
///
/// # Example
///
/// ```
/// use seqbench_core::stats::mean;
///
/// let values = [3, -5, 7, -5, 0];
/// assert_eq!(mean(values.iter().copied()), 0.0);
/// assert_eq!(mean(std::iter::empty::<i32>()), 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // counts stay far below 2^53
pub fn mean<T, I>(values: I) -> f64
where
    T: SequenceElement,
    I: IntoIterator<Item = T>,
{
    let mut sum = 0.0;
    let mut count = 0_u64;
    for value in values {
        sum += value.as_f64();
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Population variance of a sequence, single pass.
///
/// Returns `0.0` for an empty or single-element sequence and is never
/// negative. Population semantics (divide by N, not N−1) are part of the
/// contract.
///
/// # Example
///
/// ```
/// use seqbench_core::stats::variance;
///
/// let values = [3, -5, 7, -5, 0];
/// assert!((variance(values.iter().copied()) - 21.6).abs() < 1e-9);
/// assert_eq!(variance([42].iter().copied()), 0.0);
/// ```
#[must_use]
pub fn variance<T, I>(values: I) -> f64
where
    T: SequenceElement,
    I: IntoIterator<Item = T>,
{
    let mut moments = RunningMoments::new();
    for value in values {
        moments.push(value.as_f64());
    }
    moments.population_variance()
}
