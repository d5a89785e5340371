//! Numeric element abstraction for the measurement kernels.
//!
//! The benchmarked containers hold plain integers, but the statistics
//! kernels accumulate in `f64` regardless of the element type. The
//! [`SequenceElement`] trait captures everything a kernel needs from an
//! element: it can be copied, ordered, printed in a preview line, and
//! converted to `f64` for accumulation. A blanket implementation covers
//! every primitive numeric type.

use std::fmt;

use num_traits::ToPrimitive;

/// Trait for numeric types that can populate a benchmarked sequence.
///
/// Implemented automatically for any `Copy + PartialOrd + Display`
/// type that supports [`ToPrimitive`], which includes all primitive
/// integers and floats.
///
/// # Example
///
/// ```
/// use seqbench_core::SequenceElement;
///
/// assert_eq!(5_i32.as_f64(), 5.0);
/// assert_eq!((-3_i64).as_f64(), -3.0);
/// assert_eq!(2.5_f32.as_f64(), 2.5);
/// ```
pub trait SequenceElement: Copy + PartialOrd + fmt::Display + ToPrimitive {
    /// Converts the element to `f64` for statistical accumulation.
    ///
    /// All primitive integer and float types convert; a value with no
    /// `f64` representation at all degrades to NaN, which cannot happen
    /// for the element types the harness uses.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> SequenceElement for T where T: Copy + PartialOrd + fmt::Display + ToPrimitive {}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    // ==================== Conversion Tests ====================

    #[test]
    fn test_integer_conversion_is_exact() {
        assert_eq!(0_i32.as_f64(), 0.0);
        assert_eq!(100_i32.as_f64(), 100.0);
        assert_eq!((-100_i32).as_f64(), -100.0);
        assert_eq!(i32::MAX.as_f64(), 2_147_483_647.0);
        assert_eq!(i32::MIN.as_f64(), -2_147_483_648.0);
    }

    #[test]
    fn test_wider_types_convert() {
        assert_eq!(1_u8.as_f64(), 1.0);
        assert_eq!(7_u64.as_f64(), 7.0);
        assert_eq!((-9_i64).as_f64(), -9.0);
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(1.5_f64.as_f64(), 1.5);
        assert_eq!((-0.25_f32).as_f64(), -0.25);
    }
}
