//! Sinking sequential scan.
//!
//! The scan workload measures pure traversal speed: every element of the
//! candidate container is read front to back, several times over. Each
//! visited element passes through [`std::hint::black_box`], so the
//! traversals survive optimization; sinking only a final aggregate would
//! let dead-store elimination delete the loops being measured.

use std::hint::black_box;

/// Traverses `sequence` front to back `passes` times, routing every
/// visited element through the optimizer-proof sink.
///
/// The sequence is taken as a cheap re-iterable handle (for example
/// `vec.iter().copied()`), so each pass restarts from the front. The
/// scanned container is never mutated.
///
/// # Example
///
/// ```
/// use seqbench_core::scan::sink_scan;
///
/// let data = vec![1, 2, 3];
/// sink_scan(data.iter().copied(), 4);
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub fn sink_scan<I>(sequence: I, passes: usize)
where
    I: IntoIterator + Clone,
{
    for _ in 0..passes {
        for value in sequence.clone() {
            black_box(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use super::*;
    use crate::source::uniform_series;
    use crate::timer::PhaseTimer;

    // ==================== Container Coverage Tests ====================

    #[test]
    fn test_scans_all_three_container_types() {
        let source = uniform_series(1000, 11, -100, 100);
        let vec: Vec<i32> = source.clone();
        let deque: VecDeque<i32> = source.iter().copied().collect();
        let list: LinkedList<i32> = source.iter().copied().collect();

        sink_scan(vec.iter().copied(), 3);
        sink_scan(deque.iter().copied(), 3);
        sink_scan(list.iter().copied(), 3);

        // Scanning reads only; the containers are untouched.
        assert_eq!(vec, source);
        assert!(deque.iter().eq(source.iter()));
        assert!(list.iter().eq(source.iter()));
    }

    #[test]
    fn test_zero_passes_is_a_no_op() {
        let data = vec![1, 2, 3];
        sink_scan(data.iter().copied(), 0);
    }

    #[test]
    fn test_empty_sequence_is_a_no_op() {
        let data: Vec<i32> = Vec::new();
        sink_scan(data.iter().copied(), 10);
    }

    // ==================== Elimination Resistance Tests ====================

    #[test]
    fn test_large_scan_takes_measurable_time() {
        // If the compiler could delete the traversals, a hundred thousand
        // elements times ten passes would report zero elapsed time.
        let data = uniform_series(100_000, 5, -100, 100);
        let timer = PhaseTimer::start("scan");
        sink_scan(data.iter().copied(), 10);
        let sample = timer.finish();
        assert!(sample.millis > 0.0, "measured {} ms", sample.millis);
    }
}
