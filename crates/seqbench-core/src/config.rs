//! Benchmark run parameters.
//!
//! The harness runs with one immutable parameter block, built once at
//! startup and passed by shared reference to every phase. The canonical
//! parameters (one million elements, ten scan passes, values in
//! `[-100, 100]`) come from [`BenchConfig::default`]; tests shrink them
//! to keep runs fast.

/// The element type held by the benchmarked containers.
pub type Element = i32;

/// Immutable parameters for one benchmark run.
///
/// The configuration is never mutated after construction; every consumer
/// takes `&BenchConfig`.
///
/// # Example
///
/// ```
/// use seqbench_core::BenchConfig;
///
/// let config = BenchConfig::default();
/// assert_eq!(config.element_count, 1_000_000);
/// assert_eq!(config.read_repeats, 10);
/// assert_eq!((config.min_value, config.max_value), (-100, 100));
/// ```
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of elements to generate and copy into each container.
    pub element_count: usize,
    /// Full front-to-back traversals per scan measurement.
    pub read_repeats: usize,
    /// Elements shown per container in the preview phase.
    pub display_count: usize,
    /// Inclusive lower bound of the generated values.
    ///
    /// Must not exceed `max_value`; an inverted range is a programmer
    /// error, not a recoverable condition.
    pub min_value: Element,
    /// Inclusive upper bound of the generated values.
    pub max_value: Element,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            element_count: 1_000_000,
            read_repeats: 10,
            display_count: 10,
            min_value: -100,
            max_value: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let config = BenchConfig::default();
        assert_eq!(config.element_count, 1_000_000);
        assert_eq!(config.read_repeats, 10);
        assert_eq!(config.display_count, 10);
        assert_eq!(config.min_value, -100);
        assert_eq!(config.max_value, 100);
        assert!(config.min_value <= config.max_value);
    }

    #[test]
    fn test_struct_update_syntax_for_test_configs() {
        let config = BenchConfig {
            element_count: 64,
            ..BenchConfig::default()
        };
        assert_eq!(config.element_count, 64);
        assert_eq!(config.read_repeats, 10);
    }
}
