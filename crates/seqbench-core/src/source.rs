//! Random source data generation.
//!
//! The harness copies one shared, randomly generated buffer into every
//! candidate container, so all measurements see identical input within a
//! run. Two generation paths exist:
//!
//! - [`generate_source`] seeds from OS entropy; every process run sees
//!   different data and runs are not reproducible, by design.
//! - [`uniform_series`] takes an explicit seed (`ChaCha8Rng`); unit tests,
//!   property tests, and benches use it so measured inputs are identical
//!   across runs.
//!
//! Both draw independent values from the inclusive uniform integer
//! distribution `[min, max]`.

use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{BenchConfig, Element};

/// Fills `buffer` with independent draws from the inclusive uniform
/// distribution `[min, max]`.
///
/// # Panics
///
/// Panics if `min > max`. An inverted range is a programmer error, not a
/// recoverable condition.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use seqbench_core::source::fill_uniform;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let mut buffer = [0_i32; 8];
/// fill_uniform(&mut rng, &mut buffer, 5, 5);
/// assert_eq!(buffer, [5; 8]);
/// ```
pub fn fill_uniform<T, R>(rng: &mut R, buffer: &mut [T], min: T, max: T)
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    let dist = Uniform::new_inclusive(min, max).expect("uniform range requires min <= max");
    for slot in buffer.iter_mut() {
        *slot = dist.sample(rng);
    }
}

/// Generates the source buffer for one benchmark run.
///
/// Allocates `config.element_count` elements and fills them from a fresh
/// entropy-seeded RNG, so consecutive runs see different data.
///
/// # Panics
///
/// Panics if `config.min_value > config.max_value`.
///
/// # Example
///
/// ```
/// use seqbench_core::source::generate_source;
/// use seqbench_core::BenchConfig;
///
/// let config = BenchConfig {
///     element_count: 32,
///     ..BenchConfig::default()
/// };
/// let data = generate_source(&config);
/// assert_eq!(data.len(), 32);
/// assert!(data
///     .iter()
///     .all(|v| (config.min_value..=config.max_value).contains(v)));
/// ```
#[must_use]
pub fn generate_source(config: &BenchConfig) -> Vec<Element> {
    let mut rng = rand::rng();
    let mut buffer = vec![0; config.element_count];
    fill_uniform(&mut rng, &mut buffer, config.min_value, config.max_value);
    buffer
}

/// Deterministic companion to [`generate_source`]: same distribution,
/// explicit seed, fully reproducible.
///
/// # Panics
///
/// Panics if `min > max`.
///
/// # Example
///
/// ```
/// use seqbench_core::source::uniform_series;
///
/// let a = uniform_series(256, 42, -100, 100);
/// let b = uniform_series(256, 42, -100, 100);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|v| (-100..=100).contains(v)));
/// ```
#[must_use]
pub fn uniform_series(len: usize, seed: u64, min: Element, max: Element) -> Vec<Element> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut buffer = vec![0; len];
    fill_uniform(&mut rng, &mut buffer, min, max);
    buffer
}
