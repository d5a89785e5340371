//! Measurement kernels for the seqbench container micro-benchmark.
//!
//! This crate holds the pieces the harness binary assembles into its fixed
//! pipeline: run parameters ([`BenchConfig`]), scoped wall-clock timing
//! ([`PhaseTimer`], [`timed_phase`]), uniform random source generation
//! ([`source`]), the optimizer-proof sequential scan ([`sink_scan`]), and
//! single-pass statistics ([`mean`], [`variance`], [`RunningMoments`]).
//!
//! Everything is single-threaded by contract: the harness attributes every
//! measured millisecond to one container and one workload, so no kernel
//! spawns threads or interleaves work.
//!
//! # Quick Start
//!
//! ```
//! use seqbench_core::source::uniform_series;
//! use seqbench_core::{mean, sink_scan, variance};
//!
//! let data = uniform_series(1_000, 42, -100, 100);
//! sink_scan(data.iter().copied(), 3);
//!
//! let m = mean(data.iter().copied());
//! let v = variance(data.iter().copied());
//! assert!(m.abs() <= 100.0);
//! assert!(v >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod scan;
pub mod source;
pub mod stats;
pub mod timer;
pub mod traits;
pub mod utils;

pub use config::{BenchConfig, Element};
pub use scan::sink_scan;
pub use stats::{mean, variance, RunningMoments};
pub use timer::{timed_phase, PhaseTimer, TimingSample};
pub use traits::SequenceElement;
