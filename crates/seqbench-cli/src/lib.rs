//! Library surface of the seqbench binary.
//!
//! The binary itself is a thin shell; the pipeline ([`driver`]) and the
//! transcript formatting ([`report`]) live here so integration tests can
//! drive the full run against an in-memory writer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod driver;
pub mod report;

pub use driver::{run, Candidates};
