//! Scoped wall-clock timing for benchmark phases.
//!
//! Each measured region is bracketed by a [`PhaseTimer`]: construction
//! captures a monotonic [`Instant`], and the timer reports exactly once on
//! every exit path. The normal path is [`PhaseTimer::finish`], which hands
//! the caller a [`TimingSample`] to write wherever the transcript goes; if
//! a timer is instead dropped while still armed (early return, `?`
//! propagation, panic unwind), the report line is printed to standard
//! output so the measurement is never silently lost.
//!
//! [`timed_phase`] wraps the common pattern of timing one closure and
//! writing the sample as a line to the transcript writer.
//!
//! # Example
//!
//! ```
//! use seqbench_core::timer::PhaseTimer;
//!
//! let timer = PhaseTimer::start("demo");
//! let sample = timer.finish();
//! assert_eq!(sample.label, "demo");
//! assert!(sample.millis >= 0.0);
//! ```

use std::fmt;
use std::io::{self, Write};
use std::mem;
use std::time::Instant;

/// One finished wall-clock measurement.
///
/// `Display` renders the transcript's timing-line shape:
/// `"<label>: <millis> ms"` with the milliseconds formatted to two decimal
/// places. The stored value keeps full precision; rounding is a rendering
/// concern only.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSample {
    /// Label of the measured phase.
    pub label: String,
    /// Elapsed wall-clock time in milliseconds, unrounded.
    pub millis: f64,
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} ms", self.label, self.millis)
    }
}

/// A running scoped measurement over the monotonic clock.
///
/// Reports exactly once: either through [`finish`](Self::finish) (which
/// disarms the drop path) or, failing that, through `Drop`.
#[must_use = "a dropped timer reports to stdout instead of the transcript writer"]
#[derive(Debug)]
pub struct PhaseTimer {
    label: String,
    start: Instant,
    armed: bool,
}

impl PhaseTimer {
    /// Begins timing a phase with the given label.
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
            armed: true,
        }
    }

    /// Elapsed milliseconds since [`start`](Self::start), fractional and
    /// unrounded.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Stops the measurement and disarms the drop report.
    ///
    /// The caller decides where the returned sample is written.
    #[must_use]
    pub fn finish(mut self) -> TimingSample {
        self.armed = false;
        TimingSample {
            label: mem::take(&mut self.label),
            millis: self.elapsed_ms(),
        }
    }
}

impl Drop for PhaseTimer {
    fn drop(&mut self) {
        if self.armed {
            let sample = TimingSample {
                label: mem::take(&mut self.label),
                millis: self.elapsed_ms(),
            };
            println!("{sample}");
        }
    }
}

/// Runs `body` under a phase timer and writes the finished sample as one
/// line to `out`, returning the body's value.
///
/// This is the driver's workhorse: it routes timing lines through the same
/// writer as the rest of the transcript, so the full transcript is
/// capturable in tests.
///
/// # Errors
///
/// Returns any error from writing the timing line to `out`. The
/// measurement itself has already completed and been disarmed at that
/// point, so a failed write does not trigger a second report.
///
/// # Example
///
/// ```
/// use seqbench_core::timer::timed_phase;
///
/// let mut out = Vec::new();
/// let sum = timed_phase(&mut out, "sum", || 2 + 2).unwrap();
/// assert_eq!(sum, 4);
///
/// let line = String::from_utf8(out).unwrap();
/// assert!(line.starts_with("sum: "));
/// assert!(line.trim_end().ends_with(" ms"));
/// ```
pub fn timed_phase<W, F, T>(out: &mut W, label: &str, body: F) -> io::Result<T>
where
    W: Write + ?Sized,
    F: FnOnce() -> T,
{
    let timer = PhaseTimer::start(label);
    let value = body();
    writeln!(out, "{}", timer.finish())?;
    Ok(value)
}
