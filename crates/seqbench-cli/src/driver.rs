//! The fixed benchmark pipeline.
//!
//! One run is one pass through the phase sequence: generate the source
//! data, copy it into each candidate container, scan each candidate,
//! preview the leading elements, then compute mean and variance per
//! candidate. Every measured region writes exactly one timing line, and
//! the whole transcript (timing lines included) goes through the writer
//! handed to [`run`], so tests can capture it in memory.
//!
//! Ordering matters in one place: the no-reserve copy into the `Vec`
//! candidate is a growth diagnostic whose state is discarded, and every
//! phase after Copy reads the post-reservation copy instead.

use std::collections::{LinkedList, VecDeque};
use std::io::{self, Write};

use seqbench_core::source::generate_source;
use seqbench_core::{mean, sink_scan, timed_phase, variance, BenchConfig, Element, PhaseTimer};

use crate::report;

/// The three candidate containers after the copy phase, each holding the
/// source elements in order.
#[derive(Debug)]
pub struct Candidates {
    /// Contiguous dynamic array, in its post-reservation state.
    pub vec: Vec<Element>,
    /// Double-ended queue.
    pub deque: VecDeque<Element>,
    /// Doubly-linked list.
    pub list: LinkedList<Element>,
}

/// Executes the full benchmark pipeline, writing the transcript to `out`.
///
/// Phase order is fixed: generate, copy, scan, preview, mean, variance,
/// then a whole-run timing line.
///
/// # Errors
///
/// Returns any error from writing transcript lines to `out`. The
/// measurements themselves are infallible.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> io::Result<()> {
    let total = PhaseTimer::start("total");

    writeln!(out, "===== sequence container benchmark =====")?;
    writeln!(out, "elements: {}", config.element_count)?;

    writeln!(out)?;
    writeln!(out, "{}", report::phase_header("source generation"))?;
    let source = timed_phase(out, "source fill", || generate_source(config))?;

    writeln!(out)?;
    writeln!(out, "{}", report::phase_header("copy-in"))?;
    let candidates = copy_phase(&source, out)?;

    writeln!(out)?;
    let scan_title = format!("sequential scan ({} passes)", config.read_repeats);
    writeln!(out, "{}", report::phase_header(&scan_title))?;
    scan_phase(config, &candidates, out)?;

    writeln!(out)?;
    let preview_title = format!("first {} elements", config.display_count);
    writeln!(out, "{}", report::phase_header(&preview_title))?;
    preview_phase(config, &candidates, out)?;

    writeln!(out)?;
    writeln!(out, "{}", report::phase_header("mean"))?;
    mean_phase(&candidates, out)?;

    writeln!(out)?;
    writeln!(out, "{}", report::phase_header("variance"))?;
    variance_phase(&candidates, out)?;

    writeln!(out)?;
    writeln!(out, "{}", total.finish())?;
    Ok(())
}

/// Copies the source into each candidate.
///
/// The first `Vec` copy measures reallocation-driven growth: one `push`
/// per element into an unreserved vector. Its state is then cleared and
/// replaced by the reserved copy, which is what later phases read. The
/// clear and reserve run outside the timed regions; only the copies are
/// measured.
fn copy_phase<W: Write>(source: &[Element], out: &mut W) -> io::Result<Candidates> {
    let mut vec: Vec<Element> = Vec::new();
    let mut deque: VecDeque<Element> = VecDeque::new();
    let mut list: LinkedList<Element> = LinkedList::new();

    timed_phase(out, "vec copy (no reserve)", || {
        for &value in source {
            vec.push(value);
        }
    })?;

    vec.clear();
    vec.reserve(source.len());
    timed_phase(out, "vec copy (reserved)", || vec.extend_from_slice(source))?;

    timed_phase(out, "deque copy", || deque.extend(source.iter().copied()))?;
    timed_phase(out, "list copy", || list.extend(source.iter().copied()))?;

    Ok(Candidates { vec, deque, list })
}

fn scan_phase<W: Write>(
    config: &BenchConfig,
    candidates: &Candidates,
    out: &mut W,
) -> io::Result<()> {
    let passes = config.read_repeats;
    timed_phase(out, "vec scan", || {
        sink_scan(candidates.vec.iter().copied(), passes);
    })?;
    timed_phase(out, "deque scan", || {
        sink_scan(candidates.deque.iter().copied(), passes);
    })?;
    timed_phase(out, "list scan", || {
        sink_scan(candidates.list.iter().copied(), passes);
    })?;
    Ok(())
}

fn preview_phase<W: Write>(
    config: &BenchConfig,
    candidates: &Candidates,
    out: &mut W,
) -> io::Result<()> {
    let limit = config.display_count;
    writeln!(
        out,
        "{}",
        report::preview_line("vec", candidates.vec.iter(), limit)
    )?;
    writeln!(
        out,
        "{}",
        report::preview_line("deque", candidates.deque.iter(), limit)
    )?;
    writeln!(
        out,
        "{}",
        report::preview_line("list", candidates.list.iter(), limit)
    )?;
    Ok(())
}

fn mean_phase<W: Write>(candidates: &Candidates, out: &mut W) -> io::Result<()> {
    report_mean(out, "vec", candidates.vec.iter().copied())?;
    report_mean(out, "deque", candidates.deque.iter().copied())?;
    report_mean(out, "list", candidates.list.iter().copied())?;
    Ok(())
}

fn variance_phase<W: Write>(candidates: &Candidates, out: &mut W) -> io::Result<()> {
    report_variance(out, "vec", candidates.vec.iter().copied())?;
    report_variance(out, "deque", candidates.deque.iter().copied())?;
    report_variance(out, "list", candidates.list.iter().copied())?;
    Ok(())
}

fn report_mean<W, I>(out: &mut W, name: &str, values: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Element>,
{
    let label = format!("{name} mean");
    let value = timed_phase(out, &label, || mean(values))?;
    writeln!(out, "{}", report::mean_line(name, value))
}

fn report_variance<W, I>(out: &mut W, name: &str, values: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Element>,
{
    let label = format!("{name} variance");
    let value = timed_phase(out, &label, || variance(values))?;
    writeln!(out, "{}", report::variance_line(name, value))
}
