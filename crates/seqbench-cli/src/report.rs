//! Transcript line formatting.
//!
//! The transcript has two line families: timing lines, rendered by
//! [`TimingSample`](seqbench_core::TimingSample)'s `Display`
//! (`"<label>: <millis> ms"`), and the value lines built here. The two
//! shapes are distinct (`:` plus ` ms` suffix versus `=`), so no
//! transcript line is ambiguous.

use std::fmt;

/// Section header for one benchmark phase.
#[must_use]
pub fn phase_header(title: &str) -> String {
    format!("== {title} ==")
}

/// Preview line: the label, a colon, then at most `limit` values
/// space-separated. A container with no elements yields the bare label
/// and colon.
///
/// # Example
///
/// ```
/// use seqbench_cli::report::preview_line;
///
/// let values = [3, -5, 7, -5, 0];
/// assert_eq!(preview_line("vec", values.iter(), 3), "vec: 3 -5 7");
/// ```
#[must_use]
pub fn preview_line<I>(label: &str, values: I, limit: usize) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut line = String::from(label);
    line.push(':');
    for value in values.into_iter().take(limit) {
        line.push(' ');
        line.push_str(&value.to_string());
    }
    line
}

/// Mean value line, three decimal places.
#[must_use]
pub fn mean_line(label: &str, value: f64) -> String {
    format!("{label} mean = {value:.3}")
}

/// Variance value line, one decimal place.
#[must_use]
pub fn variance_line(label: &str, value: f64) -> String {
    format!("{label} variance = {value:.1}")
}
