//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use trapcalc_core::constants::OUTPUT_PRECISION;

/// Format an integral value as fixed-point with four decimals.
#[must_use]
pub fn format_integral(value: f64) -> String {
    format!("{value:.prec$}", prec = OUTPUT_PRECISION)
}

/// Write the integral value followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_integral(out: &mut impl Write, value: f64) -> io::Result<()> {
    writeln!(out, "{}", format_integral(value))
}

/// Format a run duration with a unit suited to its magnitude.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    match d.as_nanos() {
        0..=999 => format!("{}ns", d.as_nanos()),
        1_000..=999_999 => format!("{:.1}µs", d.as_secs_f64() * 1e6),
        1_000_000..=999_999_999 => format!("{:.2}ms", d.as_secs_f64() * 1e3),
        _ if d.as_secs() < 60 => format!("{:.3}s", d.as_secs_f64()),
        _ => format!("{}m{:02}s", d.as_secs() / 60, d.as_secs() % 60),
    }
}

/// Group the digits of a count in threes.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a worker's half-open subinterval index range.
#[must_use]
pub fn format_range(start: u64, end: u64) -> String {
    format!("[{}, {})", format_number(start), format_number(end))
}
