//! Population time series output.
//!
//! The data file is plain text: a comment header, then one row per step of
//! three space-separated values in C `scientific` notation with three
//! decimals, e.g.
//!
//! ```text
//! # t |rho_gg| |rho_ee|
//! 0.000e+00 1.000e+00 0.000e+00
//! 1.257e-09 1.000e+00 1.974e-07
//! ```

use std::io::Write;

use crate::integrator::PopulationSample;

/// First line of every data file.
pub const HEADER: &str = "# t |rho_gg| |rho_ee|";

/// Decimals after the mantissa point in every row value.
pub const ROW_PRECISION: usize = 3;

/// Formats `value` as `d.ddde+XX`: `precision` decimals, explicit exponent
/// sign, at least two exponent digits.
///
/// ```rust
/// use sim_optbloch::output::format_scientific;
///
/// assert_eq!(format_scientific(1.0, 3), "1.000e+00");
/// assert_eq!(format_scientific(2.5133e-8, 3), "2.513e-08");
/// assert_eq!(format_scientific(0.0, 3), "0.000e+00");
/// ```
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let rust = format!("{:.*e}", precision, value);
    match rust.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => rust,
    }
}

/// Writes the header and rows of a population data file.
///
/// The header goes out on construction; call [`PopulationWriter::finish`]
/// to flush and recover the sink.
#[derive(Debug)]
pub struct PopulationWriter<W: Write> {
    sink: W,
    rows: usize,
}

impl<W: Write> PopulationWriter<W> {
    /// Writes [`HEADER`] to `sink`.
    pub fn new(mut sink: W) -> std::io::Result<Self> {
        writeln!(sink, "{}", HEADER)?;
        Ok(Self { sink, rows: 0 })
    }

    /// Appends one row.
    pub fn write_sample(&mut self, sample: &PopulationSample) -> std::io::Result<()> {
        writeln!(
            self.sink,
            "{} {} {}",
            format_scientific(sample.t, ROW_PRECISION),
            format_scientific(sample.ground, ROW_PRECISION),
            format_scientific(sample.excited, ROW_PRECISION)
        )?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the sink.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
