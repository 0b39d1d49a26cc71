//! Significant-digit number formatting.
//!
//! Reproduces the C-style `%g` conversion: `precision` significant digits,
//! trailing zeros removed, and scientific notation only when the decimal
//! exponent is below -4 or at least `precision`.

/// Significant digits used for reported estimates.
pub const ESTIMATE_PRECISION: usize = 10;

/// Formats `value` with `precision` significant digits in `%g` style.
///
/// # Examples
///
/// ```rust
/// use sim_mcpi::format::format_significant;
///
/// assert_eq!(format_significant(std::f64::consts::PI, 10), "3.141592654");
/// assert_eq!(format_significant(4.0, 10), "4");
/// assert_eq!(format_significant(1.5e-7, 10), "1.5e-07");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);

    // The exponent after rounding to `precision` digits decides the style.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Formats an estimate at [`ESTIMATE_PRECISION`] significant digits.
#[inline]
pub fn format_estimate(value: f64) -> String {
    format_significant(value, ESTIMATE_PRECISION)
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
