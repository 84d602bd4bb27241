//! Number formatting that matches the conventions of the report layout.
//!
//! Scientific notation always carries an explicit exponent sign and at least
//! two exponent digits (`7.33e+10`, `1.00e-05`). Grouped values use `,` as
//! the thousands separator.

/// Fixed-point with `decimals` places, e.g. `fixed(360.0, 2) == "360.00"`.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    format!("{value:.decimals$}")
}

/// Scientific notation with `decimals` mantissa places, e.g. `"7.33e+10"`.
pub fn scientific(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    pad_exponent(&format!("{value:.decimals$e}"))
}

/// Fixed-point with thousands grouping, e.g. `grouped_fixed(31000.0, 0) == "31,000"`.
pub fn grouped_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    group(&format!("{value:.decimals$}"))
}

/// Shortest round-trip representation with thousands grouping.
///
/// Whole numbers keep a trailing `.0` (`3000.0` → `"3,000.0"`). Magnitudes at
/// or above `1e16`, or below `1e-4`, switch to exponent form without grouping.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return pad_exponent(&format!("{value:e}"));
    }
    let mut repr = format!("{value}");
    if !repr.contains('.') {
        repr.push_str(".0");
    }
    group(&repr)
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_positive() {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

fn pad_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted.to_string(),
    }
}

fn group(repr: &str) -> String {
    let (sign, unsigned) = match repr.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", repr),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(repr.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
