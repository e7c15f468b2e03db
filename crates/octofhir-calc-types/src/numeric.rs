//! Numeric utilities shared by every evaluator
//!
//! All functions use `f64::NAN` as the "not a number" sentinel: a missing or
//! unparsable input becomes NaN, and every helper passes NaN through untouched
//! so an evaluator can check validity once, right before it builds its lines.

/// Parse a free-form number field.
///
/// Leading and trailing whitespace is ignored, a single decimal comma is
/// accepted in place of a decimal point (`"3,5"` is `3.5`), and trailing text
/// after the numeric prefix is ignored (`"120 mmHg"` is `120`). Empty,
/// non-numeric and non-finite input yields NaN.
///
/// Thousands separators are not recognized. A lone comma is always a
/// decimal comma, so `"1,000"` is `1`, and with two or more commas parsing
/// stops at the first one (`"1,000,000"` is also `1`).
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    match numeric_prefix(&normalized).and_then(|prefix| prefix.parse::<f64>().ok()) {
        Some(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}

/// Longest leading `[sign] digits [. digits] [e [sign] digits]` run, with a
/// zero inserted before a bare leading fraction.
fn numeric_prefix(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let sign_end = end;

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let mut prefix = String::with_capacity(end + 1);
    prefix.push_str(&s[..sign_end]);
    if int_digits == 0 {
        prefix.push('0');
    }
    prefix.push_str(&s[sign_end..end]);
    Some(prefix)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Bound `n` into `[lo, hi]`; NaN stays NaN.
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    if !n.is_finite() {
        return f64::NAN;
    }
    n.max(lo).min(hi)
}

/// Round half away from zero to `digits` decimal places.
///
/// Uses the multiply/round/divide technique, so the result carries the usual
/// binary floating-point representation error.
pub fn round(n: f64, digits: i32) -> f64 {
    if !n.is_finite() {
        return f64::NAN;
    }
    let p = 10f64.powi(digits);
    (n * p).round() / p
}

/// Display text for a rounded value. Negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    format!("{}", n + 0.0)
}
