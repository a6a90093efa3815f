//! Free-text to typed-value coercion for form fields.
//!
//! Numeric inputs arrive as raw strings from whatever surface hosts the
//! form. Coercion is total: any input maps to either a typed value or
//! absence, never an error. A leading numeric prefix is accepted and
//! trailing garbage ignored, so "120 mmHg" coerces to 120 while "abc"
//! coerces to nothing. Zero is a value, not an absence.

/// Parses the leading integer of `raw`, after trimming whitespace.
///
/// Returns `None` when no digits lead the input or the value overflows.
pub fn int_field(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let sign_len = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Parses the leading decimal number of `raw`, after trimming whitespace.
///
/// Accepts an optional sign, an integer part, and an optional fraction.
/// No rounding is applied; "98.6" stays 98.6.
pub fn decimal_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}
