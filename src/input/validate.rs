//! Coefficient text validation.

use crate::error::{PrecisionError, Result};

use super::MAX_COEFFICIENT_MAGNITUDE;

/// Shape of a coefficient string after scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `-?digits(.digits)?` and nothing else
    PlainDecimal,
    /// A decimal followed by an exponent marker
    Scientific,
    /// Anything else
    Malformed,
}

/// Classify coefficient text without parsing it.
fn scan(text: &str) -> Shape {
    let mut chars = text.chars().peekable();

    // Optional sign
    if let Some('-') = chars.peek() {
        chars.next();
    }

    // Integer part
    let mut int_digits = 0;
    while let Some(ch) = chars.peek() {
        if ch.is_ascii_digit() {
            int_digits += 1;
            chars.next();
        } else {
            break;
        }
    }
    if int_digits == 0 {
        return Shape::Malformed;
    }

    // Decimal part
    if let Some('.') = chars.peek() {
        chars.next();
        let mut frac_digits = 0;
        while let Some(ch) = chars.peek() {
            if ch.is_ascii_digit() {
                frac_digits += 1;
                chars.next();
            } else {
                break;
            }
        }
        if frac_digits == 0 {
            return Shape::Malformed;
        }
    }

    match chars.next() {
        None => Shape::PlainDecimal,
        Some('e' | 'E') => Shape::Scientific,
        Some(_) => Shape::Malformed,
    }
}

/// Parse a coefficient into a finite `f64`.
///
/// Accepts plain decimals only: an optional `-`, digits, and an optional
/// fractional part. Surrounding whitespace is ignored. Scientific notation
/// is refused even when the value would be small (`"1e2"`), and values
/// whose magnitude exceeds [`MAX_COEFFICIENT_MAGNITUDE`] are refused so the
/// discriminant cannot overflow.
pub fn validate(text: &str) -> Result<f64> {
    let trimmed = text.trim();

    match scan(trimmed) {
        Shape::PlainDecimal => {}
        Shape::Scientific => return Err(PrecisionError::scientific_notation(trimmed)),
        Shape::Malformed => return Err(PrecisionError::malformed(trimmed)),
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| PrecisionError::malformed(trimmed))?;

    if !value.is_finite() || value.abs() > MAX_COEFFICIENT_MAGNITUDE {
        return Err(PrecisionError::out_of_range(trimmed));
    }

    Ok(value)
}

/// Parse the leading coefficient `a`, which must also be nonzero.
pub fn validate_leading(text: &str) -> Result<f64> {
    let value = validate(text)?;
    if value == 0.0 {
        return Err(PrecisionError::ZeroLeadingCoefficient);
    }
    Ok(value)
}
