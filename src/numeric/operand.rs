// ============================================================================
// Operand
// A validated finite decimal value with a canonical text form
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A finite decimal operand.
///
/// Wraps an `f64` that is guaranteed finite, and defines the canonical text
/// form every scaled-integer operation works from.
///
/// # Canonicalization
///
/// The canonical text is Rust's shortest round-trip `Display` output for
/// `f64`: plain decimal notation, `.` separator, no locale variance, never
/// scientific. Trailing zeros are not preserved: parsing `"1.50"` yields the
/// canonical text `"1.5"`, so its decimal-place count is 1. Scale selection
/// in the arithmetic module always follows this canonical form.
///
/// # Example
/// ```
/// use calculator_engine::numeric::Operand;
///
/// let x = Operand::parse("1.50").unwrap();
/// assert_eq!(x.canonical_text(), "1.5");
/// assert_eq!(x.decimal_places(), 1);
/// assert_eq!(x.raw_digits().unwrap(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Operand(f64);

impl Operand {
    /// Zero operand
    pub const ZERO: Self = Self(0.0);

    /// Parse from user-entered display text.
    ///
    /// This is the validated parse step at the UI boundary: the text is
    /// checked with `rust_decimal` before any numeric conversion, which
    /// rejects malformed input and scientific notation outright. A single
    /// trailing separator (mid-entry text such as `"12."`) is accepted as
    /// the integer value.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the text is not a plain decimal number.
    pub fn parse(text: &str) -> NumericResult<Self> {
        let trimmed = text.trim();
        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let validated = Decimal::from_str(trimmed).map_err(|_| NumericError::InvalidInput)?;

        use rust_decimal::prelude::ToPrimitive;
        let value = validated.to_f64().ok_or(NumericError::InvalidInput)?;

        Self::from_value(value)
    }

    /// Create from an already-computed numeric value.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN or infinite values, which have no
    /// canonical decimal text.
    #[inline]
    pub fn from_value(value: f64) -> NumericResult<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(NumericError::NonFinite)
        }
    }

    /// Get the numeric value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if the operand is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// The canonical text form (see type-level docs).
    pub fn canonical_text(self) -> String {
        format!("{}", self.0)
    }

    /// Count of digits after the decimal separator in the canonical text.
    ///
    /// Zero when the value has no fractional part. This is a property of the
    /// text form, not of the binary value: it decides which power of ten the
    /// arithmetic module scales by.
    pub fn decimal_places(self) -> u32 {
        let text = self.canonical_text();
        match text.find('.') {
            Some(pos) => (text.len() - pos - 1) as u32,
            None => 0,
        }
    }

    /// The operand's digits with the decimal separator removed, as an
    /// integer. Implicitly scaled by `10^decimal_places()`.
    ///
    /// # Errors
    /// Returns `Overflow` if the digit string exceeds the i128 range.
    pub fn raw_digits(self) -> NumericResult<i128> {
        let digits = self.canonical_text().replace('.', "");
        digits.parse().map_err(|_| NumericError::Overflow)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Operand {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        let x = Operand::parse("42").unwrap();
        assert_eq!(x.value(), 42.0);
        assert_eq!(x.decimal_places(), 0);
        assert_eq!(x.raw_digits().unwrap(), 42);
    }

    #[test]
    fn test_parse_fractional() {
        let x = Operand::parse("-0.001").unwrap();
        assert_eq!(x.canonical_text(), "-0.001");
        assert_eq!(x.decimal_places(), 3);
        assert_eq!(x.raw_digits().unwrap(), -1);
    }

    #[test]
    fn test_parse_trailing_separator() {
        // Mid-entry text like "12." counts as the integer
        let x = Operand::parse("12.").unwrap();
        assert_eq!(x.value(), 12.0);
        assert_eq!(x.decimal_places(), 0);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Operand::parse(""), Err(NumericError::InvalidInput));
        assert_eq!(Operand::parse("Error"), Err(NumericError::InvalidInput));
        assert_eq!(Operand::parse("1.2.3"), Err(NumericError::InvalidInput));
        // Scientific notation is out of scope
        assert_eq!(Operand::parse("1e5"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_canonicalization_drops_trailing_zeros() {
        let x = Operand::parse("1.50").unwrap();
        assert_eq!(x.canonical_text(), "1.5");
        assert_eq!(x.decimal_places(), 1);
        assert_eq!(x.raw_digits().unwrap(), 15);
    }

    #[test]
    fn test_from_value_rejects_non_finite() {
        assert_eq!(Operand::from_value(f64::NAN), Err(NumericError::NonFinite));
        assert_eq!(
            Operand::from_value(f64::INFINITY),
            Err(NumericError::NonFinite)
        );
    }

    #[test]
    fn test_display_matches_canonical_text() {
        let x = Operand::parse("3.30").unwrap();
        assert_eq!(x.to_string(), "3.3");
        assert_eq!(x.to_string(), x.canonical_text());
    }
}
