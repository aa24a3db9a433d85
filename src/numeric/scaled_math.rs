// ============================================================================
// Scaled-Integer Decimal Arithmetic
// Pure operations over a common power-of-ten scale
// ============================================================================
//
// Binary floating point cannot represent most decimal fractions, so adding
// 0.1 and 0.2 directly yields 0.30000000000000004. Each operation here
// instead removes the decimal separator from both operands' canonical text,
// computes on the resulting integers in i128, and divides the result by the
// appropriate power of ten. For typical decimal inputs this produces the
// exact decimal result.
//
// All operations are pure and hold no state between invocations.

use super::errors::{NumericError, NumericResult};
use super::operand::Operand;

/// 10^n in i128, checked.
fn pow10_int(n: u32) -> NumericResult<i128> {
    10i128.checked_pow(n).ok_or(NumericError::Overflow)
}

/// 10^n as f64. Exact for |n| <= 22.
#[inline]
fn pow10_float(n: i32) -> f64 {
    10f64.powi(n)
}

/// Align an operand to a common scale.
///
/// Strips the decimal separator from the canonical text and multiplies the
/// resulting digit integer by `10^(target_scale - decimal_places)`, so that
/// two operands aligned to the same `target_scale` can be combined with
/// plain integer arithmetic.
///
/// # Errors
/// - `ScaleMismatch` if `target_scale` is below the operand's decimal-place
///   count (alignment would need to discard digits)
/// - `Overflow` if the aligned integer exceeds the i128 range
pub fn to_scaled_integer(x: Operand, target_scale: u32) -> NumericResult<i128> {
    let places = x.decimal_places();
    if target_scale < places {
        return Err(NumericError::ScaleMismatch);
    }

    let shift = pow10_int(target_scale - places)?;
    x.raw_digits()?
        .checked_mul(shift)
        .ok_or(NumericError::Overflow)
}

/// Decimal-exact addition.
///
/// Both operands are aligned to `max(decimal_places(a), decimal_places(b))`,
/// summed as integers, and divided back by that scale.
pub fn add(a: Operand, b: Operand) -> NumericResult<Operand> {
    let scale = a.decimal_places().max(b.decimal_places());
    let sum = to_scaled_integer(a, scale)?
        .checked_add(to_scaled_integer(b, scale)?)
        .ok_or(NumericError::Overflow)?;

    Operand::from_value(sum as f64 / pow10_float(scale as i32))
}

/// Decimal-exact subtraction. Same scaling as [`add`].
pub fn sub(a: Operand, b: Operand) -> NumericResult<Operand> {
    let scale = a.decimal_places().max(b.decimal_places());
    let diff = to_scaled_integer(a, scale)?
        .checked_sub(to_scaled_integer(b, scale)?)
        .ok_or(NumericError::Overflow)?;

    Operand::from_value(diff as f64 / pow10_float(scale as i32))
}

/// Decimal-exact multiplication.
///
/// No common-scale alignment is needed: the raw digit integers are
/// multiplied and the product's implicit scale is the sum of both operands'
/// decimal-place counts.
pub fn mul(a: Operand, b: Operand) -> NumericResult<Operand> {
    let scale = a.decimal_places() + b.decimal_places();
    let product = a
        .raw_digits()?
        .checked_mul(b.raw_digits()?)
        .ok_or(NumericError::Overflow)?;

    Operand::from_value(product as f64 / pow10_float(scale as i32))
}

/// Division.
///
/// The raw digit integers are divided as a floating quotient, then the
/// decimal placement is corrected by multiplying with
/// `10^(decimal_places(b) - decimal_places(a))` through [`mul`].
///
/// The floating quotient step can reintroduce binary rounding when the
/// quotient is not exactly representable; [`mul`] still recovers the exact
/// result whenever the quotient itself is decimal-exact.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero; never a numeric value.
pub fn div(a: Operand, b: Operand) -> NumericResult<Operand> {
    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    let quotient = a.raw_digits()? as f64 / b.raw_digits()? as f64;
    let correction = pow10_float(b.decimal_places() as i32 - a.decimal_places() as i32);

    mul(
        Operand::from_value(quotient)?,
        Operand::from_value(correction)?,
    )
}
