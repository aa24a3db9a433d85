// ============================================================================
// Button Input
// The delegated click event source, decoded into keypad inputs
// ============================================================================

use super::operator::Operator;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single keypad input, as reported by the UI's delegated click source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ButtonInput {
    /// A digit key, 0-9
    Digit(u8),
    /// The decimal separator key
    DecimalPoint,
    /// One of the four arithmetic operator keys
    Operator(Operator),
    /// The clear/reset key
    Clear,
    /// The equals key
    Calculate,
}

impl ButtonInput {
    /// Decode a button's action identifier.
    ///
    /// Action names follow the keypad's data attributes: digit keys carry
    /// their digit (`"0"`..`"9"`), the rest carry a verb (`"decimal"`,
    /// `"clear"`, `"calculate"`, or an operator name).
    ///
    /// # Errors
    /// Returns `InvalidInput` for unknown actions, so clicks that land
    /// outside the keypad are filtered at the boundary.
    pub fn from_action(action: &str) -> NumericResult<Self> {
        if let Ok(digit) = action.parse::<u8>() {
            if digit <= 9 {
                return Ok(ButtonInput::Digit(digit));
            }
            return Err(NumericError::InvalidInput);
        }

        match action {
            "decimal" => Ok(ButtonInput::DecimalPoint),
            "clear" => Ok(ButtonInput::Clear),
            "calculate" => Ok(ButtonInput::Calculate),
            _ => action.parse::<Operator>().map(ButtonInput::Operator),
        }
    }
}
