// ============================================================================
// Operator
// The four arithmetic operations selectable from the keypad
// ============================================================================

use crate::numeric::{scaled_math, NumericResult, Operand};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arithmetic operation over two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operation to two operands.
    ///
    /// Pure dispatch into the scaled-integer arithmetic module.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor; `Overflow` when the scaled
    /// integers exceed range.
    pub fn apply(self, a: Operand, b: Operand) -> NumericResult<Operand> {
        match self {
            Operator::Add => scaled_math::add(a, b),
            Operator::Subtract => scaled_math::sub(a, b),
            Operator::Multiply => scaled_math::mul(a, b),
            Operator::Divide => scaled_math::div(a, b),
        }
    }

    /// The button action name this operator is bound to.
    pub fn action_name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        };
        write!(f, "{}", symbol)
    }
}

impl FromStr for Operator {
    type Err = crate::numeric::NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operator::Add),
            "subtract" => Ok(Operator::Subtract),
            "multiply" => Ok(Operator::Multiply),
            "divide" => Ok(Operator::Divide),
            _ => Err(crate::numeric::NumericError::InvalidInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(text: &str) -> Operand {
        Operand::parse(text).unwrap()
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(Operator::Add.apply(op("1.1"), op("2.2")).unwrap(), op("3.3"));
        assert_eq!(
            Operator::Subtract.apply(op("0.3"), op("0.1")).unwrap(),
            op("0.2")
        );
        assert_eq!(
            Operator::Multiply.apply(op("1.1"), op("1.1")).unwrap(),
            op("1.21")
        );
        assert_eq!(Operator::Divide.apply(op("5"), op("2")).unwrap(), op("2.5"));
    }

    #[test]
    fn test_from_action_name() {
        assert_eq!("add".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("divide".parse::<Operator>().unwrap(), Operator::Divide);
        assert!("modulo".parse::<Operator>().is_err());
    }

    #[test]
    fn test_action_name_roundtrip() {
        for operator in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(operator.action_name().parse::<Operator>().unwrap(), operator);
        }
    }
}
