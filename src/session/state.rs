// ============================================================================
// Session State
// Observable phases of the calculator session
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The phase a calculator session is in, derived from its record.
///
/// The session itself only stores the display text, the optional first
/// operand, the optional pending operator and the waiting flag; this enum
/// is the read-only classification of that record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionState {
    /// Fresh session (or reset-like error display), nothing entered yet
    Idle,
    /// Digits of the first operand are being entered
    AccumulatingFirstOperand,
    /// An operator is pending and no digit of the second operand has been
    /// entered yet
    OperatorPending,
    /// Digits of the second operand are being entered
    AccumulatingSecondOperand,
    /// A result is on display and doubles as the next first operand
    Result,
}

impl SessionState {
    /// True while operand digits are being accumulated.
    pub fn is_accumulating(&self) -> bool {
        matches!(
            self,
            SessionState::AccumulatingFirstOperand | SessionState::AccumulatingSecondOperand
        )
    }

    /// True when a calculate press would evaluate a pending operation.
    pub fn can_calculate(&self) -> bool {
        matches!(
            self,
            SessionState::OperatorPending | SessionState::AccumulatingSecondOperand
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulating_classification() {
        assert!(SessionState::AccumulatingFirstOperand.is_accumulating());
        assert!(SessionState::AccumulatingSecondOperand.is_accumulating());
        assert!(!SessionState::Idle.is_accumulating());
        assert!(!SessionState::Result.is_accumulating());
    }

    #[test]
    fn test_can_calculate() {
        assert!(SessionState::OperatorPending.can_calculate());
        assert!(SessionState::AccumulatingSecondOperand.can_calculate());
        assert!(!SessionState::Idle.can_calculate());
    }
}
