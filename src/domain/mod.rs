// ============================================================================
// Domain Models Module
// Value objects shared between the keypad boundary and the session
// ============================================================================

pub mod input;
pub mod operator;

pub use input::ButtonInput;
pub use operator::Operator;
