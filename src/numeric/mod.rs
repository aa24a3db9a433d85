// ============================================================================
// Numeric Module
// Decimal-accurate arithmetic over scaled integers
// ============================================================================
//
// This module provides:
// - Operand: a validated finite decimal with a canonical text form
// - scaled_math: add/sub/mul/div over a common power-of-ten scale
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - Scale selection is textual: the canonical decimal text decides the
//   power of ten, so chained results rescale consistently
// - All arithmetic returns Result (no panics)
// - Stateless: nothing persists between operation calls

mod errors;
mod operand;
pub mod scaled_math;

pub use errors::{NumericError, NumericResult};
pub use operand::Operand;
