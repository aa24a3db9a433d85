// ============================================================================
// Session Module
// The calculator session state machine
// ============================================================================

mod calculator;
mod state;

pub use calculator::{CalculatorSession, ERROR_DISPLAY};
pub use state::SessionState;
