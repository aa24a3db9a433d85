// ============================================================================
// Calculator Engine Library
// Decimal-accurate calculator core with an event-driven session
// ============================================================================

//! # Calculator Engine
//!
//! A calculator engine whose arithmetic avoids binary floating-point
//! rounding errors: `0.1 + 0.2` is exactly `0.3`, not `0.30000000000000004`.
//!
//! ## Features
//!
//! - **Scaled-integer arithmetic**: operands are converted to integers
//!   scaled by a common power of ten before computing
//! - **Textual scale selection**: decimal-place counts come from a
//!   deterministic canonical text form, so chained results stay consistent
//! - **Session state machine**: keypad inputs drive an explicit session
//!   record with one transition function, no globals
//! - **Event stream**: every transition emits timestamped events for
//!   logging, metrics, or display refresh
//!
//! ## Example
//!
//! ```rust
//! use calculator_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let mut session = CalculatorSession::new(Arc::new(NoOpEventHandler));
//!
//! // Type "1.1", press +, type "2.2", press =
//! for action in ["1", "decimal", "1", "add", "2", "decimal", "2", "calculate"] {
//!     let input = ButtonInput::from_action(action).unwrap();
//!     session.handle_input(input);
//! }
//!
//! assert_eq!(session.display(), "3.3");
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod session;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ButtonInput, Operator};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, SessionEvent,
    };
    pub use crate::numeric::{NumericError, NumericResult, Operand};
    pub use crate::session::{CalculatorSession, SessionState, ERROR_DISPLAY};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    fn press_all(session: &mut CalculatorSession, actions: &[&str]) {
        for action in actions {
            let input = ButtonInput::from_action(action).unwrap();
            session.handle_input(input);
        }
    }

    #[test]
    fn test_end_to_end_decimal_exact_addition() {
        let mut session = CalculatorSession::new(Arc::new(NoOpEventHandler));

        press_all(&mut session, &["1", "decimal", "1"]);
        assert_eq!(session.display(), "1.1");

        press_all(&mut session, &["add", "2", "decimal", "2"]);
        assert_eq!(session.display(), "2.2");

        press_all(&mut session, &["calculate"]);
        assert_eq!(session.display(), "3.3");
    }

    #[test]
    fn test_end_to_end_division_by_zero() {
        let mut session = CalculatorSession::new(Arc::new(NoOpEventHandler));

        press_all(&mut session, &["5", "divide", "0", "calculate"]);
        assert_eq!(session.display(), ERROR_DISPLAY);

        // The session did not crash and does not treat the error text as an
        // operand: clearing and computing again works normally
        press_all(&mut session, &["clear", "4", "add", "4", "calculate"]);
        assert_eq!(session.display(), "8");
    }

    #[test]
    fn test_end_to_end_long_chain() {
        let mut session = CalculatorSession::new(Arc::new(NoOpEventHandler));

        // 0.1 + 0.2 - 0.3 * 10 = (left-to-right) 0.0 * 10 = 0
        press_all(&mut session, &["0", "decimal", "1", "add"]);
        press_all(&mut session, &["0", "decimal", "2", "subtract"]);
        assert_eq!(session.display(), "0.3");

        press_all(&mut session, &["0", "decimal", "3", "multiply"]);
        assert_eq!(session.display(), "0");

        press_all(&mut session, &["1", "0", "calculate"]);
        assert_eq!(session.display(), "0");
    }

    #[test]
    fn test_events_are_forwarded_to_handler() {
        use std::sync::Mutex;

        struct Recorder(Mutex<Vec<SessionEvent>>);
        impl EventHandler for Recorder {
            fn on_event(&self, event: SessionEvent) {
                self.0.lock().unwrap().push(event);
            }
        }

        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let mut session = CalculatorSession::new(recorder.clone());

        press_all(&mut session, &["2", "multiply", "3", "calculate"]);

        let recorded = recorder.0.lock().unwrap();
        assert!(recorded
            .iter()
            .any(|e| matches!(e, SessionEvent::ResultComputed { result, .. } if *result == 6.0)));
        assert!(recorded
            .iter()
            .any(|e| matches!(e, SessionEvent::DisplayUpdated { text, .. } if text == "6")));
    }
}
