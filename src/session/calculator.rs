// ============================================================================
// Calculator Session
// Core state machine driving the display from keypad inputs
// ============================================================================

use super::state::SessionState;
use crate::domain::{ButtonInput, Operator};
use crate::interfaces::{EventHandler, SessionEvent};
use crate::numeric::Operand;
use chrono::Utc;
use std::sync::Arc;

/// Display text shown after a rejected division or arithmetic failure
pub const ERROR_DISPLAY: &str = "Error";

/// Display text of a fresh or cleared session
const INITIAL_DISPLAY: &str = "0";

/// The calculator session state machine.
///
/// Holds the complete session record: the display text, the optional first
/// operand, the optional pending operator, and the flag marking that the
/// next digit starts a fresh entry. One call to [`handle_input`] per keypad
/// input is the only transition path; there is no global state.
///
/// Every transition's events are forwarded to the attached [`EventHandler`]
/// and also returned to the caller, so a UI shell can refresh its display
/// sink from either.
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use std::sync::Arc;
///
/// let mut session = CalculatorSession::new(Arc::new(NoOpEventHandler));
/// session.handle_input(ButtonInput::Digit(1));
/// session.handle_input(ButtonInput::DecimalPoint);
/// session.handle_input(ButtonInput::Digit(1));
/// session.handle_input(ButtonInput::Operator(Operator::Add));
/// session.handle_input(ButtonInput::Digit(2));
/// session.handle_input(ButtonInput::DecimalPoint);
/// session.handle_input(ButtonInput::Digit(2));
/// session.handle_input(ButtonInput::Calculate);
/// assert_eq!(session.display(), "3.3");
/// ```
///
/// [`handle_input`]: CalculatorSession::handle_input
pub struct CalculatorSession {
    display_text: String,
    first_operand: Option<Operand>,
    pending_operator: Option<Operator>,
    waiting_for_second_operand: bool,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorSession {
    /// Create a new session with the given event handler.
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            display_text: INITIAL_DISPLAY.to_string(),
            first_operand: None,
            pending_operator: None,
            waiting_for_second_operand: false,
            event_handler,
        }
    }

    /// Apply one keypad input to the session.
    ///
    /// This is the single state-transition function: it mutates the session
    /// record, forwards the resulting events to the event handler, and
    /// returns them.
    pub fn handle_input(&mut self, input: ButtonInput) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        match input {
            ButtonInput::Digit(digit) => self.input_digit(digit, &mut events),
            ButtonInput::DecimalPoint => self.input_decimal(&mut events),
            ButtonInput::Operator(operator) => self.handle_operator(operator, &mut events),
            ButtonInput::Calculate => self.calculate(&mut events),
            ButtonInput::Clear => self.reset(&mut events),
        }

        self.event_handler.on_events(events.clone());
        events
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current display text.
    pub fn display(&self) -> &str {
        &self.display_text
    }

    /// The stored first operand, if any.
    pub fn first_operand(&self) -> Option<Operand> {
        self.first_operand
    }

    /// The pending operator, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Classify the session record into its observable phase.
    pub fn state(&self) -> SessionState {
        match (self.first_operand, self.pending_operator) {
            (_, Some(_)) if self.waiting_for_second_operand => SessionState::OperatorPending,
            (_, Some(_)) => SessionState::AccumulatingSecondOperand,
            (Some(_), None) => SessionState::Result,
            (None, None) => {
                // The error display is reset-like: no operand context survives it
                if self.display_text == INITIAL_DISPLAY || self.display_text == ERROR_DISPLAY {
                    SessionState::Idle
                } else {
                    SessionState::AccumulatingFirstOperand
                }
            },
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn input_digit(&mut self, digit: u8, events: &mut Vec<SessionEvent>) {
        if digit > 9 {
            events.push(SessionEvent::InputIgnored {
                reason: "digit out of range".to_string(),
                timestamp: Utc::now(),
            });
            return;
        }

        let digit_char = (b'0' + digit) as char;

        if self.waiting_for_second_operand {
            self.display_text = digit_char.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display_text == INITIAL_DISPLAY {
            self.display_text = digit_char.to_string();
        } else {
            self.display_text.push(digit_char);
        }

        self.push_display_updated(events);
    }

    fn input_decimal(&mut self, events: &mut Vec<SessionEvent>) {
        if self.waiting_for_second_operand {
            self.display_text = "0.".to_string();
            self.waiting_for_second_operand = false;
        } else if !self.display_text.contains('.') {
            self.display_text.push('.');
        }

        self.push_display_updated(events);
    }

    fn handle_operator(&mut self, next_operator: Operator, events: &mut Vec<SessionEvent>) {
        // A second operator press before any new digit only swaps the operator
        if self.pending_operator.is_some() && self.waiting_for_second_operand {
            self.pending_operator = Some(next_operator);
            events.push(SessionEvent::OperatorStored {
                operator: next_operator,
                timestamp: Utc::now(),
            });
            return;
        }

        let input_value = match Operand::parse(&self.display_text) {
            Ok(value) => value,
            Err(_) => {
                events.push(SessionEvent::InputIgnored {
                    reason: "display text is not a number".to_string(),
                    timestamp: Utc::now(),
                });
                return;
            },
        };

        if self.first_operand.is_none() {
            self.first_operand = Some(input_value);
        } else if self.pending_operator.is_some() {
            // Chained entry: evaluate the pending operation first, its
            // result becomes the new first operand
            if !self.evaluate_pending(input_value, events) {
                return;
            }
        }

        self.waiting_for_second_operand = true;
        self.pending_operator = Some(next_operator);
        events.push(SessionEvent::OperatorStored {
            operator: next_operator,
            timestamp: Utc::now(),
        });
    }

    fn calculate(&mut self, events: &mut Vec<SessionEvent>) {
        if self.first_operand.is_none() || self.pending_operator.is_none() {
            events.push(SessionEvent::InputIgnored {
                reason: "no pending operation".to_string(),
                timestamp: Utc::now(),
            });
            return;
        }

        let second = match Operand::parse(&self.display_text) {
            Ok(value) => value,
            Err(_) => {
                events.push(SessionEvent::InputIgnored {
                    reason: "display text is not a number".to_string(),
                    timestamp: Utc::now(),
                });
                return;
            },
        };

        self.evaluate_pending(second, events);
    }

    fn reset(&mut self, events: &mut Vec<SessionEvent>) {
        self.display_text = INITIAL_DISPLAY.to_string();
        self.first_operand = None;
        self.pending_operator = None;
        self.waiting_for_second_operand = false;

        events.push(SessionEvent::SessionCleared {
            timestamp: Utc::now(),
        });
        self.push_display_updated(events);
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    /// Evaluate the pending operation with `second` as the right operand.
    /// Returns false when the session entered the error display instead.
    fn evaluate_pending(&mut self, second: Operand, events: &mut Vec<SessionEvent>) -> bool {
        let (first, operator) = match (self.first_operand, self.pending_operator) {
            (Some(first), Some(operator)) => (first, operator),
            _ => return false,
        };

        // Checked here, before the arithmetic module is invoked: divide is
        // never asked to handle a zero divisor
        if operator == Operator::Divide && second.is_zero() {
            tracing::warn!(dividend = first.value(), "division by zero rejected");
            events.push(SessionEvent::DivisionByZeroRejected {
                dividend: first.value(),
                timestamp: Utc::now(),
            });
            self.enter_error_display(events);
            return false;
        }

        match operator.apply(first, second) {
            Ok(result) => {
                events.push(SessionEvent::ResultComputed {
                    operator,
                    first: first.value(),
                    second: second.value(),
                    result: result.value(),
                    timestamp: Utc::now(),
                });

                self.display_text = result.canonical_text();
                self.first_operand = Some(result);
                self.pending_operator = None;
                self.waiting_for_second_operand = false;
                self.push_display_updated(events);
                true
            },
            Err(err) => {
                tracing::warn!(error = %err, "arithmetic operation failed");
                self.enter_error_display(events);
                false
            },
        }
    }

    /// Show the error indicator and drop all operand context. The waiting
    /// flag stays set so the next digit starts a fresh entry.
    fn enter_error_display(&mut self, events: &mut Vec<SessionEvent>) {
        self.display_text = ERROR_DISPLAY.to_string();
        self.first_operand = None;
        self.pending_operator = None;
        self.waiting_for_second_operand = true;
        self.push_display_updated(events);
    }

    fn push_display_updated(&self, events: &mut Vec<SessionEvent>) {
        events.push(SessionEvent::DisplayUpdated {
            text: self.display_text.clone(),
            timestamp: Utc::now(),
        });
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(Arc::new(crate::interfaces::NoOpEventHandler))
    }
}
