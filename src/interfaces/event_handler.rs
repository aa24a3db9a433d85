// ============================================================================
// Event Handler Interface
// Defines the contract for observing session transitions
// ============================================================================

use crate::domain::Operator;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator session, one batch per input
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionEvent {
    /// The display text changed
    DisplayUpdated {
        text: String,
        timestamp: DateTime<Utc>,
    },

    /// An operator was stored (or replaced) as pending
    OperatorStored {
        operator: Operator,
        timestamp: DateTime<Utc>,
    },

    /// A pending operation was evaluated
    ResultComputed {
        operator: Operator,
        first: f64,
        second: f64,
        result: f64,
        timestamp: DateTime<Utc>,
    },

    /// A divide was rejected because the second operand was zero
    DivisionByZeroRejected {
        dividend: f64,
        timestamp: DateTime<Utc>,
    },

    /// The session was reset to its defaults
    SessionCleared { timestamp: DateTime<Utc> },

    /// An input could not be applied in the current state and was dropped
    InputIgnored {
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing session events
/// Implementations can handle logging, metrics, UI refresh, etc.
pub trait EventHandler {
    /// Handle a session event
    fn on_event(&self, event: SessionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SessionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SessionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SessionEvent) {
        tracing::debug!("Calculator session event: {:?}", event);
    }
}
