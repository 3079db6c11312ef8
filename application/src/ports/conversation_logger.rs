//! Port for the structured styling transcript.
//!
//! `tracing` carries human-readable diagnostics; this port records what was
//! asked of the styling service and what came back, one machine-readable
//! record per event (e.g. JSONL).

use serde_json::Value;

/// A transcript event: a type tag plus event-specific fields.
pub struct ConversationEvent {
    /// Event type (e.g. "item_added", "suggestion_request", "suggestion_failed").
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for transcript events.
///
/// `log` is synchronous and infallible; a failing sink must never disturb
/// the request it is recording.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
