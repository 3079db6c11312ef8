//! Suggestion request status

use serde::{Deserialize, Serialize};

/// Shown whenever the styling service fails, whatever the cause
pub const FALLBACK_MESSAGE: &str = "I'm sorry, I had trouble creating an outfit. The selected items might not be clear enough. Please try again with different items.";

/// Shown when a suggestion is requested with nothing selected
pub const NO_SELECTION_MESSAGE: &str =
    "Please select at least one item to get a style suggestion.";

/// Status of the suggestion request (State Machine)
///
/// `Idle → Loading → {Result | Error}`; starting the next request moves back
/// to `Loading` and drops the previous result or error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    Idle,
    Loading,
    Result(String),
    Error(String),
}

impl SuggestionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SuggestionStatus::Loading)
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            SuggestionStatus::Result(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SuggestionStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Why a suggestion request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionFailureKind {
    /// Network unreachable, connection reset, DNS, ...
    Network,
    /// No response within the configured timeout
    Timeout,
    /// HTTP 429 / quota exhausted
    RateLimited,
    /// Non-success status returned by the service
    Service,
    /// Response could not be parsed or carried no text
    MalformedResponse,
    /// The service refused the prompt (safety filters)
    Blocked,
}

impl SuggestionFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionFailureKind::Network => "network",
            SuggestionFailureKind::Timeout => "timeout",
            SuggestionFailureKind::RateLimited => "rate_limited",
            SuggestionFailureKind::Service => "service",
            SuggestionFailureKind::MalformedResponse => "malformed_response",
            SuggestionFailureKind::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for SuggestionFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed suggestion request: the cause plus a diagnostic detail.
///
/// The detail goes to logs; users only ever see [`FALLBACK_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionFailure {
    pub kind: SuggestionFailureKind,
    pub detail: String,
}

impl SuggestionFailure {
    pub fn new(kind: SuggestionFailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}
