//! Stylist Gateway port
//!
//! Defines the interface for asking the remote styling service for an
//! outfit suggestion.

use async_trait::async_trait;
use thiserror::Error;
use wardrobe_domain::{OutfitRequest, SuggestionFailure, SuggestionFailureKind};

/// Errors that can occur during a styling request
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Prompt blocked: {0}")]
    Blocked(String),
}

impl GatewayError {
    /// Classify the error for logging and the state machine
    pub fn failure_kind(&self) -> SuggestionFailureKind {
        match self {
            GatewayError::Connection(_) => SuggestionFailureKind::Network,
            GatewayError::Timeout => SuggestionFailureKind::Timeout,
            GatewayError::RateLimited(_) => SuggestionFailureKind::RateLimited,
            GatewayError::Service { .. } => SuggestionFailureKind::Service,
            GatewayError::MalformedResponse(_) => SuggestionFailureKind::MalformedResponse,
            GatewayError::Blocked(_) => SuggestionFailureKind::Blocked,
        }
    }
}

impl From<GatewayError> for SuggestionFailure {
    fn from(error: GatewayError) -> Self {
        SuggestionFailure::new(error.failure_kind(), error.to_string())
    }
}

/// Gateway to the styling service
///
/// One call per request: the selected images plus the fixed prompts go out,
/// markdown text comes back. Implementations live in the infrastructure layer.
#[async_trait]
pub trait StylistGateway: Send + Sync {
    /// Name of the backing model, for logs
    fn model_name(&self) -> &str;

    /// Send the request and return the suggestion text
    async fn suggest_outfit(&self, request: &OutfitRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_mapping() {
        assert_eq!(
            GatewayError::Connection("reset".to_string()).failure_kind(),
            SuggestionFailureKind::Network
        );
        assert_eq!(
            GatewayError::RateLimited("quota".to_string()).failure_kind(),
            SuggestionFailureKind::RateLimited
        );
        assert_eq!(
            GatewayError::Service {
                status: 500,
                message: "internal".to_string()
            }
            .failure_kind(),
            SuggestionFailureKind::Service
        );
    }

    #[test]
    fn test_into_suggestion_failure_keeps_detail() {
        let failure: SuggestionFailure =
            GatewayError::MalformedResponse("no candidates".to_string()).into();
        assert_eq!(failure.kind, SuggestionFailureKind::MalformedResponse);
        assert_eq!(failure.detail, "Malformed response: no candidates");
    }
}
