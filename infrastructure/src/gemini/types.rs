//! Wire types for the Gemini `generateContent` endpoint
//!
//! Requests are built from a domain [`OutfitRequest`]; responses are reduced
//! to the suggestion text or a [`GatewayError`].

use serde::{Deserialize, Serialize};
use wardrobe_application::GatewayError;
use wardrobe_domain::{InlineImage, OutfitRequest};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content part; Gemini distinguishes parts by which field is present.
///
/// Unknown part fields in responses are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineImage>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn image(image: InlineImage) -> Self {
        Self {
            text: None,
            inline_data: Some(image),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

/// Build the request body: every image first, then the instruction text.
pub fn build_request(request: &OutfitRequest, config: GenerationConfig) -> GenerateContentRequest {
    let mut parts: Vec<Part> = request
        .images
        .iter()
        .cloned()
        .map(Part::image)
        .collect();
    parts.push(Part::text(request.user_prompt.as_str()));

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::text(request.system_instruction.as_str())],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: config,
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Extract the suggestion text from a successful response body.
///
/// Text parts of the first candidate are concatenated in order.
pub fn parse_response(body: &str) -> Result<String, GatewayError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.clone())
    {
        return Err(GatewayError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| GatewayError::MalformedResponse("no candidates".to_string()))?;

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(GatewayError::MalformedResponse(format!(
            "candidate has no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

/// Map a non-2xx status and its body to a gateway error.
pub fn classify_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| {
            let e = envelope.error;
            if e.status.is_empty() {
                e.message
            } else {
                format!("{}: {}", e.status, e.message)
            }
        })
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        429 => GatewayError::RateLimited(message),
        _ => GatewayError::Service { status, message },
    }
}
