//! Gemini implementation of the [`StylistGateway`] port

use super::types::{GenerationConfig, build_request, classify_error, parse_response};
use crate::config::{ApiKey, ConfigurationError, FileGeminiConfig};
use async_trait::async_trait;
use tracing::{debug, warn};
use wardrobe_application::{GatewayError, StylistGateway};
use wardrobe_domain::OutfitRequest;

/// Connection and generation settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub model: String,
    pub base_url: String,
    pub generation: GenerationConfig,
}

impl GeminiSettings {
    /// Override the model name (e.g. from `--model`)
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl From<&FileGeminiConfig> for GeminiSettings {
    fn from(config: &FileGeminiConfig) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            generation: GenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
                top_k: config.top_k,
            },
        }
    }
}

/// Stylist gateway that calls Gemini `generateContent` over HTTPS
pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
    api_key: ApiKey,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings, api_key: ApiKey) -> Result<Self, ConfigurationError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("wardrobe-stylist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self::with_client(client, settings, api_key))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(client: reqwest::Client, settings: GeminiSettings, api_key: ApiKey) -> Self {
        Self {
            client,
            settings,
            api_key,
        }
    }
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_decode() {
        GatewayError::MalformedResponse(error.to_string())
    } else {
        GatewayError::Connection(error.to_string())
    }
}

#[async_trait]
impl StylistGateway for GeminiGateway {
    fn model_name(&self) -> &str {
        &self.settings.model
    }

    async fn suggest_outfit(&self, request: &OutfitRequest) -> Result<String, GatewayError> {
        let body = build_request(request, self.settings.generation);
        let url = self.settings.endpoint();
        debug!(%url, images = request.image_count(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let error = classify_error(status.as_u16(), &text);
            warn!(status = status.as_u16(), "Gemini request failed: {}", error);
            return Err(error);
        }

        debug!(bytes = text.len(), "Received generateContent response");
        parse_response(&text)
    }
}
