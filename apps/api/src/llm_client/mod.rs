/// LLM client — the single point of entry for all generative-AI calls.
///
/// ARCHITECTURAL RULE: no other module may call the Generative Language API
/// directly. Every prompt goes through an `AiBackend`, so the mock backend can
/// stand in for the real one without touching any caller.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod mock;
pub mod parse;

/// Selects the deterministic mock backend instead of the real API.
/// Intentionally hardcoded: flipping it is a deploy-time decision, not config.
pub const USE_MOCK_AI: bool = true;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Ordered model ladder. The first model that returns text wins; there is no
/// ranking by quality, only by position.
pub const MODEL_CANDIDATES: &[&str] = &[
    "gemini-1.5-flash-8b",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-pro",
];

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 8192;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Google API key not configured")]
    NotConfigured,

    #[error("Invalid Google API key")]
    InvalidApiKey,

    #[error("Generative Language API not enabled")]
    ApiNotEnabled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API failed: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse JSON response from AI")]
    Parse,

    #[error("Invalid response shape: {0}")]
    Shape(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The seam between domain services and the generative model.
/// `AppState` carries an `Arc<dyn AiBackend>`; implementations are
/// `GeminiClient` (real) and `mock::MockAi` (deterministic).
#[async_trait]
pub trait AiBackend: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AiError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Real backend against the Google Generative Language REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// One generation attempt against a single model identifier.
    async fn try_model(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        let url = format!(
            "{GEMINI_API_BASE}/{model}:generateContent?key={}",
            self.api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self.client.post(&url).json(&request_body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(classify_api_error(status.as_u16(), &message));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or(AiError::EmptyContent)
    }
}

#[async_trait]
impl AiBackend for GeminiClient {
    /// Walks the model ladder with a single combined prompt.
    /// Each model gets exactly one attempt; first success wins and the last
    /// failure is returned if every model fails.
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AiError> {
        if self.api_key.is_empty() || self.api_key == "your_google_api_key_here" {
            return Err(AiError::NotConfigured);
        }

        let prompt = format!("{system_prompt}\n\n{user_prompt}");

        let mut last_error: Option<AiError> = None;
        for model in MODEL_CANDIDATES {
            debug!("Trying model: {model}");
            match self.try_model(model, &prompt).await {
                Ok(text) => {
                    debug!("Success with model: {model}");
                    return Ok(text);
                }
                Err(e) => {
                    warn!("Failed with {model}: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(AiError::EmptyContent))
    }
}

/// Maps known upstream failure signatures to friendlier errors.
/// Anything unrecognized is wrapped generically with its status.
fn classify_api_error(status: u16, message: &str) -> AiError {
    if message.contains("API_KEY_INVALID") || message.contains("API key not valid") {
        AiError::InvalidApiKey
    } else if status == 404 || message.contains("not found") {
        AiError::ApiNotEnabled
    } else {
        AiError::Api {
            status,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_invalid_key() {
        let err = classify_api_error(400, "API_KEY_INVALID: check your credentials");
        assert!(matches!(err, AiError::InvalidApiKey));
        assert_eq!(err.to_string(), "Invalid Google API key");
    }

    #[test]
    fn test_classify_api_key_not_valid_phrasing() {
        let err = classify_api_error(403, "API key not valid. Please pass a valid key.");
        assert!(matches!(err, AiError::InvalidApiKey));
    }

    #[test]
    fn test_classify_model_not_found() {
        let err = classify_api_error(404, "models/gemini-pro is not found for API version");
        assert!(matches!(err, AiError::ApiNotEnabled));
        assert_eq!(err.to_string(), "Generative Language API not enabled");
    }

    #[test]
    fn test_classify_unrecognized_is_wrapped() {
        let err = classify_api_error(429, "Resource has been exhausted");
        match err {
            AiError::Api { status, message } => {
                assert_eq!(status, 429);
                assert!(message.contains("exhausted"));
            }
            other => panic!("expected Api variant, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_key_fails_before_any_network_call() {
        let client = GeminiClient::new(String::new());
        let err = client.generate("system", "user").await.unwrap_err();
        assert!(matches!(err, AiError::NotConfigured));

        let client = GeminiClient::new("your_google_api_key_here".to_string());
        let err = client.generate("system", "user").await.unwrap_err();
        assert!(matches!(err, AiError::NotConfigured));
    }
}
