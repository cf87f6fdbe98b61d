//! Text-generation client abstraction.
//!
//! `TextGenerator` is the seam between the interpretation generator and the
//! outside world. `GeminiClient` talks to the Gemini `generateContent` API;
//! `FakeTextGenerator` replays scripted responses for tests.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;

use crate::config::LlmConfig;

/// Per-call generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
    /// 0 disables extended reasoning
    pub thinking_budget: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: 1000,
            temperature: 0.7,
            thinking_budget: 0,
        }
    }
}

impl From<&LlmConfig> for GenerationParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
            thinking_budget: config.thinking_budget,
        }
    }
}

/// Failure class reported by a client that can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    RateLimited,
    Timeout,
    Api,
}

/// Upstream failure. `kind` is `None` when the client could not classify it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UpstreamError {
    pub kind: Option<UpstreamErrorKind>,
    pub message: String,
}

impl UpstreamError {
    pub fn new(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            message: message.into(),
        }
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
        }
    }
}

/// Generic text-generation backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single-turn prompt
    async fn generate(&self, prompt: &str, params: &GenerationParams)
        -> Result<String, UpstreamError>;

    /// Model identifier, for logs
    fn model(&self) -> &str;
}

// ============================================================================
// Gemini
// ============================================================================

/// Gemini `generateContent` client
pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn request_body(prompt: &str, params: &GenerationParams) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]},
            ],
            "generationConfig": {
                "maxOutputTokens": params.max_output_tokens,
                "temperature": params.temperature,
                "thinkingConfig": {"thinkingBudget": params.thinking_budget},
            },
        })
    }
}

/// Map an HTTP failure to a structured kind using the status code and
/// the API's canonical status string.
pub fn classify_http_failure(http_status: u16, api_status: &str) -> UpstreamErrorKind {
    match (http_status, api_status) {
        (429, _) | (_, "RESOURCE_EXHAUSTED") => UpstreamErrorKind::RateLimited,
        (504, _) | (_, "DEADLINE_EXCEEDED") => UpstreamErrorKind::Timeout,
        _ => UpstreamErrorKind::Api,
    }
}

/// Concatenate the visible text parts of the first candidate
fn extract_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, UpstreamError> {
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt, params))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::new(
                        UpstreamErrorKind::Timeout,
                        format!("Request timeout after {} seconds", self.timeout_secs),
                    )
                } else {
                    UpstreamError::new(UpstreamErrorKind::Api, format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorEnvelope>(&body).ok();
            let api_status = detail.as_ref().map(|d| d.error.status.as_str()).unwrap_or("");
            let kind = classify_http_failure(status.as_u16(), api_status);
            let message = match &detail {
                Some(d) if !d.error.message.is_empty() => {
                    format!("HTTP {} from Gemini: {}", status.as_u16(), d.error.message)
                }
                _ => format!("HTTP {} from Gemini", status.as_u16()),
            };
            return Err(UpstreamError::new(kind, message));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::new(UpstreamErrorKind::Timeout, "Response body timed out")
            } else {
                UpstreamError::new(
                    UpstreamErrorKind::Api,
                    format!("Failed to parse response: {}", e),
                )
            }
        })?;

        Ok(extract_text(parsed))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Fake (testing)
// ============================================================================

/// Fake text generator with scripted responses.
///
/// Responses are consumed in order; the last one repeats.
pub struct FakeTextGenerator {
    responses: Mutex<Vec<Result<String, UpstreamError>>>,
    call_count: Mutex<usize>,
    last_prompt: Mutex<Option<String>>,
    last_params: Mutex<Option<GenerationParams>>,
}

impl FakeTextGenerator {
    pub fn new(responses: Vec<Result<String, UpstreamError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            call_count: Mutex::new(0),
            last_prompt: Mutex::new(None),
            last_params: Mutex::new(None),
        }
    }

    /// Always return the same text
    pub fn always(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Always fail with the same error
    pub fn always_error(error: UpstreamError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_params(&self) -> Option<GenerationParams> {
        self.last_params.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, UpstreamError> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_params.lock().unwrap() = Some(params.clone());

        let mut responses = self.responses.lock().unwrap();
        match responses.len() {
            0 => Err(UpstreamError::unclassified("")),
            1 => responses[0].clone(),
            _ => responses.remove(0),
        }
    }

    fn model(&self) -> &str {
        "fake"
    }
}
