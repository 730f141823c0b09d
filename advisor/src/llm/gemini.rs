//! Gemini `generateContent` client implementing [`LlmClient`].
//!
//! Sends one user turn with `generationConfig.responseMimeType` and
//! `generationConfig.responseSchema` so the model answers with JSON text shaped
//! like the schema. Reads the API key from `API_KEY` by default; base URL and
//! model are overridable (tests point the base URL at a local mock server).
//!
//! Response handling follows the REST shape:
//! `candidates[0].content.parts[*].text` is concatenated into the answer text;
//! `usageMetadata` becomes [`LlmUsage`]. Non-2xx statuses surface the
//! provider's `error.message` when present.

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::AdvisorError;
use crate::llm::{GenerateRequest, LlmClient, LlmResponse, LlmUsage};

pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_TEMPERATURE: &str = "GEMINI_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini REST client.
///
/// **Interaction**: Implements `LlmClient`; used by `ReportRequester`.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
}

impl GeminiClient {
    /// Build client for `model` with an explicit key and the default base URL.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: None,
        }
    }

    /// Build client from `API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`, `GEMINI_TEMPERATURE`.
    ///
    /// Fails with [`AdvisorError::MissingApiKey`] when `API_KEY` is unset or blank.
    /// The key is trimmed before use.
    /// An unparsable temperature is ignored with a warning.
    pub fn from_env() -> Result<Self, AdvisorError> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(AdvisorError::MissingApiKey)?;
        let model = std::env::var(ENV_MODEL)
            .ok()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let mut client = Self::new(api_key, model);
        if let Ok(base) = std::env::var(ENV_BASE_URL) {
            if !base.trim().is_empty() {
                client = client.with_base_url(base);
            }
        }
        if let Ok(raw) = std::env::var(ENV_TEMPERATURE) {
            match raw.trim().parse::<f32>() {
                Ok(t) => client = client.with_temperature(t),
                Err(_) => warn!(value = %raw, "ignoring invalid {}", ENV_TEMPERATURE),
            }
        }
        Ok(client)
    }

    /// Set base URL (scheme + host, optional path prefix).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set model name, e.g. `gemini-2.5-flash`.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set sampling temperature (0–2).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// `{base}/v1beta/models/{model}:generateContent`; does not duplicate `/v1beta`.
    fn generate_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1beta").unwrap_or(base);
        format!("{}/v1beta/models/{}:generateContent", base, self.model)
    }

    fn request_body<'a>(&self, request: &'a GenerateRequest) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: &request.response_mime_type,
                response_schema: &request.response_schema,
                temperature: self.temperature,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate joined together; `None` when empty.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn usage(&self) -> Option<LlmUsage> {
        self.usage_metadata.as_ref().map(|u| LlmUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        })
    }
}

/// Provider error message from an error body, or the raw body when it is not the usual shape.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<LlmResponse, AdvisorError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let url = self.generate_url();
        debug!(
            trace_id = %trace_id,
            model = %self.model,
            url = %url,
            prompt_len = request.prompt.len(),
            "Gemini generateContent request"
        );

        let started = Instant::now();
        let res = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| AdvisorError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| AdvisorError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = api_error_message(&body);
            warn!(
                trace_id = %trace_id,
                status = status.as_u16(),
                error = %message,
                "Gemini request failed"
            );
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            AdvisorError::Transport(format!("unexpected Gemini response body: {}", e))
        })?;

        let text = parsed.text();
        let usage = parsed.usage();
        let finish_reason = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("-");
        info!(
            trace_id = %trace_id,
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            finish_reason = %finish_reason,
            total_tokens = usage.as_ref().map(|u| u.total_tokens).unwrap_or(0),
            has_text = text.is_some(),
            "Gemini generateContent done"
        );

        Ok(LlmResponse { text, usage })
    }
}
