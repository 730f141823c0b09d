//! Generative-AI client abstraction for the report requester.
//!
//! The requester depends on a callable that takes a prompt plus a response schema
//! and returns the model's raw text; this module defines the trait, the Gemini
//! implementation and a mock for tests.

mod gemini;
mod mock;

pub use gemini::{
    GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL,
    ENV_TEMPERATURE,
};
pub use mock::MockLlm;

use async_trait::async_trait;

use crate::error::AdvisorError;

/// One schema-constrained generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
    /// Natural-language prompt (single user turn).
    pub prompt: String,
    /// Schema the response text must follow.
    pub response_schema: serde_json::Value,
    /// MIME type of the response text, e.g. `application/json`.
    pub response_mime_type: String,
}

/// Token usage for one call, when the provider reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Raw model answer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LlmResponse {
    /// Concatenated text of the first candidate; `None` when nothing came back.
    pub text: Option<String>,
    pub usage: Option<LlmUsage>,
}

/// Client that performs one generation call.
///
/// Implementations: [`GeminiClient`] (real API), [`MockLlm`] (fixed text).
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<LlmResponse, AdvisorError>;
}
