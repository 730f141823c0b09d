//! Mock LLM for tests and offline demos.
//!
//! Returns fixed text (or no text, to exercise the empty-response path) and
//! remembers the last request so tests can inspect the prompt and schema.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AdvisorError;
use crate::llm::{GenerateRequest, LlmClient, LlmResponse};

/// Mock LLM: fixed response text.
///
/// **Interaction**: Implements `LlmClient`; used by requester and session tests.
pub struct MockLlm {
    text: Option<String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateRequest>>,
}

impl MockLlm {
    /// Creates a mock that answers every call with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Creates a mock whose answers carry no text.
    pub fn empty() -> Self {
        Self {
            text: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Copy of the most recent request, if any.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, request: &GenerateRequest) -> Result<LlmResponse, AdvisorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_request
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(request.clone());
        Ok(LlmResponse {
            text: self.text.clone(),
            usage: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.to_string(),
            response_schema: serde_json::json!({"type": "OBJECT"}),
            response_mime_type: "application/json".to_string(),
        }
    }

    #[tokio::test]
    async fn records_calls_and_last_request() {
        let llm = MockLlm::empty();
        assert!(llm.last_request().is_none());
        llm.generate(&request("first")).await.unwrap();
        let out = llm.generate(&request("second")).await.unwrap();
        assert!(out.text.is_none());
        assert_eq!(llm.calls(), 2);
        assert_eq!(llm.last_request().map(|r| r.prompt).as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn last_request_survives_poisoned_lock() {
        let llm = MockLlm::with_text("{}");
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _last = llm.last_request.lock();
                panic!("poison last_request lock");
            })
            .join()
        });
        llm.generate(&request("after poison")).await.unwrap();
        assert_eq!(
            llm.last_request().map(|r| r.prompt).as_deref(),
            Some("after poison")
        );
    }
}
