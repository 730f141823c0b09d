//! GeminiClient against a local wiremock server: request shape, text extraction,
//! provider errors, and the full requester path over HTTP.

mod common;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use advisor::{
    report_schema, AdvisorError, GeminiClient, GenerateRequest, LlmClient, ReportRequester,
    RESPONSE_MIME_TYPE,
};
use common::{sample_prefs, SAMPLE_REPORT};

const MODEL: &str = "gemini-2.5-flash";
const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn candidate_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 420,
            "candidatesTokenCount": 380,
            "totalTokenCount": 800
        }
    })
}

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key", MODEL).with_base_url(server.uri())
}

fn request() -> GenerateRequest {
    GenerateRequest {
        prompt: "Analyze DHA Lahore".to_string(),
        response_schema: report_schema(),
        response_mime_type: RESPONSE_MIME_TYPE.to_string(),
    }
}

#[tokio::test]
async fn sends_key_header_and_returns_text_with_usage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("{\"ok\":true}")))
        .expect(1)
        .mount(&server)
        .await;

    let out = client(&server).generate(&request()).await.unwrap();
    assert_eq!(out.text.as_deref(), Some("{\"ok\":true}"));
    let usage = out.usage.expect("usage");
    assert_eq!(usage.prompt_tokens, 420);
    assert_eq!(usage.completion_tokens, 380);
    assert_eq!(usage.total_tokens, 800);
}

#[tokio::test]
async fn request_body_carries_prompt_and_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("{}")))
        .mount(&server)
        .await;

    client(&server).generate(&request()).await.unwrap();

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Analyze DHA Lahore");
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(
        body["generationConfig"]["responseSchema"]["required"],
        report_schema()["required"]
    );
}

#[tokio::test]
async fn provider_error_surfaces_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let err = client(&server).generate(&request()).await.unwrap_err();
    match err {
        AdvisorError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("API key not valid"), "{}", message);
        }
        other => panic!("expected Api error, got {}", other),
    }
}

#[tokio::test]
async fn blocked_prompt_yields_no_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let out = client(&server).generate(&request()).await.unwrap();
    assert!(out.text.is_none());

    let requester = ReportRequester::new(Arc::new(client(&server)));
    let err = requester
        .generate_real_estate_advice(&sample_prefs())
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::EmptyResponse));
}

#[tokio::test]
async fn requester_parses_report_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(SAMPLE_REPORT)))
        .expect(1)
        .mount(&server)
        .await;

    let requester = ReportRequester::new(Arc::new(client(&server)));
    let report = requester
        .generate_real_estate_advice(&sample_prefs())
        .await
        .unwrap();
    assert_eq!(report.best_areas[0].average_price, "1.9 Crore");
    assert_eq!(report.hidden_costs.len(), 3);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let c = GeminiClient::new("k", MODEL).with_base_url("http://127.0.0.1:1");
    let err = c.generate(&request()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::Transport(_)));
}
