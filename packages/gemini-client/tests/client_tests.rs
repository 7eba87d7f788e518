//! Gemini client tests against a local mock HTTP server.

use gemini_client::{GeminiClient, GeminiError, GenerateRequest, StructuredRequest};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn candidate_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 10,
            "candidatesTokenCount": 5,
            "totalTokenCount": 15
        }
    })
}

#[tokio::test]
async fn generate_content_returns_candidate_text_and_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response("Hello back")))
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key").with_base_url(server.uri());
    let response = client
        .generate_content(GenerateRequest::new("gemini-2.5-flash").user("Hello"))
        .await
        .expect("generation should succeed");

    assert_eq!(response.text, "Hello back");
    assert_eq!(response.usage.unwrap().total_token_count, 15);
}

#[tokio::test]
async fn structured_generation_sends_schema_and_json_mime_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_response(r#"{"summary":"ok"}"#)),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key").with_base_url(server.uri());
    let request = StructuredRequest::new(
        "gemini-2.5-flash",
        "system",
        "user",
        json!({"type": "OBJECT"}),
    );

    let body = client
        .structured_generation(request)
        .await
        .expect("structured generation should succeed");
    assert_eq!(body, r#"{"summary":"ok"}"#);
}

#[tokio::test]
async fn extract_deserializes_typed_response() {
    #[derive(Debug, Deserialize, JsonSchema)]
    struct ToolSuggestions {
        suggested_tools: Vec<String>,
    }

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(
            r#"{"suggested_tools":["Midjourney","DALL-E"]}"#,
        )))
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key").with_base_url(server.uri());
    let result: ToolSuggestions = client
        .extract("gemini-2.5-flash", "system", "user")
        .await
        .expect("extract should succeed");

    assert_eq!(result.suggested_tools, vec!["Midjourney", "DALL-E"]);
}

#[tokio::test]
async fn api_error_surfaces_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":{"message":"API key not valid"}}"#),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::new("bad-key").with_base_url(server.uri());
    let err = client
        .generate_content(GenerateRequest::new("gemini-2.5-flash").user("Hello"))
        .await
        .expect_err("400 should fail");

    match err {
        GeminiError::Api(message) => assert!(message.contains("API key not valid")),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key").with_base_url(server.uri());
    let err = client
        .generate_content(GenerateRequest::new("gemini-2.5-flash").user("Hello"))
        .await
        .expect_err("empty candidates should fail");

    assert!(matches!(err, GeminiError::Api(_)));
}
