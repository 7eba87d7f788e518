//! API route tests driving the router directly with `tower::ServiceExt`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use extraction::ContentExtractor;
use server_core::kernel::test_dependencies::MockAI;
use server_core::kernel::BaseAI;
use server_core::server::{build_app, AppState};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state_with_ai(ai: MockAI) -> AppState {
    AppState {
        ai: Some(Arc::new(ai) as Arc<dyn BaseAI>),
        extractor: Arc::new(ContentExtractor::new()),
    }
}

fn state_without_ai() -> AppState {
    AppState {
        ai: None,
        extractor: Arc::new(ContentExtractor::new()),
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn suggest_tools_returns_suggestions() {
    let ai = MockAI::new().with_response(r#"{"suggestedTools":["Copy.ai","Jasper"]}"#);
    let app = build_app(state_with_ai(ai));

    let response = app
        .oneshot(post_json(
            "/api/suggest-tools",
            json!({ "userNeedDescription": "I need to generate marketing copy" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["suggestedTools"], json!(["Copy.ai", "Jasper"]));
}

#[tokio::test]
async fn suggest_tools_rejects_short_descriptions() {
    let app = build_app(state_with_ai(MockAI::new()));

    let response = app
        .oneshot(post_json(
            "/api/suggest-tools",
            json!({ "userNeedDescription": "too short" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        "Please describe your need in at least 10 characters."
    );
}

#[tokio::test]
async fn summarize_rejects_invalid_urls() {
    let app = build_app(state_with_ai(MockAI::new()));

    let response = app
        .oneshot(post_json(
            "/api/summarize-webpage",
            json!({ "url": "not a url" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Please enter a valid URL.");
}

#[tokio::test]
async fn ai_endpoints_need_an_api_key() {
    let app = build_app(state_without_ai());

    let response = app
        .oneshot(post_json(
            "/api/suggest-tools",
            json!({ "userNeedDescription": "a sufficiently long description" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("GOOGLE_API_KEY"));
}

#[tokio::test]
async fn summarize_webpage_end_to_end() {
    let page_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html><body><p>A page about Rust.</p></body></html>"),
        )
        .mount(&page_server)
        .await;

    let ai = MockAI::new().with_response(r#"{"summary":"This page is about Rust."}"#);
    let app = build_app(state_with_ai(ai));

    let response = app
        .oneshot(post_json(
            "/api/summarize-webpage",
            json!({ "url": page_server.uri() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["summary"], "This page is about Rust.");
}

#[tokio::test]
async fn summarize_surfaces_extraction_failure() {
    let page_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&page_server)
        .await;

    let app = build_app(state_with_ai(MockAI::new()));

    let response = app
        .oneshot(post_json(
            "/api/summarize-webpage",
            json!({ "url": page_server.uri() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Not Found"));
}

#[tokio::test]
async fn health_reports_ai_configuration() {
    let app = build_app(state_without_ai());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ai"]["status"], "unconfigured");

    let app = build_app(state_with_ai(MockAI::new()));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = response_json(response).await;
    assert_eq!(body["ai"]["status"], "configured");
}

#[tokio::test]
async fn ui_pages_are_served() {
    for path in ["/", "/tool-suggester", "/web-summarizer", "/settings"] {
        let app = build_app(state_without_ai());
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "page {path} should load");
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "page {path}");
    }
}

#[tokio::test]
async fn unknown_paths_return_404() {
    let app = build_app(state_without_ai());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-such-page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
