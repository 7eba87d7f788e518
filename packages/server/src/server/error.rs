//! JSON API error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the JSON API.
///
/// Every failure renders as `{"error": "..."}`. The browser UI shows its own
/// generic notification; the descriptive message here is for logs and
/// API consumers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation before reaching a flow.
    #[error("{0}")]
    BadRequest(String),

    /// AI endpoints are unavailable until an API key is configured.
    #[error("GOOGLE_API_KEY is not configured; see the Settings page")]
    AiUnconfigured,

    /// A flow failed (extraction, provider call, or response parsing).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::AiUnconfigured => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            ApiError::Internal(error) => {
                tracing::error!(error = %format!("{error:#}"), "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{error:#}"))
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
