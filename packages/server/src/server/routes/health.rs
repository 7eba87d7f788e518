use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    ai: AiHealth,
}

#[derive(Serialize)]
pub struct AiHealth {
    status: String,
}

/// Health check endpoint
///
/// The app has no stateful subsystems; it reports whether the AI provider
/// is configured so deploys can catch a missing key early.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let ai_status = if state.ai.is_some() {
        "configured"
    } else {
        "unconfigured"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            ai: AiHealth {
                status: ai_status.to_string(),
            },
        }),
    )
}
