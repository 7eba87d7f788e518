//! JSON endpoints for the AI flows.
//!
//! Format validation happens here, before a flow runs; flow errors pass
//! through unchanged into the API error envelope.

use axum::{extract::State, Json};

use crate::flows::{
    suggest_tools, summarize_webpage, SuggestToolsInput, SuggestToolsOutput,
    SummarizeWebpageInput, SummarizeWebpageOutput,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Minimum length of a tool-suggestion need description.
const MIN_NEED_DESCRIPTION_CHARS: usize = 10;

/// `POST /api/suggest-tools`
pub async fn suggest_tools_handler(
    State(state): State<AppState>,
    Json(input): Json<SuggestToolsInput>,
) -> Result<Json<SuggestToolsOutput>, ApiError> {
    if input.user_need_description.trim().chars().count() < MIN_NEED_DESCRIPTION_CHARS {
        return Err(ApiError::BadRequest(
            "Please describe your need in at least 10 characters.".to_string(),
        ));
    }

    let ai = state.ai.as_ref().ok_or(ApiError::AiUnconfigured)?;
    let output = suggest_tools(ai.as_ref(), &input).await?;
    Ok(Json(output))
}

/// `POST /api/summarize-webpage`
pub async fn summarize_webpage_handler(
    State(state): State<AppState>,
    Json(input): Json<SummarizeWebpageInput>,
) -> Result<Json<SummarizeWebpageOutput>, ApiError> {
    if url::Url::parse(&input.url).is_err() {
        return Err(ApiError::BadRequest("Please enter a valid URL.".to_string()));
    }

    let ai = state.ai.as_ref().ok_or(ApiError::AiUnconfigured)?;
    let output = summarize_webpage(ai.as_ref(), &state.extractor, &input).await?;
    Ok(Json(output))
}
