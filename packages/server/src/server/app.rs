//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use extraction::{ContentExtractor, ExtractorConfig};
use gemini_client::GeminiClient;

use crate::config::Config;
use crate::kernel::{BaseAI, GeminiAI};
use crate::server::routes::{health_handler, suggest_tools_handler, summarize_webpage_handler};
use crate::server::static_files::static_handler;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// AI provider; `None` until `GOOGLE_API_KEY` is configured.
    pub ai: Option<Arc<dyn BaseAI>>,
    pub extractor: Arc<ContentExtractor>,
}

impl AppState {
    /// Build state from configuration.
    pub fn from_config(config: &Config) -> Self {
        let ai: Option<Arc<dyn BaseAI>> = config.google_api_key.as_ref().map(|key| {
            Arc::new(GeminiAI::new(
                GeminiClient::new(key),
                &config.gemini_model,
            )) as Arc<dyn BaseAI>
        });

        if ai.is_none() {
            tracing::warn!(
                "GOOGLE_API_KEY not set - AI endpoints will report a configuration error"
            );
        }

        let extractor = ContentExtractor::new().with_config(ExtractorConfig {
            max_chars: config.extract_max_chars,
            ..Default::default()
        });

        Self {
            ai,
            extractor: Arc::new(extractor),
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - the UI is served same-origin; permissive CORS
    // keeps local development against a separate dev server working
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // AI flow endpoints
        .route("/api/suggest-tools", post(suggest_tools_handler))
        .route("/api/summarize-webpage", post(summarize_webpage_handler))
        // Health check
        .route("/health", get(health_handler))
        // Browser UI from embedded assets
        .fallback(static_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
