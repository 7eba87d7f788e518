// AI implementation using Gemini
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in the flows layer.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::{truncate_to_char_boundary, GeminiClient, StructuredRequest};

/// Schema-constrained completion capability used by the flows.
#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt, returning JSON text conforming to `schema`.
    async fn complete_json(
        &self,
        system: &str,
        prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String>;
}

/// Gemini implementation of AI capabilities
#[derive(Clone)]
pub struct GeminiAI {
    client: GeminiClient,
    model: String,
}

impl GeminiAI {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseAI for GeminiAI {
    async fn complete_json(
        &self,
        system: &str,
        prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        tracing::debug!(
            prompt_length = prompt.len(),
            model = %self.model,
            "Calling Gemini API"
        );

        let request = StructuredRequest::new(&self.model, system, prompt, schema);
        let response = self
            .client
            .structured_generation(request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    prompt_preview = %truncate_to_char_boundary(prompt, 200),
                    "Gemini API call failed"
                );
                e
            })
            .context("Failed to call Gemini API")?;

        tracing::debug!(
            response_length = response.len(),
            model = %self.model,
            "Gemini API response received"
        );

        Ok(response)
    }
}
