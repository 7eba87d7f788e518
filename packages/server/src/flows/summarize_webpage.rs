//! Webpage summarization flow.
//!
//! Extracts the text content of a URL, then asks the model for a concise
//! summary. Extraction failures propagate untouched; nothing here retries
//! or reinterprets them.

use anyhow::{Context, Result};
use extraction::ContentExtractor;
use gemini_client::StructuredOutput;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SYSTEM_PROMPT;
use crate::kernel::BaseAI;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeWebpageInput {
    /// The URL of the webpage to summarize.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeWebpageOutput {
    /// A summary of the content of the webpage.
    pub summary: String,
}

pub async fn summarize_webpage(
    ai: &dyn BaseAI,
    extractor: &ContentExtractor,
    input: &SummarizeWebpageInput,
) -> Result<SummarizeWebpageOutput> {
    let content = extractor.extract(&input.url).await?;

    let prompt = format!("Summarize the content of the following webpage:\n\n{content}");

    let response = ai
        .complete_json(
            SYSTEM_PROMPT,
            &prompt,
            SummarizeWebpageOutput::gemini_schema(),
        )
        .await?;

    serde_json::from_str(&response).context("Failed to parse webpage summary")
}
