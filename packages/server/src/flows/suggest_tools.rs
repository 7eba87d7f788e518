//! AI tool suggestion flow.
//!
//! Takes a description of what the user wants to accomplish and returns a
//! list of AI tool names that fit.

use anyhow::{Context, Result};
use gemini_client::StructuredOutput;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SYSTEM_PROMPT;
use crate::kernel::BaseAI;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestToolsInput {
    /// A description of the user needs for AI tools.
    pub user_need_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestToolsOutput {
    /// Suggested AI tools based on the user need.
    pub suggested_tools: Vec<String>,
}

pub async fn suggest_tools(
    ai: &dyn BaseAI,
    input: &SuggestToolsInput,
) -> Result<SuggestToolsOutput> {
    let prompt = format!(
        "Based on the following user need description, suggest the most relevant AI tools:\n\n\
         User Need Description: {}\n\n\
         Suggest a list of tools that would be helpful for the user.",
        input.user_need_description
    );

    let response = ai
        .complete_json(SYSTEM_PROMPT, &prompt, SuggestToolsOutput::gemini_schema())
        .await?;

    serde_json::from_str(&response).context("Failed to parse tool suggestions")
}
