// AI flows: prompt templates plus the calls that execute them.
//
// Each flow owns its input/output contract and builds its own prompt; the
// provider behind `BaseAI` is interchangeable.

pub mod suggest_tools;
pub mod summarize_webpage;

pub use suggest_tools::{suggest_tools, SuggestToolsInput, SuggestToolsOutput};
pub use summarize_webpage::{
    summarize_webpage, SummarizeWebpageInput, SummarizeWebpageOutput,
};

/// Preamble shared by the flow prompts.
pub(crate) const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
