// Mock infrastructure for tests.
//
// Lets flow and route tests run without real Gemini calls. Lives outside
// #[cfg(test)] so integration tests in tests/ can use it too.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::ai::BaseAI;

/// Record of a call made to the mock AI.
#[derive(Debug, Clone)]
pub struct MockAICall {
    pub system: String,
    pub prompt: String,
}

/// A mock AI returning a canned JSON response.
#[derive(Clone, Default)]
pub struct MockAI {
    response: Option<String>,
    error: Option<String>,
    calls: Arc<Mutex<Vec<MockAICall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON body every completion returns.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Make every completion fail with the given message.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Calls recorded so far, for assertions on prompt content.
    pub fn calls(&self) -> Vec<MockAICall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete_json(
        &self,
        system: &str,
        prompt: &str,
        _schema: serde_json::Value,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(MockAICall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });

        if let Some(message) = &self.error {
            anyhow::bail!("{}", message);
        }

        Ok(self
            .response
            .clone()
            .unwrap_or_else(|| "{}".to_string()))
    }
}
