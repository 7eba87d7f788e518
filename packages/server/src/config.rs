use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Gemini API key. The app boots without one; AI endpoints report a
    /// configuration error until it is set.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub extract_max_chars: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            google_api_key: env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            extract_max_chars: env::var("EXTRACT_MAX_CHARS")
                .unwrap_or_else(|_| "15000".to_string())
                .parse()
                .context("EXTRACT_MAX_CHARS must be a valid number")?,
        })
    }
}
