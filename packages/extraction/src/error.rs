//! Typed errors for content extraction.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while extracting webpage content.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The target site answered with a non-2xx status.
    #[error("failed to fetch website: {reason}")]
    Fetch { reason: String },

    /// Network or parse failure with an underlying cause.
    #[error("could not extract content from the URL: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A failure that carried no usable description.
    #[error("an unknown error occurred while extracting website content")]
    Unknown,
}

impl ExtractError {
    /// Wrap an underlying failure, falling back to [`ExtractError::Unknown`]
    /// when its description is empty.
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        if cause.to_string().is_empty() {
            ExtractError::Unknown
        } else {
            ExtractError::Transport(Box::new(cause))
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
