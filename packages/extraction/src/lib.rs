//! Webpage content extraction for prompt building.
//!
//! Fetches a URL and reduces the page to a plain-text excerpt that is small
//! and clean enough to hand to a language model: markup and obvious
//! boilerplate are dropped, whitespace is normalized, and the result is
//! bounded in length.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::ContentExtractor;
//!
//! let extractor = ContentExtractor::new();
//! let text = extractor.extract("https://example.com/article").await?;
//! ```
//!
//! Extraction is stateless; a single [`ContentExtractor`] can be shared
//! across concurrent callers. Failures are never retried and always surface
//! as a typed [`ExtractError`].

pub mod error;
pub mod extractor;

pub use error::{ExtractError, Result};
pub use extractor::{ContentExtractor, ExtractorConfig};
