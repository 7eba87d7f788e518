//! Plain-text extraction from live webpages.
//!
//! Fetch the document, drop non-content markup and likely noise, collapse
//! whitespace, and bound the output length. The noise filter is a heuristic
//! substring match over `class`/`id` attributes; it is kept deliberately
//! simple and its behavior (including case sensitivity) is part of the
//! contract.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

use crate::error::{ExtractError, Result};

/// Element categories that never contribute visible content.
const STRIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "iframe", "img", "svg", "header", "footer", "nav",
];

lazy_static! {
    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n(?:[ \t]*\n)+").unwrap();
    static ref BODY: Selector = Selector::parse("body").unwrap();
}

/// Tunable knobs for extraction.
///
/// Defaults preserve the behavior downstream prompts were written against;
/// change them only for callers with different prompt budgets.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Maximum characters of extracted text before truncation.
    pub max_chars: usize,

    /// Substrings that mark an element's `class` or `id` as noise
    /// (advertising, cookie banners, promos, sidebars). Matched
    /// case-sensitively.
    pub noise_markers: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_chars: 15_000,
            noise_markers: ["ads", "advert", "cookie", "promo", "sidebar"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Fetches a URL and produces a bounded plain-text excerpt of its content.
///
/// One outbound request per call, no caching, no retries. The extractor
/// attaches no headers, cookies, or auth of its own and imposes no timeout;
/// callers needing bounded latency should supply a client configured with
/// one via [`ContentExtractor::with_client`].
pub struct ContentExtractor {
    client: reqwest::Client,
    config: ExtractorConfig,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: ExtractorConfig::default(),
        }
    }

    /// Replace the HTTP client (e.g. to impose a timeout policy).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Replace the extraction config.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract the visible text content of the page at `url`.
    ///
    /// Returns at most `max_chars` characters, plus a `...` marker when the
    /// page text was longer.
    pub async fn extract(&self, url: &str) -> Result<String> {
        debug!(url = %url, "fetching page for extraction");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "page fetch failed");
            ExtractError::from_cause(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            warn!(url = %url, status = %status, "page fetch returned error status");
            return Err(ExtractError::Fetch { reason });
        }

        let html = response.text().await.map_err(ExtractError::from_cause)?;
        let text = self.extract_from_html(&html);

        debug!(url = %url, chars = text.chars().count(), "page text extracted");
        Ok(text)
    }

    /// Reduce an HTML document to normalized, bounded plain text.
    fn extract_from_html(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        let mut text = String::new();
        match document.select(&BODY).next() {
            Some(body) => self.collect_text(body, &mut text),
            None => self.collect_text(document.root_element(), &mut text),
        }

        let text = SPACE_RUNS.replace_all(&text, " ");
        let text = BLANK_LINES.replace_all(&text, "\n");
        let mut text = text.trim().to_string();

        if let Some((boundary, _)) = text.char_indices().nth(self.config.max_chars) {
            text.truncate(boundary);
            text.push_str("...");
        }

        text
    }

    /// Append the visible text under `element`, skipping stripped and
    /// noise-marked subtrees entirely.
    fn collect_text(&self, element: ElementRef, out: &mut String) {
        if STRIPPED_ELEMENTS.contains(&element.value().name()) || self.is_noise(&element) {
            return;
        }

        for child in element.children() {
            match child.value() {
                Node::Text(text) => out.push_str(text),
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        self.collect_text(child_element, out);
                    }
                }
                _ => {}
            }
        }
    }

    /// Heuristic: an element is noise when its `class` or `id` contains one
    /// of the configured markers (case-sensitive substring).
    fn is_noise(&self, element: &ElementRef) -> bool {
        ["class", "id"].iter().any(|attr| {
            element.value().attr(attr).is_some_and(|value| {
                self.config.noise_markers.iter().any(|m| value.contains(m))
            })
        })
    }
}
