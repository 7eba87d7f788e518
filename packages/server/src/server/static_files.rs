use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Browser UI embedded at compile time
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct UiAssets;

/// Serve the browser UI from embedded assets.
///
/// Extensionless page routes (`/tool-suggester`) resolve to the matching
/// `.html` asset; `/` resolves to `index.html`.
pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = UiAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response();
    }

    let html_path = format!("{path}.html");
    match UiAssets::get(&html_path) {
        Some(content) => ([(header::CONTENT_TYPE, "text/html")], content.data).into_response(),
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
