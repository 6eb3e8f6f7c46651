use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "ui/dist/"]
#[allow_missing = true]
struct UiAssets;

/// Serve an embedded file, or `index.html` for client-side routes
pub async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    if let Some(response) = embedded(path) {
        return response;
    }

    // Paths with an extension are real files; everything else is a view
    if path.rsplit('/').next().is_some_and(|name| name.contains('.')) {
        debug!(path, "Asset not found");
        return StatusCode::NOT_FOUND.into_response();
    }

    embedded("index.html").unwrap_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "UI bundle missing: build ui/ with trunk first",
        )
            .into_response()
    })
}

fn embedded(path: &str) -> Option<Response> {
    let file = UiAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(([(header::CONTENT_TYPE, mime.as_ref().to_string())], file.data).into_response())
}
