//! Embedded admin console routes.
//!
//! The single-page admin console is compiled into the binary from the
//! assets/ directory, so the server ships as one artifact.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Embedded admin console assets from the assets/ directory.
#[derive(Embed)]
#[folder = "assets/"]
struct ConsoleAssets;

/// Serve the admin console index page at `/`.
pub async fn index() -> Response {
    serve_asset("index.html")
}

/// Serve a static asset from `/assets/*path`.
pub async fn asset(Path(path): Path<String>) -> Response {
    serve_asset(&path)
}

fn serve_asset(path: &str) -> Response {
    match ConsoleAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::CACHE_CONTROL, "no-cache")
                .body(Body::from(content.data.into_owned()))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_asset_embedded() {
        assert!(ConsoleAssets::get("index.html").is_some());
    }

    #[test]
    fn test_unknown_asset_missing() {
        assert!(ConsoleAssets::get("does-not-exist.js").is_none());
    }
}
