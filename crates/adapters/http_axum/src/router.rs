//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the top-level axum [`Router`].
///
/// Requests other than `/health` are answered from `assets_dir`; a
/// directory request (including `/`) serves its `index.html`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(assets_dir: impl AsRef<Path>) -> Router {
    let assets_dir = assets_dir.as_ref();
    if !assets_dir.join("index.html").is_file() {
        tracing::warn!(dir = %assets_dir.display(), "assets directory has no index.html");
    }

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
