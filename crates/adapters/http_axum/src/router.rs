//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the host page at `/` and the bundle under `/pkg`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    let assets = ServeDir::new(state.assets_dir.as_path());
    tracing::debug!(assets_dir = %state.assets_dir.display(), "serving dashboard bundle");

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::dashboard::index))
        .nest_service("/pkg", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
