//! Dashboard host page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;

/// Name of the wasm-bindgen JS glue inside `/pkg`.
pub const BUNDLE_JS: &str = "stormwatch_dashboard.js";
/// Name of the compiled module inside `/pkg`.
pub const BUNDLE_WASM: &str = "stormwatch_dashboard_bg.wasm";

/// Host page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    title: String,
    backend_url: String,
    live_interval_ms: u128,
    clips_interval_ms: u128,
    bundle_js: &'static str,
    bundle_wasm: &'static str,
}

impl IntoResponse for IndexTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — the page the WASM dashboard mounts into.
pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    let page = &state.page;
    IndexTemplate {
        title: page.title.clone(),
        backend_url: page.endpoints.base().to_string(),
        live_interval_ms: page.dashboard.live_interval.as_millis(),
        clips_interval_ms: page.dashboard.clips_interval.as_millis(),
        bundle_js: BUNDLE_JS,
        bundle_wasm: BUNDLE_WASM,
    }
}
