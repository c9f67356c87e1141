//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use stormwatch_app::dashboard::DashboardConfig;
use stormwatch_domain::endpoint::Endpoints;

/// What the host page tells the browser dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Backend the dashboard polls (relative = same origin as the page).
    pub endpoints: Endpoints,
    /// Refresh periods for the live image and the clip list.
    pub dashboard: DashboardConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "stormwatch".to_string(),
            endpoints: Endpoints::relative(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// Application state shared across all axum handlers.
///
/// `Clone` only bumps the `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Host page settings.
    pub page: Arc<PageConfig>,
    /// Directory holding the compiled dashboard bundle.
    pub assets_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(page: PageConfig, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            page: Arc::new(page),
            assets_dir: Arc::new(assets_dir.into()),
        }
    }
}
