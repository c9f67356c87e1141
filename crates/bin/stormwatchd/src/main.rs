//! # stormwatchd — stormwatch dashboard daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`stormwatch.toml`, env vars)
//! - Initialise `tracing` with an `EnvFilter`
//! - Build the axum router serving the dashboard host page and WASM bundle
//! - Optionally run the headless watcher against the backend
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod watcher;

use stormwatch_adapter_http_axum::state::AppState;
use stormwatch_adapter_http_ureq::HttpSurveillanceApi;
use stormwatch_app::dashboard::{DashboardClient, DashboardHandle};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::watcher::{LoggingView, check_live_feed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Headless watcher
    let watcher = if config.watcher.enabled {
        Some(start_watcher(&config)?)
    } else {
        None
    };

    // HTTP
    let state = AppState::new(config.page_config()?, config.dashboard.assets_dir.clone());
    let app = stormwatch_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        backend = %config.backend.url,
        assets_dir = %config.dashboard.assets_dir.display(),
        "stormwatchd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = watcher {
        handle.shutdown();
    }
    tracing::info!("stormwatchd stopped");
    Ok(())
}

fn start_watcher(config: &Config) -> Result<DashboardHandle, Box<dyn std::error::Error>> {
    let api = HttpSurveillanceApi::new(config.endpoints()?)?;
    let feed = api.clone();
    tokio::spawn(async move {
        if let Err(err) = check_live_feed(&feed).await {
            tracing::warn!(error = %err, "live feed unreachable");
        }
    });
    let client = DashboardClient::new(api, LoggingView::default(), config.dashboard_config());
    tracing::info!(backend = %config.backend.url, "starting headless watcher");
    Ok(client.start())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
