//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `stormwatch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use stormwatch_adapter_http_axum::state::PageConfig;
use stormwatch_app::dashboard::{DEFAULT_CLIPS_INTERVAL, DEFAULT_LIVE_INTERVAL, DashboardConfig};
use stormwatch_domain::endpoint::Endpoints;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Surveillance backend location.
    pub backend: BackendConfig,
    /// Dashboard page and refresh periods.
    pub dashboard: DashboardSection,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Headless watcher toggle.
    pub watcher: WatcherConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Backend configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Absolute base URL of the backend. Empty means same origin as the page.
    pub url: String,
}

/// Dashboard configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    /// Page title.
    pub title: String,
    /// Live image refresh period in milliseconds.
    pub live_interval_ms: u64,
    /// Clip list refresh period in milliseconds.
    pub clips_interval_ms: u64,
    /// Directory holding the compiled WASM bundle.
    pub assets_dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Headless watcher configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// Run the dashboard loops natively and log what they see.
    pub enabled: bool,
}

impl Config {
    /// Load configuration from `stormwatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("stormwatch.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("STORMWATCH_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("STORMWATCH_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("STORMWATCH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("STORMWATCH_BACKEND_URL") {
            self.backend.url = val;
        }
        if let Some(ms) = var("STORMWATCH_LIVE_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.dashboard.live_interval_ms = ms;
        }
        if let Some(ms) = var("STORMWATCH_CLIPS_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.dashboard.clips_interval_ms = ms;
        }
        if let Some(val) = var("STORMWATCH_ASSETS_DIR") {
            self.dashboard.assets_dir = PathBuf::from(val);
        }
        if let Some(enabled) = var("STORMWATCH_WATCHER").and_then(|val| parse_flag(&val)) {
            self.watcher.enabled = enabled;
        }
        if let Some(val) = var("STORMWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.dashboard.live_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "live_interval_ms must be non-zero".to_string(),
            ));
        }
        if self.dashboard.clips_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "clips_interval_ms must be non-zero".to_string(),
            ));
        }
        let endpoints = self.endpoints()?;
        if self.watcher.enabled && endpoints.is_relative() {
            return Err(ConfigError::Validation(
                "the watcher needs an absolute backend url".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Backend endpoints built from `backend.url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Backend`] when the URL is not an absolute
    /// `http(s)` URL.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        Ok(Endpoints::new(&self.backend.url)?)
    }

    /// Refresh periods of the dashboard loops.
    #[must_use]
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            live_interval: Duration::from_millis(self.dashboard.live_interval_ms),
            clips_interval: Duration::from_millis(self.dashboard.clips_interval_ms),
        }
    }

    /// What the host page hands to the browser dashboard.
    ///
    /// # Errors
    ///
    /// Same as [`endpoints`](Self::endpoints).
    pub fn page_config(&self) -> Result<PageConfig, ConfigError> {
        Ok(PageConfig {
            title: self.dashboard.title.clone(),
            endpoints: self.endpoints()?,
            dashboard: self.dashboard_config(),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn millis(period: Duration) -> u64 {
    u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            title: "stormwatch".to_string(),
            live_interval_ms: millis(DEFAULT_LIVE_INTERVAL),
            clips_interval_ms: millis(DEFAULT_CLIPS_INTERVAL),
            assets_dir: PathBuf::from("dist"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "stormwatchd=info,stormwatch=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Unusable backend URL.
    #[error("invalid backend url")]
    Backend(#[from] stormwatch_domain::error::ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
