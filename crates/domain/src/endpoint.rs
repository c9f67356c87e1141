//! Backend endpoints consumed by the dashboard.
//!
//! The backend contract is exactly four requests:
//! `GET live.jpeg?<ts>`, `GET clips`, `GET settings` and `POST settings`.

use url::Url;

use crate::error::ValidationError;

/// Path of the live still image.
pub const LIVE_IMAGE_PATH: &str = "live.jpeg";
/// Path of the clip listing.
pub const CLIPS_PATH: &str = "clips";
/// Path of the settings resource (GET and POST).
pub const SETTINGS_PATH: &str = "settings";

/// URL builder for the backend.
///
/// An empty base produces page-relative URLs, which is what the browser
/// dashboard uses when served by the backend itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Endpoints relative to the current page.
    #[must_use]
    pub fn relative() -> Self {
        Self::default()
    }

    /// Endpoints under an absolute `http(s)` base URL.
    ///
    /// An empty string yields [`relative`](Self::relative) endpoints.
    /// A trailing slash is added when missing so paths resolve beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaseUrl`] when `base` does not parse
    /// and [`ValidationError::UnsupportedScheme`] for non-http schemes.
    pub fn new(base: &str) -> Result<Self, ValidationError> {
        let base = base.trim();
        if base.is_empty() {
            return Ok(Self::relative());
        }
        let url = Url::parse(base).map_err(|_| ValidationError::InvalidBaseUrl(base.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        let mut base = url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self { base })
    }

    /// The normalised base (empty when relative).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.base.is_empty()
    }

    /// Live image URL with a cache-busting timestamp.
    #[must_use]
    pub fn live(&self, cache_buster: i64) -> String {
        format!("{}{LIVE_IMAGE_PATH}?{cache_buster}", self.base)
    }

    #[must_use]
    pub fn clips(&self) -> String {
        format!("{}{CLIPS_PATH}", self.base)
    }

    #[must_use]
    pub fn settings(&self) -> String {
        format!("{}{SETTINGS_PATH}", self.base)
    }

    /// Resolve a URL taken from a clip record against the base.
    ///
    /// Absolute URLs and relative endpoints are returned unchanged.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> String {
        if self.is_relative() {
            return reference.to_string();
        }
        Url::parse(&self.base)
            .and_then(|base| base.join(reference))
            .map_or_else(|_| reference.to_string(), String::from)
    }
}
