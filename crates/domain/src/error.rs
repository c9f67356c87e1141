//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level error for stormwatch operations.
#[derive(Debug, thiserror::Error)]
pub enum StormwatchError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("transport error")]
    Transport(#[from] TransportError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("backend url is not a valid absolute url: {0}")]
    InvalidBaseUrl(String),

    #[error("backend url must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("an absolute backend url is required outside the browser")]
    MissingBaseUrl,

    #[error("settings form is missing field {0}")]
    MissingSettingsField(&'static str),
}

/// Failures talking to the backend over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The backend answered with a non-2xx status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be decoded.
    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading the response body failed.
    #[error("failed to read response from {url}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
