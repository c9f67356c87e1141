//! Page settings handed over by the host page through `<meta>` tags.

use stormwatch_domain::endpoint::Endpoints;

/// `<meta name>` carrying the backend base URL.
pub const BACKEND_META: &str = "stormwatch-backend";
/// `<meta name>` carrying the live image period in milliseconds.
pub const LIVE_INTERVAL_META: &str = "stormwatch-live-interval-ms";
/// `<meta name>` carrying the clip list period in milliseconds.
pub const CLIPS_INTERVAL_META: &str = "stormwatch-clips-interval-ms";

const DEFAULT_LIVE_INTERVAL_MS: u32 = 1_000;
const DEFAULT_CLIPS_INTERVAL_MS: u32 = 60_000;

/// Where the backend lives and how often to poll it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub endpoints: Endpoints,
    pub live_interval_ms: u32,
    pub clips_interval_ms: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::relative(),
            live_interval_ms: DEFAULT_LIVE_INTERVAL_MS,
            clips_interval_ms: DEFAULT_CLIPS_INTERVAL_MS,
        }
    }
}

impl PageSettings {
    /// Read the settings from the current document's `<meta>` tags.
    pub fn from_document() -> Self {
        let document = leptos::prelude::document();
        Self::from_meta(|name| {
            document
                .query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }

    /// Build the settings from a `<meta>` lookup.
    ///
    /// Missing or unusable values fall back to page-relative endpoints and
    /// the default periods.
    pub fn from_meta(meta: impl Fn(&str) -> Option<String>) -> Self {
        let endpoints = match meta(BACKEND_META) {
            Some(base) => Endpoints::new(&base).unwrap_or_else(|err| {
                leptos::logging::warn!("ignoring backend url {base:?}: {err}");
                Endpoints::relative()
            }),
            None => Endpoints::relative(),
        };
        Self {
            endpoints,
            live_interval_ms: interval(meta(LIVE_INTERVAL_META), DEFAULT_LIVE_INTERVAL_MS),
            clips_interval_ms: interval(meta(CLIPS_INTERVAL_META), DEFAULT_CLIPS_INTERVAL_MS),
        }
    }
}

fn interval(value: Option<String>, default: u32) -> u32 {
    value
        .and_then(|ms| ms.trim().parse().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}
