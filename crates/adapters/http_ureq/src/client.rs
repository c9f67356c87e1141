//! ureq-backed backend client.

use std::io::Read;
use std::time::Duration;

use stormwatch_app::ports::SurveillanceApi;
use stormwatch_domain::clip::Clip;
use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::error::{StormwatchError, TransportError, ValidationError};
use stormwatch_domain::settings::{Settings, SettingsForm};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Timeouts and limits for the HTTP agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    /// Largest live image accepted, in bytes.
    pub max_image_bytes: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            write_timeout: Duration::from_secs(30),
            max_image_bytes: 8 * 1024 * 1024,
        }
    }
}

/// [`SurveillanceApi`] over HTTP.
#[derive(Clone)]
pub struct HttpSurveillanceApi {
    endpoints: Endpoints,
    agent: ureq::Agent,
    max_image_bytes: usize,
}

impl HttpSurveillanceApi {
    /// Create a client with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBaseUrl`] for page-relative endpoints.
    pub fn new(endpoints: Endpoints) -> Result<Self, ValidationError> {
        Self::with_config(endpoints, HttpClientConfig::default())
    }

    /// Create a client with explicit timeouts and limits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBaseUrl`] for page-relative endpoints.
    pub fn with_config(
        endpoints: Endpoints,
        config: HttpClientConfig,
    ) -> Result<Self, ValidationError> {
        if endpoints.is_relative() {
            return Err(ValidationError::MissingBaseUrl);
        }
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout_read(config.read_timeout)
            .timeout_write(config.write_timeout)
            .build();
        Ok(Self {
            endpoints,
            agent,
            max_image_bytes: config.max_image_bytes,
        })
    }
}

impl SurveillanceApi for HttpSurveillanceApi {
    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn fetch_clips(&self) -> Result<Vec<Clip>, StormwatchError> {
        let agent = self.agent.clone();
        let url = self.endpoints.clips();
        blocking(url.clone(), move || get_json(&agent, &url)).await
    }

    async fn fetch_settings(&self) -> Result<Settings, StormwatchError> {
        let agent = self.agent.clone();
        let url = self.endpoints.settings();
        blocking(url.clone(), move || get_json(&agent, &url)).await
    }

    async fn save_settings(&self, form: SettingsForm) -> Result<(), StormwatchError> {
        let agent = self.agent.clone();
        let url = self.endpoints.settings();
        blocking(url.clone(), move || {
            agent
                .post(&url)
                .set("Content-Type", FORM_CONTENT_TYPE)
                .send_string(&form.to_form_body())
                .map_err(|err| call_error(&url, err))?;
            tracing::debug!(%url, "posted settings");
            Ok(())
        })
        .await
    }

    async fn fetch_live_image(&self, cache_buster: i64) -> Result<Vec<u8>, StormwatchError> {
        let agent = self.agent.clone();
        let url = self.endpoints.live(cache_buster);
        let max_bytes = self.max_image_bytes;
        blocking(url.clone(), move || {
            let response = agent.get(&url).call().map_err(|err| call_error(&url, err))?;
            read_limited(&url, response, max_bytes)
        })
        .await
    }
}

/// Run a blocking request on tokio's blocking pool.
async fn blocking<T, F>(url: String, request: F) -> Result<T, StormwatchError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, TransportError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(request)
        .await
        .map_err(|err| TransportError::Request {
            url,
            message: err.to_string(),
        })?;
    result.map_err(|err| {
        tracing::debug!(error = %err, "backend request failed");
        err.into()
    })
}

fn get_json<T: serde::de::DeserializeOwned>(
    agent: &ureq::Agent,
    url: &str,
) -> Result<T, TransportError> {
    let body = agent
        .get(url)
        .set("Accept", "application/json")
        .call()
        .map_err(|err| call_error(url, err))?
        .into_string()
        .map_err(|source| TransportError::Body {
            url: url.to_string(),
            source,
        })?;
    serde_json::from_str(&body).map_err(|source| TransportError::Decode {
        url: url.to_string(),
        source,
    })
}

fn read_limited(
    url: &str,
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, TransportError> {
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(max_bytes as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|source| TransportError::Body {
            url: url.to_string(),
            source,
        })?;
    if bytes.len() > max_bytes {
        return Err(TransportError::Body {
            url: url.to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("response exceeded {max_bytes} bytes"),
            ),
        });
    }
    Ok(bytes)
}

fn call_error(url: &str, err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Status(status, _) => TransportError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Transport(transport) => TransportError::Request {
            url: url.to_string(),
            message: transport.to_string(),
        },
    }
}
