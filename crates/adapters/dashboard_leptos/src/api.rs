//! HTTP API client wrapping `gloo-net` for the four backend requests.

use gloo_net::http::{Request, Response};
use stormwatch_domain::clip::Clip;
use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::settings::{Settings, SettingsForm};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(ApiError {
        message: format!("HTTP {} from {}", resp.status(), resp.url()),
    })
}

/// Fetch the clip listing, in backend order.
pub async fn fetch_clips(endpoints: &Endpoints) -> Result<Vec<Clip>, ApiError> {
    let resp = check_response(Request::get(&endpoints.clips()).send().await?)?;
    let clips: Vec<Clip> = resp.json().await?;
    Ok(clips)
}

/// Fetch the current detection settings.
pub async fn fetch_settings(endpoints: &Endpoints) -> Result<Settings, ApiError> {
    let resp = check_response(Request::get(&endpoints.settings()).send().await?)?;
    let settings: Settings = resp.json().await?;
    Ok(settings)
}

/// Submit the settings form. The response body is ignored.
pub async fn save_settings(endpoints: &Endpoints, form: &SettingsForm) -> Result<(), ApiError> {
    let resp = Request::post(&endpoints.settings())
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(form.to_form_body())?
        .send()
        .await?;
    check_response(resp)?;
    Ok(())
}
