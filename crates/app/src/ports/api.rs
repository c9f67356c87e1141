//! Backend API port — the four requests the dashboard makes.

use std::future::Future;

use stormwatch_domain::clip::Clip;
use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::error::StormwatchError;
use stormwatch_domain::settings::{Settings, SettingsForm};

/// Client for the surveillance backend.
pub trait SurveillanceApi {
    /// Endpoints this client talks to.
    fn endpoints(&self) -> &Endpoints;

    /// `GET clips` — the clip listing in backend order.
    fn fetch_clips(&self) -> impl Future<Output = Result<Vec<Clip>, StormwatchError>> + Send;

    /// `GET settings` — the current detection settings.
    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, StormwatchError>> + Send;

    /// `POST settings` — submit the form values verbatim. The response body is ignored.
    fn save_settings(
        &self,
        form: SettingsForm,
    ) -> impl Future<Output = Result<(), StormwatchError>> + Send;

    /// `GET live.jpeg?<cache_buster>` — the current still frame.
    fn fetch_live_image(
        &self,
        cache_buster: i64,
    ) -> impl Future<Output = Result<Vec<u8>, StormwatchError>> + Send;
}

impl<T: SurveillanceApi + Send + Sync> SurveillanceApi for std::sync::Arc<T> {
    fn endpoints(&self) -> &Endpoints {
        (**self).endpoints()
    }

    fn fetch_clips(&self) -> impl Future<Output = Result<Vec<Clip>, StormwatchError>> + Send {
        (**self).fetch_clips()
    }

    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, StormwatchError>> + Send {
        (**self).fetch_settings()
    }

    fn save_settings(
        &self,
        form: SettingsForm,
    ) -> impl Future<Output = Result<(), StormwatchError>> + Send {
        (**self).save_settings(form)
    }

    fn fetch_live_image(
        &self,
        cache_buster: i64,
    ) -> impl Future<Output = Result<Vec<u8>, StormwatchError>> + Send {
        (**self).fetch_live_image(cache_buster)
    }
}
