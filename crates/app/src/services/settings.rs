//! Settings service — populates and submits the settings form.

use std::sync::Arc;

use stormwatch_domain::error::StormwatchError;
use stormwatch_domain::settings::SettingsForm;

use crate::ports::{DashboardView, SurveillanceApi};

/// Moves the four tunables between the backend and the form inputs.
///
/// Values are never validated or coerced on the way through.
pub struct SettingsService<A, V> {
    api: Arc<A>,
    view: Arc<V>,
}

impl<A, V> SettingsService<A, V>
where
    A: SurveillanceApi + Send + Sync,
    V: DashboardView,
{
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self { api, view }
    }

    /// Fetch the settings and fill the form inputs.
    ///
    /// # Errors
    ///
    /// Propagates the transport error from the API; the inputs are left untouched.
    pub async fn load(&self) -> Result<SettingsForm, StormwatchError> {
        let settings = self.api.fetch_settings().await?;
        let form = SettingsForm::from(&settings);
        self.view.populate_settings(&form);
        tracing::debug!(?form, "populated settings form");
        Ok(form)
    }

    /// Read the form inputs and submit them as typed.
    ///
    /// # Errors
    ///
    /// Propagates the transport error from the API.
    pub async fn save(&self) -> Result<SettingsForm, StormwatchError> {
        let form = self.view.read_settings();
        self.api.save_settings(form.clone()).await?;
        tracing::info!(body = %form.to_form_body(), "submitted settings");
        Ok(form)
    }
}
