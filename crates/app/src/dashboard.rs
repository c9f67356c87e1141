//! Headless dashboard client — the three dashboard loops wired together.
//!
//! 1. live image: re-targeted every `live_interval` (first tick after one period)
//! 2. clip list: refreshed at startup and every `clips_interval`
//! 3. settings: loaded once at startup, saved on demand

use std::sync::Arc;
use std::time::Duration;

use stormwatch_domain::error::StormwatchError;
use stormwatch_domain::settings::SettingsForm;

use crate::ports::{DashboardView, SurveillanceApi};
use crate::scheduler::{FirstRun, JobHandle, spawn_periodic};
use crate::services::clip_list::ClipListRefresher;
use crate::services::live_image::LiveImageRefresher;
use crate::services::settings::SettingsService;

/// Default live image refresh period.
pub const DEFAULT_LIVE_INTERVAL: Duration = Duration::from_millis(1000);
/// Default clip list refresh period.
pub const DEFAULT_CLIPS_INTERVAL: Duration = Duration::from_millis(60_000);

/// Refresh periods of the dashboard loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub live_interval: Duration,
    pub clips_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            live_interval: DEFAULT_LIVE_INTERVAL,
            clips_interval: DEFAULT_CLIPS_INTERVAL,
        }
    }
}

/// Owns the dashboard services for one backend and one view.
pub struct DashboardClient<A, V> {
    config: DashboardConfig,
    live: Arc<LiveImageRefresher<V>>,
    clips: Arc<ClipListRefresher<A, V>>,
    settings: Arc<SettingsService<A, V>>,
}

impl<A, V> DashboardClient<A, V>
where
    A: SurveillanceApi + Send + Sync + 'static,
    V: DashboardView + 'static,
{
    pub fn new(api: A, view: V, config: DashboardConfig) -> Self {
        let api = Arc::new(api);
        let view = Arc::new(view);
        Self {
            config,
            live: Arc::new(LiveImageRefresher::new(
                api.endpoints().clone(),
                Arc::clone(&view),
            )),
            clips: Arc::new(ClipListRefresher::new(Arc::clone(&api), Arc::clone(&view))),
            settings: Arc::new(SettingsService::new(api, view)),
        }
    }

    /// Start the periodic loops and the initial settings load.
    ///
    /// Must be called from within a tokio runtime. The loops run until the
    /// returned handle is shut down or dropped.
    pub fn start(&self) -> DashboardHandle {
        let live = Arc::clone(&self.live);
        let live_job = spawn_periodic(
            "live-image",
            self.config.live_interval,
            FirstRun::AfterPeriod,
            move || {
                live.tick();
                std::future::ready(())
            },
        );

        let clips = Arc::clone(&self.clips);
        let clips_job = spawn_periodic(
            "clip-list",
            self.config.clips_interval,
            FirstRun::Immediately,
            move || {
                let clips = Arc::clone(&clips);
                async move {
                    if let Err(err) = clips.refresh().await {
                        tracing::warn!(error = %err, "clip list refresh failed");
                    }
                }
            },
        );

        let settings = Arc::clone(&self.settings);
        tokio::spawn(async move {
            if let Err(err) = settings.load().await {
                tracing::warn!(error = %err, "failed to load settings");
            }
        });

        tracing::info!(
            live_interval = ?self.config.live_interval,
            clips_interval = ?self.config.clips_interval,
            "dashboard started"
        );
        DashboardHandle {
            jobs: vec![live_job, clips_job],
        }
    }

    /// Submit the settings form as currently typed.
    ///
    /// # Errors
    ///
    /// Propagates the transport error from the API.
    pub async fn save_settings(&self) -> Result<SettingsForm, StormwatchError> {
        self.settings.save().await
    }
}

/// Running dashboard loops. Dropping the handle stops them.
#[derive(Debug)]
pub struct DashboardHandle {
    jobs: Vec<JobHandle>,
}

impl DashboardHandle {
    /// Names of the running jobs.
    #[must_use]
    pub fn job_names(&self) -> Vec<&'static str> {
        self.jobs.iter().map(JobHandle::name).collect()
    }

    /// Stop every periodic loop.
    pub fn shutdown(self) {
        for job in &self.jobs {
            job.cancel();
        }
        tracing::info!("dashboard stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::services::testing::{RecordingView, StubApi, clip};
    use stormwatch_domain::settings::{SettingField, Settings};

    fn backend() -> StubApi {
        let api = StubApi::default();
        for round in 0..5 {
            api.push_clips(Duration::ZERO, vec![clip(round)]);
        }
        let settings: Settings = serde_json::from_str(
            r#"{"EdgeDetectionSeconds":5,"DebounceSeconds":2,"TriggerDelay":10,"TriggerThreshold":30}"#,
        )
        .unwrap();
        api.set_settings(settings);
        api
    }

    fn fast_config() -> DashboardConfig {
        DashboardConfig {
            live_interval: Duration::from_millis(1000),
            clips_interval: Duration::from_millis(60_000),
        }
    }

    #[test]
    fn should_default_to_one_second_and_one_minute() {
        let config = DashboardConfig::default();
        assert_eq!(config.live_interval, Duration::from_secs(1));
        assert_eq!(config.clips_interval, Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn should_load_settings_and_clips_at_startup() {
        let view = Arc::new(RecordingView::default());
        let client = DashboardClient::new(backend(), Arc::clone(&view), fast_config());

        let handle = client.start();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(view.clips().len(), 1);
        assert_eq!(view.clips()[0].video, "/clips/0.mp4");
        assert_eq!(view.settings().get(SettingField::TriggerThreshold), "30");
        assert!(view.live_sources().is_empty());
        assert_eq!(handle.job_names(), ["live-image", "clip-list"]);
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn should_tick_live_image_every_second() {
        let view = Arc::new(RecordingView::default());
        let client = DashboardClient::new(backend(), Arc::clone(&view), fast_config());

        let handle = client.start();
        tokio::time::sleep(Duration::from_millis(3500)).await;

        let sources = view.live_sources();
        assert_eq!(sources.len(), 3);
        for pair in sources.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn should_refresh_clips_every_minute() {
        let view = Arc::new(RecordingView::default());
        let client = DashboardClient::new(backend(), Arc::clone(&view), fast_config());

        let handle = client.start();
        tokio::time::sleep(Duration::from_millis(120_500)).await;

        assert_eq!(view.clips()[0].video, "/clips/2.mp4");
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_all_loops_on_shutdown() {
        let view = Arc::new(RecordingView::default());
        let client = DashboardClient::new(backend(), Arc::clone(&view), fast_config());

        let handle = client.start();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.shutdown();
        let calls_at_shutdown = view.calls().len();
        tokio::time::sleep(Duration::from_millis(180_000)).await;

        assert_eq!(view.calls().len(), calls_at_shutdown);
    }

    #[tokio::test]
    async fn should_save_typed_settings_on_demand() {
        let api = Arc::new(backend());
        let view = Arc::new(RecordingView::default());
        let client = DashboardClient::new(Arc::clone(&api), Arc::clone(&view), fast_config());
        view.type_settings(SettingsForm::default().with(SettingField::TriggerDelay, "12"));

        client.save_settings().await.unwrap();

        let posted = SettingsForm::from_form_body(&api.saved_bodies()[0]).unwrap();
        assert_eq!(posted.trigger_delay, "12");
        assert_eq!(posted.edge_detection_seconds, "");
    }
}
