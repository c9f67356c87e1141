//! In-memory port implementations shared by the service tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use stormwatch_domain::clip::{Clip, ClipListItem};
use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::error::{StormwatchError, TransportError};
use stormwatch_domain::settings::{Settings, SettingsForm};

use crate::ports::{DashboardView, MediaPlayer, SurveillanceApi};

pub fn clip(i: usize) -> Clip {
    Clip::new(
        format!("2020-06-01T21:04:{:02}", i % 60),
        format!("/clips/{i}.jpeg"),
        format!("/clips/{i}.mp4"),
    )
}

fn unavailable(url: &str) -> StormwatchError {
    TransportError::Status {
        url: url.to_string(),
        status: 503,
    }
    .into()
}

#[derive(Default)]
struct RecordingViewState {
    calls: Vec<&'static str>,
    live_sources: Vec<String>,
    loader_visible: bool,
    clips: Vec<ClipListItem>,
    settings: SettingsForm,
}

/// View that records every call and keeps the resulting page state.
#[derive(Default)]
pub struct RecordingView {
    state: Mutex<RecordingViewState>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn live_sources(&self) -> Vec<String> {
        self.state.lock().unwrap().live_sources.clone()
    }

    pub fn loader_visible(&self) -> bool {
        self.state.lock().unwrap().loader_visible
    }

    pub fn clips(&self) -> Vec<ClipListItem> {
        self.state.lock().unwrap().clips.clone()
    }

    pub fn settings(&self) -> SettingsForm {
        self.state.lock().unwrap().settings.clone()
    }

    /// Simulate the user typing into the settings inputs.
    pub fn type_settings(&self, form: SettingsForm) {
        self.state.lock().unwrap().settings = form;
    }
}

impl DashboardView for RecordingView {
    fn set_live_source(&self, src: &str) {
        let mut state = self.state.lock().unwrap();
        state.calls.push("set_live_source");
        state.live_sources.push(src.to_string());
    }

    fn show_loader(&self) {
        let mut state = self.state.lock().unwrap();
        state.calls.push("show_loader");
        state.loader_visible = true;
    }

    fn hide_loader(&self) {
        let mut state = self.state.lock().unwrap();
        state.calls.push("hide_loader");
        state.loader_visible = false;
    }

    fn clear_clips(&self) {
        let mut state = self.state.lock().unwrap();
        state.calls.push("clear_clips");
        state.clips.clear();
    }

    fn render_clips(&self, items: Vec<ClipListItem>) {
        let mut state = self.state.lock().unwrap();
        state.calls.push("render_clips");
        state.clips = items;
    }

    fn populate_settings(&self, form: &SettingsForm) {
        let mut state = self.state.lock().unwrap();
        state.calls.push("populate_settings");
        state.settings = form.clone();
    }

    fn read_settings(&self) -> SettingsForm {
        let mut state = self.state.lock().unwrap();
        state.calls.push("read_settings");
        state.settings.clone()
    }
}

/// Player that records the order of control calls.
#[derive(Default)]
pub struct RecordingPlayer {
    calls: Mutex<Vec<String>>,
}

impl RecordingPlayer {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl MediaPlayer for RecordingPlayer {
    fn pause(&self) {
        self.calls.lock().unwrap().push("pause".to_string());
    }

    fn load(&self, url: &str) {
        self.calls.lock().unwrap().push(format!("load {url}"));
    }

    fn play(&self) {
        self.calls.lock().unwrap().push("play".to_string());
    }
}

/// Scripted backend: each `fetch_clips` pops the next queued response.
pub struct StubApi {
    endpoints: Endpoints,
    clips: Mutex<VecDeque<(Duration, Option<Vec<Clip>>)>>,
    settings: Mutex<Option<Settings>>,
    saved: Mutex<Vec<String>>,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::relative(),
            clips: Mutex::new(VecDeque::new()),
            settings: Mutex::new(None),
            saved: Mutex::new(Vec::new()),
        }
    }
}

impl StubApi {
    pub fn with_base(base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base).unwrap(),
            ..Self::default()
        }
    }

    pub fn push_clips(&self, delay: Duration, clips: Vec<Clip>) {
        self.clips.lock().unwrap().push_back((delay, Some(clips)));
    }

    pub fn push_clips_failure(&self) {
        self.clips.lock().unwrap().push_back((Duration::ZERO, None));
    }

    pub fn set_settings(&self, settings: Settings) {
        *self.settings.lock().unwrap() = Some(settings);
    }

    /// Form bodies received by `save_settings`, in order.
    pub fn saved_bodies(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

impl SurveillanceApi for StubApi {
    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn fetch_clips(&self) -> impl Future<Output = Result<Vec<Clip>, StormwatchError>> + Send {
        let next = self.clips.lock().unwrap().pop_front();
        let url = self.endpoints.clips();
        async move {
            let (delay, clips) = next.unwrap_or((Duration::ZERO, None));
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            clips.ok_or_else(|| unavailable(&url))
        }
    }

    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, StormwatchError>> + Send {
        let settings = self.settings.lock().unwrap().clone();
        let url = self.endpoints.settings();
        async move { settings.ok_or_else(|| unavailable(&url)) }
    }

    fn save_settings(
        &self,
        form: SettingsForm,
    ) -> impl Future<Output = Result<(), StormwatchError>> + Send {
        self.saved.lock().unwrap().push(form.to_form_body());
        async { Ok(()) }
    }

    fn fetch_live_image(
        &self,
        cache_buster: i64,
    ) -> impl Future<Output = Result<Vec<u8>, StormwatchError>> + Send {
        let url = self.endpoints.live(cache_buster);
        async move { Err(unavailable(&url)) }
    }
}
