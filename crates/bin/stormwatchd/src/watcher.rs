//! Headless watcher — the dashboard loops rendered into the log.
//!
//! The view remembers which clips it has already reported, so each refresh
//! only logs what is new. After the first listing, the player follows the
//! first newly recorded clip. At startup one live frame is fetched to
//! confirm the camera feed answers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use stormwatch_app::ports::{DashboardView, MediaPlayer, SurveillanceApi};
use stormwatch_app::services::playback::PlaybackService;
use stormwatch_domain::clip::ClipListItem;
use stormwatch_domain::error::StormwatchError;
use stormwatch_domain::player::PlayerState;
use stormwatch_domain::settings::SettingsForm;
use stormwatch_domain::time::now_millis;

/// Fetch one live frame and report its size.
///
/// # Errors
///
/// Propagates the transport error from the API.
pub async fn check_live_feed<A: SurveillanceApi>(api: &A) -> Result<usize, StormwatchError> {
    let frame = api.fetch_live_image(now_millis()).await?;
    tracing::info!(bytes = frame.len(), "live feed reachable");
    Ok(frame.len())
}

/// Player that only reports what it would do.
#[derive(Debug, Default)]
pub struct LoggingPlayer;

impl MediaPlayer for LoggingPlayer {
    fn pause(&self) {
        tracing::debug!("player paused");
    }

    fn load(&self, url: &str) {
        tracing::debug!(%url, "player loading");
    }

    fn play(&self) {
        tracing::debug!("player playing");
    }
}

#[derive(Default)]
struct Seen {
    primed: bool,
    videos: HashSet<String>,
    settings: SettingsForm,
}

/// [`DashboardView`] that logs instead of drawing.
pub struct LoggingView {
    seen: Mutex<Seen>,
    playback: PlaybackService<LoggingPlayer>,
}

impl Default for LoggingView {
    fn default() -> Self {
        Self {
            seen: Mutex::default(),
            playback: PlaybackService::new(Arc::new(LoggingPlayer)),
        }
    }
}

impl LoggingView {
    /// What the player is currently showing.
    pub fn player(&self) -> PlayerState {
        self.playback.state()
    }
}

impl DashboardView for LoggingView {
    fn set_live_source(&self, src: &str) {
        tracing::trace!(%src, "live image");
    }

    fn show_loader(&self) {
        tracing::debug!("loading clips");
    }

    fn hide_loader(&self) {
        tracing::debug!("clips loaded");
    }

    fn clear_clips(&self) {}

    fn render_clips(&self, items: Vec<ClipListItem>) {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        let fresh: Vec<&ClipListItem> = items
            .iter()
            .filter(|item| !seen.videos.contains(&item.video))
            .collect();

        if seen.primed {
            for item in &fresh {
                tracing::info!(title = %item.title, video = %item.video, "new clip");
            }
        } else {
            tracing::info!(clips = items.len(), "clip list available");
        }
        let follow = if seen.primed {
            fresh.first().map(|item| (*item).clone())
        } else {
            None
        };

        seen.primed = true;
        seen.videos.extend(items.iter().map(|item| item.video.clone()));
        drop(seen);

        if let Some(item) = follow {
            self.playback.select(&item);
        }
    }

    fn populate_settings(&self, form: &SettingsForm) {
        tracing::info!(settings = ?form.pairs(), "backend settings");
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .settings = form.clone();
    }

    fn read_settings(&self) -> SettingsForm {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .settings
            .clone()
    }
}
