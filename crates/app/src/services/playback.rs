//! Playback service — switches the shared player to a selected clip.

use std::sync::{Arc, Mutex, PoisonError};

use stormwatch_domain::clip::ClipListItem;
use stormwatch_domain::player::{PlayerCommand, PlayerState};

use crate::ports::MediaPlayer;

/// Drives the [`MediaPlayer`] and mirrors its state.
pub struct PlaybackService<P> {
    player: Arc<P>,
    state: Mutex<PlayerState>,
}

impl<P: MediaPlayer> PlaybackService<P> {
    pub fn new(player: Arc<P>) -> Self {
        Self {
            player,
            state: Mutex::new(PlayerState::new()),
        }
    }

    /// Pause, retarget to `video`, reload and play.
    pub fn show(&self, video: &str) {
        let plan = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .switch_to(video);

        let mut source = None;
        for command in plan {
            match command {
                PlayerCommand::Pause => self.player.pause(),
                PlayerCommand::SetSource(url) => source = Some(url),
                PlayerCommand::Load => {
                    if let Some(url) = source.take() {
                        self.player.load(&url);
                    }
                }
                PlayerCommand::Play => self.player.play(),
            }
        }
        tracing::debug!(%video, "switched player");
    }

    /// Activate a rendered clip (thumbnail or title click).
    pub fn select(&self, item: &ClipListItem) {
        self.show(&item.video);
    }

    /// Snapshot of the mirrored player state.
    pub fn state(&self) -> PlayerState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
