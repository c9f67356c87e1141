//! The single shared clip player.

use leptos::html;
use leptos::prelude::*;
use stormwatch_domain::player::{PlayerCommand, PlayerState};

/// Handle on the `videoPreview` element and its `<source>` child.
///
/// `Copy`, so every clip's click handler can hold one.
#[derive(Clone, Copy)]
pub struct Player {
    pub video: NodeRef<html::Video>,
    pub source: NodeRef<html::Source>,
    pub state: RwSignal<PlayerState>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            video: NodeRef::new(),
            source: NodeRef::new(),
            state: RwSignal::new(PlayerState::new()),
        }
    }

    /// Pause, retarget to `url`, reload and play.
    pub fn show(&self, url: &str) {
        let Some(plan) = self.state.try_update(|state| state.switch_to(url)) else {
            return;
        };
        let (Some(video), Some(source)) = (self.video.get_untracked(), self.source.get_untracked())
        else {
            leptos::logging::warn!("video player is not mounted");
            return;
        };

        for command in plan {
            match command {
                PlayerCommand::Pause => {
                    if let Err(err) = video.pause() {
                        leptos::logging::warn!("failed to pause video: {err:?}");
                    }
                }
                PlayerCommand::SetSource(url) => source.set_src(&url),
                PlayerCommand::Load => video.load(),
                PlayerCommand::Play => {
                    if let Err(err) = video.play() {
                        leptos::logging::warn!("failed to play video: {err:?}");
                    }
                }
            }
        }
    }
}
