//! Media player state.
//!
//! The dashboard has a single shared player. Selecting a clip always follows
//! the same plan: pause whatever is playing, point the player at the new
//! source, reload it and start playback.

/// Playback status of the shared player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    Paused,
    Playing,
}

/// One step of a playback plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Pause,
    SetSource(String),
    Load,
    Play,
}

/// Mirror of the player's observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    source: Option<String>,
    status: PlayerStatus,
}

impl PlayerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// The command sequence that switches the player to `video`.
    #[must_use]
    pub fn switch_plan(video: &str) -> [PlayerCommand; 4] {
        [
            PlayerCommand::Pause,
            PlayerCommand::SetSource(video.to_string()),
            PlayerCommand::Load,
            PlayerCommand::Play,
        ]
    }

    /// Apply a single command to the mirrored state.
    pub fn apply(&mut self, command: &PlayerCommand) {
        match command {
            PlayerCommand::Pause => {
                if self.status == PlayerStatus::Playing {
                    self.status = PlayerStatus::Paused;
                }
            }
            PlayerCommand::SetSource(url) => self.source = Some(url.clone()),
            PlayerCommand::Load => {
                if self.source.is_some() {
                    self.status = PlayerStatus::Paused;
                }
            }
            PlayerCommand::Play => {
                if self.source.is_some() {
                    self.status = PlayerStatus::Playing;
                }
            }
        }
    }

    /// Switch to `video`, returning the commands that were applied.
    pub fn switch_to(&mut self, video: &str) -> [PlayerCommand; 4] {
        let plan = Self::switch_plan(video);
        for command in &plan {
            self.apply(command);
        }
        plan
    }
}
