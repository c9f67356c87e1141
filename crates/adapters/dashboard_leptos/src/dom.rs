//! The page's element ids and what a click inside the clip list plays.
//!
//! Components render these ids; other scripts and stylesheets may rely on
//! them, so they never change.

use stormwatch_domain::clip::{ClipListItem, video_for_target};
use stormwatch_domain::settings::SettingField;

/// The live still image.
pub const LIVE: &str = "live";
/// The shared `<video>` element. Its only child is the `<source>`.
pub const PLAYER: &str = "videoPreview";
/// The clip list container.
pub const CLIP_LIST: &str = "videoList";
/// Spinner shown while the clip list loads.
pub const LOADER: &str = "loader";
/// The settings submit button.
pub const SAVE_SETTINGS: &str = "saveSettings";

/// Settings inputs are numeric and accept fractional seconds.
pub const SETTINGS_INPUT_TYPE: &str = "number";
pub const SETTINGS_INPUT_STEP: &str = "any";

/// Ids of the four settings inputs, in wire order.
pub fn settings_inputs() -> [&'static str; 4] {
    SettingField::ALL.map(SettingField::input_id)
}

/// Video to play for a click on the element with id `target_id`.
///
/// Only a clip's thumbnail and title are targets; clicks elsewhere in the
/// list play nothing.
pub fn clicked_video(items: &[ClipListItem], target_id: &str) -> Option<String> {
    video_for_target(items, target_id).map(str::to_owned)
}
