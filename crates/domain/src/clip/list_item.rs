//! Typed render record for one entry of the clip list.

use super::{Clip, ClipTitle};
use crate::endpoint::Endpoints;

/// Everything a view needs to draw one clip and wire its click targets.
///
/// Values are carried as plain data; views render them as text or escaped
/// attributes, never by splicing them into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipListItem {
    /// Position in the backend response.
    pub index: usize,
    /// Element id of the clickable thumbnail (`thumbnail{index}`).
    pub thumbnail_id: String,
    /// Element id of the clickable title (`title{index}`).
    pub title_id: String,
    /// Human-readable capture time.
    pub title: String,
    pub thumbnail: String,
    /// Video URL the player switches to when either target is activated.
    pub video: String,
}

impl ClipListItem {
    /// Build the render record for the clip at `index`.
    #[must_use]
    pub fn new(index: usize, clip: &Clip) -> Self {
        Self {
            index,
            thumbnail_id: format!("thumbnail{index}"),
            title_id: format!("title{index}"),
            title: ClipTitle::parse(&clip.title).to_string(),
            thumbnail: clip.thumbnail.clone(),
            video: clip.video.clone(),
        }
    }

    /// Build render records for a whole listing, preserving backend order.
    #[must_use]
    pub fn from_clips(clips: &[Clip]) -> Vec<Self> {
        clips
            .iter()
            .enumerate()
            .map(|(index, clip)| Self::new(index, clip))
            .collect()
    }

    /// Like [`from_clips`](Self::from_clips), with the thumbnail and video
    /// URLs resolved against `endpoints`.
    #[must_use]
    pub fn from_clips_at(clips: &[Clip], endpoints: &Endpoints) -> Vec<Self> {
        clips
            .iter()
            .enumerate()
            .map(|(index, clip)| {
                let mut item = Self::new(index, clip);
                item.thumbnail = endpoints.resolve(&item.thumbnail);
                item.video = endpoints.resolve(&item.video);
                item
            })
            .collect()
    }

    /// Whether `element_id` is one of this item's click targets.
    #[must_use]
    pub fn is_target(&self, element_id: &str) -> bool {
        element_id == self.thumbnail_id || element_id == self.title_id
    }
}

/// Find the video to play for a clicked element id.
#[must_use]
pub fn video_for_target<'a>(items: &'a [ClipListItem], element_id: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.is_target(element_id))
        .map(|item| item.video.as_str())
}
