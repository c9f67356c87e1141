//! Clip — a recorded motion-triggered video segment.
//!
//! The backend lists clips as `{ title, thumbnail, video }` records, newest
//! first. The dashboard never reorders them.

mod list_item;
mod title;

use serde::{Deserialize, Serialize};

pub use list_item::{ClipListItem, video_for_target};
pub use title::ClipTitle;

/// A recorded clip as returned by `GET clips`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    /// Timestamp-parseable title (see [`ClipTitle`]).
    pub title: String,
    /// URL of the thumbnail image.
    pub thumbnail: String,
    /// URL of the video file.
    pub video: String,
}

impl Clip {
    /// Create a clip from its three URLs/labels.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        thumbnail: impl Into<String>,
        video: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            thumbnail: thumbnail.into(),
            video: video.into(),
        }
    }

    /// Parse the title into a timestamp.
    #[must_use]
    pub fn parsed_title(&self) -> ClipTitle {
        ClipTitle::parse(&self.title)
    }
}
