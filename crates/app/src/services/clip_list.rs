//! Clip list refresher — fetches the clip listing and re-renders it.

use std::sync::Arc;

use stormwatch_domain::clip::ClipListItem;
use stormwatch_domain::error::StormwatchError;

use crate::ports::{DashboardView, SurveillanceApi};

/// Fetches `GET clips` and renders one item per clip.
///
/// There is no in-flight guard: overlapping refreshes each render when their
/// response arrives, so the response that resolves last wins.
pub struct ClipListRefresher<A, V> {
    api: Arc<A>,
    view: Arc<V>,
}

impl<A, V> ClipListRefresher<A, V>
where
    A: SurveillanceApi + Send + Sync,
    V: DashboardView,
{
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self { api, view }
    }

    /// Show the loader, clear the list, fetch and render.
    ///
    /// Returns the number of rendered items.
    ///
    /// # Errors
    ///
    /// Propagates the transport error from the API. In that case nothing is
    /// rendered and the loader stays visible.
    pub async fn refresh(&self) -> Result<usize, StormwatchError> {
        self.view.show_loader();
        self.view.clear_clips();

        let clips = self.api.fetch_clips().await?;

        let items = ClipListItem::from_clips_at(&clips, self.api.endpoints());
        let count = items.len();

        self.view.render_clips(items);
        self.view.hide_loader();
        tracing::debug!(count, "rendered clip list");
        Ok(count)
    }
}
