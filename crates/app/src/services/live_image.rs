//! Live image refresher — re-targets the live still on every tick.

use std::sync::{Arc, Mutex, PoisonError};

use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::live::LiveImage;
use stormwatch_domain::time::now_millis;

use crate::ports::DashboardView;

/// Points the view's live image at a fresh `live.jpeg?<ts>` URL.
///
/// No request is made here: the view fetches the image when its source
/// changes, and a failed load is simply replaced on the next tick.
pub struct LiveImageRefresher<V> {
    endpoints: Endpoints,
    view: Arc<V>,
    live: Mutex<LiveImage>,
}

impl<V: DashboardView> LiveImageRefresher<V> {
    pub fn new(endpoints: Endpoints, view: Arc<V>) -> Self {
        Self {
            endpoints,
            view,
            live: Mutex::new(LiveImage::new()),
        }
    }

    /// Run one tick at the current wall-clock time.
    pub fn tick(&self) -> String {
        self.tick_at(now_millis())
    }

    /// Run one tick as if the clock read `now_millis`.
    pub fn tick_at(&self, now_millis: i64) -> String {
        let cache_buster = self
            .live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next(now_millis);
        let src = self.endpoints.live(cache_buster);
        tracing::trace!(%src, "refreshing live image");
        self.view.set_live_source(&src);
        src
    }
}
