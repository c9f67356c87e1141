//! Live still image, re-requested on a fixed period.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::live::LiveImage as CacheBuster;
use stormwatch_domain::time::now_millis;

use crate::dom;

/// The `live` image. Its source gets a fresh cache buster every tick.
#[component]
pub fn LiveImage(
    endpoints: Endpoints,
    /// Refresh period in milliseconds.
    interval_ms: u32,
) -> impl IntoView {
    let mut buster = CacheBuster::new();
    let (src, set_src) = signal(endpoints.live(buster.next(now_millis())));

    let interval = Interval::new(interval_ms, move || {
        set_src.set(endpoints.live(buster.next(now_millis())));
    });
    // Dropping the interval when the component is disposed cancels it.
    StoredValue::new_local(interval);

    view! {
        <img id={dom::LIVE} src=move || src.get() alt="Live view"/>
    }
}
