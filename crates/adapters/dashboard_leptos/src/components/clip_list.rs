//! Clip list: fetched at mount and on a fixed period.

use gloo_timers::callback::Interval;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stormwatch_domain::clip::ClipListItem;
use stormwatch_domain::endpoint::Endpoints;

use crate::api;
use crate::components::Loading;
use crate::dom;
use crate::player::Player;

/// The `videoList` and its `loader`.
///
/// Each refresh shows the loader and empties the list, then replaces it
/// with the response. A failed fetch leaves the loader up until the next
/// refresh succeeds. Overlapping refreshes are not guarded; the response
/// that arrives last wins.
///
/// One click handler on the list serves every row: a click on
/// `thumbnail{k}` or `title{k}` plays clip *k*.
#[component]
pub fn ClipList(
    endpoints: Endpoints,
    /// Refresh period in milliseconds.
    interval_ms: u32,
    player: Player,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<ClipListItem>::new());
    let (loading, set_loading) = signal(true);

    let refresh = move || {
        set_loading.set(true);
        set_items.set(Vec::new());
        let endpoints = endpoints.clone();
        spawn_local(async move {
            match api::fetch_clips(&endpoints).await {
                Ok(clips) => {
                    set_items.set(ClipListItem::from_clips_at(&clips, &endpoints));
                    set_loading.set(false);
                }
                Err(err) => leptos::logging::warn!("failed to fetch clips: {err}"),
            }
        });
    };

    refresh();
    let interval = Interval::new(interval_ms, refresh);
    // Dropping the interval when the component is disposed cancels it.
    StoredValue::new_local(interval);

    let on_click = move |ev: MouseEvent| {
        let target = event_target::<web_sys::Element>(&ev).id();
        if let Some(video) = items.with_untracked(|items| dom::clicked_video(items, &target)) {
            player.show(&video);
        }
    };

    view! {
        <div id={dom::LOADER} style:display=move || if loading.get() { "" } else { "none" }>
            <Loading message="Loading clips\u{2026}"/>
        </div>
        <ul id={dom::CLIP_LIST} on:click=on_click>
            {move || {
                items.get().into_iter().map(|item| view! { <ClipRow item/> }).collect_view()
            }}
        </ul>
    }
}

/// One clip: its thumbnail and title are the click targets.
#[component]
fn ClipRow(item: ClipListItem) -> impl IntoView {
    view! {
        <li class="clip">
            <img
                id=item.thumbnail_id
                class="clip-thumbnail"
                src=item.thumbnail
                alt=item.title.clone()
            />
            <span id=item.title_id class="clip-title">
                {item.title}
            </span>
        </li>
    }
}
