//! # stormwatch-dashboard
//!
//! Browser-resident dashboard, rendered client-side with Leptos.
//!
//! Three independent loops run against the backend: the live still image,
//! the clip listing, and the settings form. Clicking a clip swaps the shared
//! video player to it.

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
mod components;
pub mod config;
pub mod dom;
mod player;

use components::{ClipList, LiveImage, SettingsForm, VideoPlayer};
use config::PageSettings;
use player::Player;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let page = PageSettings::from_document();
    let player = Player::new();

    view! {
        <header>
            <h1>"stormwatch"</h1>
        </header>
        <main>
            <section class="live">
                <LiveImage endpoints=page.endpoints.clone() interval_ms=page.live_interval_ms/>
            </section>
            <section class="clips">
                <VideoPlayer player/>
                <ClipList
                    endpoints=page.endpoints.clone()
                    interval_ms=page.clips_interval_ms
                    player
                />
            </section>
            <section class="settings">
                <SettingsForm endpoints=page.endpoints/>
            </section>
        </main>
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    leptos::mount::mount_to_body(App);
}
