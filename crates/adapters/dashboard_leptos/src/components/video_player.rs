//! The shared clip player.

use leptos::prelude::*;

use crate::dom;
use crate::player::Player;

#[component]
pub fn VideoPlayer(player: Player) -> impl IntoView {
    let now_playing = move || {
        player
            .state
            .with(|state| state.source().map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <video id={dom::PLAYER} node_ref=player.video controls=true preload="none">
            <source node_ref=player.source type="video/mp4"/>
        </video>
        <p class="now-playing">{now_playing}</p>
    }
}
