//! Detection settings form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::settings::{SettingField, SettingsForm as Form};

use crate::api;
use crate::dom;

/// The four settings inputs and the `saveSettings` button.
///
/// Values are loaded once at mount and posted back exactly as the inputs
/// hold them. The inputs are numeric with `step="any"`, so fractional
/// tunables are accepted. Neither outcome is shown on the page; failures
/// only reach the console.
#[component]
pub fn SettingsForm(endpoints: Endpoints) -> impl IntoView {
    let form = RwSignal::new(Form::default());

    let load_from = endpoints.clone();
    spawn_local(async move {
        match api::fetch_settings(&load_from).await {
            Ok(settings) => form.set(Form::from(&settings)),
            Err(err) => leptos::logging::warn!("failed to load settings: {err}"),
        }
    });

    let save = move |_| {
        let endpoints = endpoints.clone();
        let values = form.get_untracked();
        spawn_local(async move {
            match api::save_settings(&endpoints, &values).await {
                Ok(()) => leptos::logging::log!("settings saved"),
                Err(err) => leptos::logging::warn!("failed to save settings: {err}"),
            }
        });
    };

    view! {
        <form on:submit=|ev| ev.prevent_default()>
            {SettingField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <label for=field.input_id()>{field.label()}</label>
                        <input
                            id=field.input_id()
                            type={dom::SETTINGS_INPUT_TYPE}
                            step={dom::SETTINGS_INPUT_STEP}
                            prop:value=move || form.with(|f| f.get(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.set(field, value));
                            }
                        />
                    }
                })
                .collect_view()}
            <button id={dom::SAVE_SETTINGS} type="button" on:click=save>
                "Save"
            </button>
        </form>
    }
}
