//! Settings Bar Component
//!
//! Theme and language switches. Every change goes through
//! [`change_settings`], which persists before updating the store.

use leptos::prelude::*;
use soundfood_core::{ClientSettings, Language};

use crate::settings::{change_settings, effective_color_mode};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsBar() -> impl IntoView {
    let store = use_app_store();

    let toggle_theme = move |_| {
        let next = effective_color_mode(&store.settings().get_untracked()).toggled();
        change_settings(&store, ClientSettings::with_color_mode(next));
    };

    view! {
        <div class="settings-bar">
            <button class="theme-btn" on:click=toggle_theme>
                {move || effective_color_mode(&store.settings().get()).toggled().as_str()}
            </button>
            {Language::ALL.iter().map(|language| {
                let language = *language;
                let is_active = move || store.settings().get().language.unwrap_or(Language::En) == language;
                view! {
                    <button
                        class=move || if is_active() { "lang-btn active" } else { "lang-btn" }
                        on:click=move |_| change_settings(&store, ClientSettings::with_language(language))
                    >
                        {language.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
