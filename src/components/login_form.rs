//! Login Form Component
//!
//! Exchanges credentials for a token and persists the session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use soundfood_core::{clear_session, save_session, Session};

use crate::commands;
use crate::context::AppContext;
use crate::messages::message;
use crate::settings::LocalStorage;
use crate::store::{current_language, store_reset_menu, use_app_store, AppStateStoreFields, AppStore};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            return;
        }
        let language = current_language(&store);

        spawn_local(async move {
            match commands::login(user.trim(), &pass).await {
                Ok(response) => {
                    let session = Session::new(response.token, Some(user.trim().to_string()));
                    if let Err(e) = save_session(&session, &LocalStorage) {
                        log::warn!("session not persisted: {}", e);
                    }
                    set_password.set(String::new());
                    store.session().set(Some(session));
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    ctx.notify(message("loginFailed", language), true);
                }
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h1>"SoundFood"</h1>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Sign in"</button>
        </form>
    }
}

/// Drop the session and any unsaved work
pub fn logout(store: &AppStore) {
    if let Err(e) = clear_session(&LocalStorage) {
        log::warn!("session not cleared: {}", e);
    }
    store.session().set(None);
    store_reset_menu(store);
}
