//! Menu Header Component
//!
//! Title and description of the menu, with save-draft and submit actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::messages::message;
use crate::store::{current_language, store_reset_menu, use_app_store, AppStateStoreFields};
use crate::submit::persist_menu;

#[component]
pub fn MenuHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let persist = move |submit: bool| {
        if ctx.busy.get_untracked() {
            return;
        }
        ctx.busy.set(true);
        let language = current_language(&store);
        spawn_local(async move {
            match persist_menu(store, submit).await {
                Ok(status) => {
                    ctx.notify(message(status.message_key(), language), status.is_error());
                    if submit && !status.is_error() {
                        store_reset_menu(&store);
                    }
                }
                Err(e) => {
                    log::error!("menu request failed: {}", e);
                    ctx.notify(message("requestFailed", language), true);
                }
            }
            ctx.busy.set(false);
        });
    };

    view! {
        <section class="menu-header">
            <input
                type="text"
                class="menu-title"
                placeholder="Menu title"
                prop:value=move || store.title().get()
                on:input=move |ev| store.title().set(event_target_value(&ev))
            />
            <textarea
                class="menu-description"
                placeholder="Description"
                prop:value=move || store.description().get()
                on:input=move |ev| store.description().set(event_target_value(&ev))
            />
            <div class="menu-actions">
                {move || store.menu_id().get().map(|id| view! { <span class="menu-id">"#" {id.0}</span> })}
                <button
                    type="button"
                    prop:disabled=move || ctx.busy.get()
                    on:click=move |_| persist(false)
                >
                    "Save draft"
                </button>
                <button
                    type="button"
                    class="primary"
                    prop:disabled=move || ctx.busy.get()
                    on:click=move |_| persist(true)
                >
                    "Submit menu"
                </button>
            </div>
        </section>
    }
}
