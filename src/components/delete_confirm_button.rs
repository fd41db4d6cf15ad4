//! Delete Confirm Button Component
//!
//! Inline two-step delete: × arms the button, ✓ confirms, ✗ backs out.
//! Clicks never reach the row underneath, which would open the dish form.

use leptos::prelude::*;

use crate::messages::message;
use crate::store::{current_language, use_app_store};

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let armed = RwSignal::new(false);

    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(true);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! { <button class=button_class.clone() on:click=arm>"×"</button> }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {move || message("confirmDelete", current_language(&store))}
                </span>
                <button class="confirm-btn" on:click=confirm>"✓"</button>
                <button class="cancel-btn" on:click=cancel>"✗"</button>
            </span>
        </Show>
    }
}
