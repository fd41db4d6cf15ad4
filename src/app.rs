//! SoundFood Frontend App
//!
//! Main application component: login gate, menu editor and settings.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    bind_dish_reorder, logout, DishForm, DishList, EditTarget, LoginForm, MenuHeader, SectionPreview, SettingsBar, ToastView,
};
use crate::context::AppContext;
use crate::settings::apply_settings;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Persisted settings and session are read once, here
    let store: AppStore = Store::new(AppState::restore());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    // Bound here rather than in DishList, which unmounts on sign-out
    provide_context(bind_dish_reorder(store));

    // Mirror settings onto the document whenever they change
    Effect::new(move |_| {
        let settings = store.settings().get();
        apply_settings(&settings);
    });

    let signed_in = move || store.session().read().is_some();
    let username = move || {
        store
            .session()
            .get()
            .and_then(|s| s.username)
            .unwrap_or_default()
    };

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <span class="brand">"SoundFood"</span>
                <SettingsBar />
                <Show when=signed_in>
                    <span class="user">{username}</span>
                    <button class="logout-btn" on:click=move |_| logout(&store)>"Sign out"</button>
                </Show>
            </header>

            <Show when=signed_in fallback=|| view! { <LoginForm /> }>
                <main class="main-content">
                    <MenuHeader />
                    <div class="dish-toolbar">
                        <button on:click=move |_| ctx.edit(EditTarget::New)>"+ Dish"</button>
                    </div>
                    <DishList />
                    {move || ctx.editing.get().map(|target| view! { <DishForm target=target /> })}
                </main>
                <SectionPreview />
            </Show>

            <ToastView />
        </div>
    }
}
