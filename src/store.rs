//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dish list is
//! only ever replaced with the result of a reconciliation call, never edited
//! in place.

use leptos::prelude::*;
use reactive_stores::Store;
use soundfood_core::{
    confirm_dish, delete_list_dish, load_client_settings, load_session, rekey_confirmed, reorder_dish, save_dish,
    ClientSettings, Dish, DishId, DishKey, Language, Menu, MenuId, SaveStatus, Session, TempId,
};

use crate::settings::LocalStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Server id of the menu being authored, once created
    pub menu_id: Option<MenuId>,
    pub title: String,
    pub description: String,
    /// Working dish list, in menu order
    pub dishes: Vec<Dish>,
    /// Temporary ids confirmed by the server, for edits opened before the save
    pub confirmed: Vec<(TempId, DishId)>,
    pub settings: ClientSettings,
    pub session: Option<Session>,
}

impl AppState {
    /// Initial state, restoring persisted settings and session
    pub fn restore() -> Self {
        let settings = load_client_settings(&LocalStorage);
        let session = load_session(&LocalStorage);
        log::debug!("restored settings {:?}, signed in: {}", settings, session.is_some());
        Self {
            settings,
            session,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Language used for messages
pub fn current_language(store: &AppStore) -> Language {
    store.settings().get().language.unwrap_or(Language::En)
}

/// Snapshot of the menu being authored
pub fn store_menu(store: &AppStore) -> Menu {
    let description = store.description().get_untracked();
    Menu {
        id: store.menu_id().get_untracked(),
        title: store.title().get_untracked(),
        description: if description.trim().is_empty() { None } else { Some(description) },
        dishes: store.dishes().get_untracked(),
    }
}

// ========================
// Store Helper Functions
// ========================

/// Insert or update a dish
pub fn store_save_dish(store: &AppStore, key: &DishKey, dish: Dish) -> SaveStatus {
    let (key, dish) = rekey_confirmed(key, dish, &store.confirmed().get_untracked());
    let current = store.dishes().get_untracked();
    let (next, status) = save_dish(&key, dish, &current);
    if !status.is_error() {
        store.dishes().set(next);
    }
    status
}

/// Remove a dish from the working list
pub fn store_delete_dish(store: &AppStore, key: &DishKey) {
    let next = delete_list_dish(&store.dishes().get_untracked(), key);
    store.dishes().set(next);
}

/// Move a dish to a new position
pub fn store_reorder_dish(store: &AppStore, key: &DishKey, to_index: usize) {
    let next = reorder_dish(&store.dishes().get_untracked(), key, to_index);
    store.dishes().set(next);
}

/// Record the server id assigned to a dish
pub fn store_confirm_dish(store: &AppStore, key: &DishKey, server_id: DishId) {
    let next = confirm_dish(&store.dishes().get_untracked(), key, server_id);
    store.dishes().set(next);
    if let DishKey::Local(temp) = key {
        store.confirmed().update(|confirmed| confirmed.push((*temp, server_id)));
    }
}

/// Start a new, empty menu
pub fn store_reset_menu(store: &AppStore) {
    store.menu_id().set(None);
    store.title().set(String::new());
    store.description().set(String::new());
    store.dishes().set(Vec::new());
    store.confirmed().set(Vec::new());
}
