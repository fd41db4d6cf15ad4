//! Browser Settings Adapter
//!
//! `localStorage` backing for the core key-value store, and the glue that
//! keeps the reactive store in step with the persisted preferences. The
//! persisted value is the source of truth: it is read once at startup and
//! every change is written through before the store is updated.

use soundfood_core::{
    update_client_settings, ClientSettings, ColorMode, KeyValueStore, StorageError, StorageResult,
};

use leptos::prelude::{Set, Update};

use crate::store::{AppStateStoreFields, AppStore};

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        storage()?
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}

/// Persist `patch` and mirror the merged result into the store.
///
/// If the write fails the change still applies for this page view.
pub fn change_settings(store: &AppStore, patch: ClientSettings) {
    match update_client_settings(patch, &LocalStorage) {
        Ok(merged) => store.settings().set(merged),
        Err(e) => {
            log::warn!("could not persist settings: {}", e);
            store.settings().update(|current| *current = current.merge(patch));
        }
    }
}

/// Reflect settings on the document root (`data-theme`, `lang`).
pub fn apply_settings(settings: &ClientSettings) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let result = match settings.color_mode {
        Some(mode) => root.set_attribute("data-theme", mode.as_str()),
        None => root.remove_attribute("data-theme"),
    }
    .and_then(|_| match settings.language {
        Some(language) => root.set_attribute("lang", language.as_str()),
        None => root.remove_attribute("lang"),
    });

    if let Err(e) = result {
        log::warn!("could not apply settings to document: {:?}", e);
    }
}

/// Color mode shown when none is stored
pub fn effective_color_mode(settings: &ClientSettings) -> ColorMode {
    settings.color_mode.unwrap_or(ColorMode::Light)
}
