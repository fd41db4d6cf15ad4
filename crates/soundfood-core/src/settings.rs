//! Client Settings
//!
//! Display preferences persisted as one JSON object under
//! [`CLIENT_SETTINGS_KEY`]. Reads are tolerant: anything unrecognized is
//! dropped rather than reported. Writes go through
//! [`update_client_settings`] so that changing one preference never loses
//! another.
//!
//! There is no locking: a read-merge-write racing an external writer of the
//! same key resolves as last write wins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::{KeyValueStore, StorageError, StorageResult};

/// Well-known storage key for [`ClientSettings`]
pub const CLIENT_SETTINGS_KEY: &str = "soundfood.clientSettings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    It,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::It];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
        }
    }
}

/// Persisted preferences. An absent field means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl ClientSettings {
    pub fn with_color_mode(color_mode: ColorMode) -> Self {
        Self { color_mode: Some(color_mode), ..Default::default() }
    }

    pub fn with_language(language: Language) -> Self {
        Self { language: Some(language), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.color_mode.is_none() && self.language.is_none()
    }

    /// Shallow merge: fields set in `patch` win, the rest are kept.
    pub fn merge(self, patch: ClientSettings) -> ClientSettings {
        ClientSettings {
            color_mode: patch.color_mode.or(self.color_mode),
            language: patch.language.or(self.language),
        }
    }

    /// Parse a stored payload, keeping only recognized, valid fields.
    pub fn from_json_lenient(raw: &str) -> ClientSettings {
        let object = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                log::warn!("client settings payload is not an object, ignoring it");
                return ClientSettings::default();
            }
            Err(e) => {
                log::warn!("discarding malformed client settings: {}", e);
                return ClientSettings::default();
            }
        };

        ClientSettings {
            color_mode: field(&object, "colorMode"),
            language: field(&object, "language"),
        }
    }
}

fn field<T: serde::de::DeserializeOwned>(object: &serde_json::Map<String, Value>, name: &str) -> Option<T> {
    let value = object.get(name)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::debug!("dropping invalid client setting {}={}", name, value);
            None
        }
    }
}

/// Read the stored settings. Never fails: missing or corrupt data yields
/// empty settings.
pub fn load_client_settings<S: KeyValueStore + ?Sized>(store: &S) -> ClientSettings {
    match store.get_item(CLIENT_SETTINGS_KEY) {
        Some(raw) => ClientSettings::from_json_lenient(&raw),
        None => ClientSettings::default(),
    }
}

/// Overwrite the stored settings with `settings`.
pub fn save_client_settings<S: KeyValueStore + ?Sized>(settings: &ClientSettings, store: &S) -> StorageResult<()> {
    let raw = serde_json::to_string(settings).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set_item(CLIENT_SETTINGS_KEY, &raw)
}

/// Merge `patch` over the stored settings, persist and return the result.
pub fn update_client_settings<S: KeyValueStore + ?Sized>(patch: ClientSettings, store: &S) -> StorageResult<ClientSettings> {
    let merged = load_client_settings(store).merge(patch);
    save_client_settings(&merged, store)?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let settings = ClientSettings {
            color_mode: Some(ColorMode::Dark),
            language: Some(Language::It),
        };
        save_client_settings(&settings, &store).unwrap();
        assert_eq!(load_client_settings(&store), settings);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(load_client_settings(&store), ClientSettings::default());
        assert!(load_client_settings(&store).is_empty());
    }

    #[test]
    fn test_corrupt_payload_is_empty() {
        let store = MemoryStore::with_item(CLIENT_SETTINGS_KEY, "{not-json");
        assert_eq!(load_client_settings(&store), ClientSettings::default());
    }

    #[test]
    fn test_non_object_payload_is_empty() {
        for raw in ["[\"dark\"]", "\"dark\"", "42", "null", "true"] {
            let store = MemoryStore::with_item(CLIENT_SETTINGS_KEY, raw);
            assert_eq!(load_client_settings(&store), ClientSettings::default(), "payload {}", raw);
        }
    }

    #[test]
    fn test_invalid_and_unknown_fields_dropped() {
        let store = MemoryStore::with_item(
            CLIENT_SETTINGS_KEY,
            r#"{"colorMode":"sepia","language":"it","fontSize":14}"#,
        );
        let loaded = load_client_settings(&store);
        assert_eq!(loaded, ClientSettings::with_language(Language::It));

        let store = MemoryStore::with_item(CLIENT_SETTINGS_KEY, r#"{"colorMode":"dark","language":7}"#);
        assert_eq!(load_client_settings(&store), ClientSettings::with_color_mode(ColorMode::Dark));
    }

    #[test]
    fn test_saved_payload_has_only_known_fields() {
        let store = MemoryStore::with_item(CLIENT_SETTINGS_KEY, r#"{"colorMode":"light","legacy":true}"#);
        update_client_settings(ClientSettings::with_language(Language::En), &store).unwrap();

        let raw = store.get_item(CLIENT_SETTINGS_KEY).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "colorMode": "light", "language": "en" }));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let store = MemoryStore::new();
        save_client_settings(&ClientSettings::with_color_mode(ColorMode::Light), &store).unwrap();
        assert_eq!(store.get_item(CLIENT_SETTINGS_KEY).as_deref(), Some(r#"{"colorMode":"light"}"#));

        save_client_settings(&ClientSettings::default(), &store).unwrap();
        assert_eq!(store.get_item(CLIENT_SETTINGS_KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn test_update_preserves_untouched_fields() {
        let store = MemoryStore::new();
        save_client_settings(
            &ClientSettings {
                color_mode: Some(ColorMode::Light),
                language: Some(Language::En),
            },
            &store,
        )
        .unwrap();

        let merged = update_client_settings(ClientSettings::with_language(Language::It), &store).unwrap();
        let expected = ClientSettings {
            color_mode: Some(ColorMode::Light),
            language: Some(Language::It),
        };
        assert_eq!(merged, expected);
        assert_eq!(load_client_settings(&store), expected);
    }

    #[test]
    fn test_update_creates_lazily() {
        let store = MemoryStore::new();
        let merged = update_client_settings(ClientSettings::with_color_mode(ColorMode::Dark), &store).unwrap();
        assert_eq!(merged, ClientSettings::with_color_mode(ColorMode::Dark));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = MemoryStore::new();
        save_client_settings(
            &ClientSettings {
                color_mode: Some(ColorMode::Dark),
                language: Some(Language::It),
            },
            &store,
        )
        .unwrap();
        save_client_settings(&ClientSettings::with_language(Language::En), &store).unwrap();
        assert_eq!(load_client_settings(&store), ClientSettings::with_language(Language::En));
    }

    #[test]
    fn test_back_to_back_updates() {
        let store = MemoryStore::new();
        update_client_settings(ClientSettings::with_color_mode(ColorMode::Dark), &store).unwrap();
        update_client_settings(ClientSettings::with_language(Language::It), &store).unwrap();
        update_client_settings(ClientSettings::with_color_mode(ColorMode::Light), &store).unwrap();
        assert_eq!(
            load_client_settings(&store),
            ClientSettings {
                color_mode: Some(ColorMode::Light),
                language: Some(Language::It),
            }
        );
    }

    #[test]
    fn test_toggle_color_mode() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
    }
}
