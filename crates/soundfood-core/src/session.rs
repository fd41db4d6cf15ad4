//! Session Store
//!
//! Persists the authentication token next to the client settings, with the
//! same tolerant read behaviour.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError, StorageResult};

pub const SESSION_KEY: &str = "soundfood.session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, username: Option<String>) -> Self {
        Self { token: token.into(), username }
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Read the stored session. Corrupt payloads and blank tokens count as
/// signed out.
pub fn load_session<S: KeyValueStore + ?Sized>(store: &S) -> Option<Session> {
    let raw = store.get_item(SESSION_KEY)?;
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) if !session.token.trim().is_empty() => Some(session),
        Ok(_) => None,
        Err(e) => {
            log::warn!("discarding malformed session: {}", e);
            None
        }
    }
}

pub fn save_session<S: KeyValueStore + ?Sized>(session: &Session, store: &S) -> StorageResult<()> {
    let raw = serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set_item(SESSION_KEY, &raw)
}

pub fn clear_session<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<()> {
    store.remove_item(SESSION_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert_eq!(load_session(&store), None);

        let session = Session::new("abc123", Some("chef".to_string()));
        save_session(&session, &store).unwrap();
        assert_eq!(load_session(&store), Some(session.clone()));
        assert_eq!(session.bearer(), "Bearer abc123");

        clear_session(&store).unwrap();
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn test_corrupt_or_blank_session() {
        let store = MemoryStore::with_item(SESSION_KEY, "{\"tok");
        assert_eq!(load_session(&store), None);

        let store = MemoryStore::with_item(SESSION_KEY, r#"{"token":"  "}"#);
        assert_eq!(load_session(&store), None);

        let store = MemoryStore::with_item(SESSION_KEY, r#"{"token":"t","extra":1}"#);
        assert_eq!(load_session(&store), Some(Session::new("t", None)));
    }
}
