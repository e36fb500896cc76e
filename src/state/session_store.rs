// ============================================================================
// SESSION STORE - Persisted session (user id, auth status, tokens...)
// ============================================================================
// Missing or corrupt entries read as absent; write failures are logged.
// ============================================================================

use std::rc::Rc;

use crate::models::{AuthStatus, SessionState, TokenBundle};
use crate::utils::constants::*;
use crate::utils::KeyValueStorage;

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> SessionState {
        let user_id = self.read(STORAGE_KEY_USER_ID);
        let authenticated = self.read(STORAGE_KEY_AUTH_STATUS).as_deref()
            == Some(AUTH_STATUS_AUTHENTICATED)
            && user_id.is_some();

        SessionState {
            user_id,
            auth_status: if authenticated {
                AuthStatus::Authenticated
            } else {
                AuthStatus::Unauthenticated
            },
            device_code: self.read(STORAGE_KEY_DEVICE_CODE),
            token_bundle: self.token_bundle(),
            remember_me: self.remember_me(),
        }
    }

    /// Auth status and user id are always written together.
    /// The token bundle is only written when the state carries one.
    pub fn save(&self, state: &SessionState) {
        if state.is_authenticated() {
            if let Some(user_id) = state.user_id.as_deref() {
                self.write(STORAGE_KEY_AUTH_STATUS, AUTH_STATUS_AUTHENTICATED);
                self.write(STORAGE_KEY_USER_ID, user_id);
            }
        } else {
            self.remove(STORAGE_KEY_AUTH_STATUS);
            self.remove(STORAGE_KEY_USER_ID);
        }

        if let Some(bundle) = &state.token_bundle {
            match serde_json::to_string(bundle) {
                Ok(json) => self.write(STORAGE_KEY_TOKEN_DATA, &json),
                Err(e) => log::error!("❌ [SESSION] Error serializing token bundle: {}", e),
            }
        }
        if let Some(device_code) = &state.device_code {
            self.write(STORAGE_KEY_DEVICE_CODE, device_code);
        }
        if let Some(remember_me) = state.remember_me {
            self.set_remember_me(remember_me);
        }
    }

    pub fn clear(&self) {
        for key in [
            STORAGE_KEY_AUTH_STATUS,
            STORAGE_KEY_USER_ID,
            STORAGE_KEY_TOKEN_DATA,
            STORAGE_KEY_DEVICE_CODE,
            STORAGE_KEY_REMEMBER_ME,
        ] {
            self.remove(key);
        }
        log::info!("🗑️ [SESSION] Session cleared");
    }

    /// Stored user id, or "default"
    pub fn effective_user_id(&self) -> String {
        self.read(STORAGE_KEY_USER_ID)
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string())
    }

    pub fn token_bundle(&self) -> Option<TokenBundle> {
        let json = self.read(STORAGE_KEY_TOKEN_DATA)?;
        match serde_json::from_str(&json) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                log::warn!("⚠️ [SESSION] Ignoring corrupt token data: {}", e);
                None
            }
        }
    }

    pub fn device_code(&self) -> Option<String> {
        self.read(STORAGE_KEY_DEVICE_CODE)
    }

    pub fn set_device_code(&self, device_code: &str) {
        self.write(STORAGE_KEY_DEVICE_CODE, device_code);
    }

    pub fn clear_device_code(&self) {
        self.remove(STORAGE_KEY_DEVICE_CODE);
    }

    pub fn remember_me(&self) -> Option<bool> {
        self.read(STORAGE_KEY_REMEMBER_ME)?.parse().ok()
    }

    pub fn set_remember_me(&self, remember_me: bool) {
        self.write(STORAGE_KEY_REMEMBER_ME, if remember_me { "true" } else { "false" });
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).filter(|value| !value.is_empty())
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::error!("❌ [SESSION] {}", e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::warn!("⚠️ [SESSION] {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn store() -> (Rc<MemoryStorage>, SessionStore) {
        let storage = Rc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        (storage, store)
    }

    #[test]
    fn save_then_load_keeps_status_and_user() {
        let (_, store) = store();
        store.save(&SessionState::authenticated("alice", None));

        let loaded = store.load();
        assert_eq!(loaded.auth_status, AuthStatus::Authenticated);
        assert_eq!(loaded.user_id.as_deref(), Some("alice"));
        assert_eq!(loaded.token_bundle, None);
    }

    #[test]
    fn token_bundle_round_trips_only_when_saved() {
        let (_, store) = store();
        let bundle = TokenBundle::new("A").with_refresh_token("R");
        store.save(&SessionState::authenticated("alice", Some(bundle.clone())));
        assert_eq!(store.load().token_bundle, Some(bundle.clone()));

        // Saving without a bundle leaves the stored one alone
        store.save(&SessionState::authenticated("bob", None));
        let loaded = store.load();
        assert_eq!(loaded.user_id.as_deref(), Some("bob"));
        assert_eq!(loaded.token_bundle, Some(bundle));
    }

    #[test]
    fn empty_store_loads_unauthenticated() {
        let (_, store) = store();
        assert_eq!(store.load(), SessionState::default());
        assert_eq!(store.effective_user_id(), "default");
    }

    #[test]
    fn status_without_user_is_not_authenticated() {
        let (storage, store) = store();
        storage.set_item(STORAGE_KEY_AUTH_STATUS, AUTH_STATUS_AUTHENTICATED).unwrap();
        storage.set_item(STORAGE_KEY_USER_ID, "").unwrap();
        let loaded = store.load();
        assert!(!loaded.is_authenticated());
        assert_eq!(loaded.user_id, None);
    }

    #[test]
    fn corrupt_entries_read_as_absent() {
        let (storage, store) = store();
        storage.set_item(STORAGE_KEY_TOKEN_DATA, "{not json").unwrap();
        storage.set_item(STORAGE_KEY_REMEMBER_ME, "maybe").unwrap();
        let loaded = store.load();
        assert_eq!(loaded.token_bundle, None);
        assert_eq!(loaded.remember_me, None);
    }

    #[test]
    fn clear_removes_everything() {
        let (storage, store) = store();
        store.save(&SessionState::authenticated("alice", Some(TokenBundle::new("A"))));
        store.set_device_code("DC");
        store.set_remember_me(true);

        store.clear();
        assert_eq!(store.load(), SessionState::default());
        assert_eq!(storage.get_item(STORAGE_KEY_TOKEN_DATA), None);
    }

    #[test]
    fn unauthenticated_save_drops_status_and_user() {
        let (storage, store) = store();
        store.save(&SessionState::authenticated("alice", None));
        store.save(&SessionState::default());
        assert_eq!(storage.get_item(STORAGE_KEY_AUTH_STATUS), None);
        assert_eq!(storage.get_item(STORAGE_KEY_USER_ID), None);
    }

    #[test]
    fn raw_values_match_browser_layout() {
        let (storage, store) = store();
        store.save(&SessionState::authenticated("alice", Some(TokenBundle::new("T1"))));
        assert_eq!(storage.get_item(STORAGE_KEY_USER_ID).as_deref(), Some("alice"));
        assert_eq!(storage.get_item(STORAGE_KEY_AUTH_STATUS).as_deref(), Some("authenticated"));
        assert_eq!(
            storage.get_item(STORAGE_KEY_TOKEN_DATA).as_deref(),
            Some(r#"{"access_token":"T1"}"#)
        );
    }
}
