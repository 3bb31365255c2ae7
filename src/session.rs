//! Session Store
//!
//! The single process-wide shared slot: bearer token plus cached profile.
//! Initialized from localStorage at startup, written only by login, cleared
//! only by logout (both keys together). Uses reactive_stores for
//! field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LoginResponse, Profile};

const TOKEN_KEY: &str = "accessToken";
const PROFILE_KEY: &str = "user";

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Bearer token attached to every backend request
    pub token: Option<String>,
    /// Profile snapshot returned at login
    pub profile: Option<Profile>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Restore a persisted session, if any. A profile snapshot that no longer
/// deserializes is treated as no session.
pub fn load_session() -> SessionState {
    let Some(storage) = local_storage() else {
        return SessionState::default();
    };
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let profile = storage
        .get_item(PROFILE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str::<Profile>(&raw).ok());
    match (token, profile) {
        (Some(token), Some(profile)) => SessionState {
            token: Some(token),
            profile: Some(profile),
        },
        _ => SessionState::default(),
    }
}

/// Persist and publish a successful login
pub fn store_login(store: &SessionStore, response: LoginResponse) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &response.token.access_token);
        if let Ok(raw) = serde_json::to_string(&response.profile) {
            let _ = storage.set_item(PROFILE_KEY, &raw);
        }
    }
    store.token().set(Some(response.token.access_token));
    store.profile().set(Some(response.profile));
}

/// Clear both persisted keys and the in-memory session
pub fn store_logout(store: &SessionStore) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(PROFILE_KEY);
    }
    store.token().set(None);
    store.profile().set(None);
}

/// Token read at call time; requests made after logout send "" and are
/// rejected server-side.
pub fn token_value(store: &SessionStore) -> String {
    store.token().get_untracked().unwrap_or_default()
}

/// Role names of the current profile, empty when logged out
pub fn role_names(store: &SessionStore) -> Option<Vec<String>> {
    store.profile().with(|p| p.as_ref().map(|p| p.role_names()))
}
