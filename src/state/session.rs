//! Session Store
//!
//! Holds the currently signed-in user as a reactive signal.
//!
//! The session is persistent: `set_user` writes through to localStorage
//! under a fixed key, so a page reload restores the signed-in user without
//! a network round trip. Signing out (or deleting the account) removes the
//! stored record.
//!
//! `Session` is constructed once in the app root and handed to views as a
//! typed component prop, so a view cannot compile without the session it
//! depends on. Only the sign-in/sign-up/sign-out/profile flows call
//! `set_user`; everything else reads.

use leptos::*;

/// localStorage key the signed-in user is persisted under.
const STORAGE_KEY: &str = "taskly_user";

/// The signed-in user as returned by the API.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
}

/// Reactive handle on the current session.
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<User>>,
}

impl Session {
    /// Create the session store, restoring a persisted user if present.
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(load_user()),
        }
    }

    /// Current user; tracked, so views re-render on sign-in/out.
    pub fn current(&self) -> Option<User> {
        self.user.get()
    }

    /// Current user without subscribing to changes.
    pub fn current_untracked(&self) -> Option<User> {
        self.user.get_untracked()
    }

    /// Whether a user is signed in; tracked.
    pub fn is_signed_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Replace the session and write it through to localStorage.
    pub fn set_user(&self, user: Option<User>) {
        store_user(user.as_ref());
        self.user.set(user);
    }
}

/// Read the persisted user from localStorage, if any.
fn load_user() -> Option<User> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                return serde_json::from_str(&raw).ok();
            }
        }
    }
    None
}

/// Persist the user, or clear the entry when signing out.
fn store_user(user: Option<&User>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            match user {
                Some(user) => {
                    if let Ok(raw) = serde_json::to_string(user) {
                        let _ = storage.set_item(STORAGE_KEY, &raw);
                    }
                }
                None => {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_maps_service_id_field() {
        let user: User = serde_json::from_str(
            r#"{"_id":"abc123","username":"ada","email":"ada@example.com","avatar":"/a.png"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "abc123");
        assert_eq!(user.username, "ada");
    }

    #[test]
    fn test_user_round_trips_through_storage_format() {
        let user = User {
            id: "abc123".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar: "/a.png".to_string(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        // The persisted form keeps the service's field name, so a stored
        // session from either origin deserializes the same way.
        assert!(raw.contains("\"_id\""));
        assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
    }
}
