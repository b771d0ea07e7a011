//! Local-storage persistence of the logged-in user.
//!
//! The session has no expiry or refresh semantics: it is valid until explicit
//! logout, regardless of what the backend thinks in the meantime.

use gloo::storage::{LocalStorage, Storage};

use shared::models::User;

/// Fixed storage key holding the serialized current user.
const SESSION_KEY: &str = "currentUser";

/// Load the persisted session, if any. A missing or unreadable record means
/// logged out.
pub fn restore() -> Option<User> {
    LocalStorage::get(SESSION_KEY).ok()
}

pub fn save(user: &User) {
    if let Err(e) = LocalStorage::set(SESSION_KEY, user) {
        tracing::warn!("failed to persist session: {e}");
    }
}

pub fn clear() {
    LocalStorage::delete(SESSION_KEY);
}
