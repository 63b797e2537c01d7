//! Browser localStorage persistence of the logged-in user id.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior; on the server
//! every read is `None` and every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// localStorage key holding the current user id.
pub const USER_ID_KEY: &str = "userID";

/// Treat blank stored values as "no identity".
pub fn normalize_user_id(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Warning logged when a write to localStorage is refused (quota, private mode).
#[cfg(any(test, feature = "hydrate"))]
fn write_failed_message(key: &str, detail: &str) -> String {
    format!("localStorage write of {key:?} failed: {detail}; login will not survive reload")
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored user id, if any.
pub fn load_user_id() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(USER_ID_KEY).ok().flatten();
        normalize_user_id(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the user id returned by login.
pub fn save_user_id(user_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            log::warn!("localStorage unavailable; login will not survive reload");
            return;
        };
        if let Err(err) = storage.set_item(USER_ID_KEY, user_id) {
            log::warn!("{}", write_failed_message(USER_ID_KEY, &format!("{err:?}")));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
    }
}

/// Forget the stored user id on logout.
pub fn clear_user_id() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(USER_ID_KEY);
        }
    }
}
