//! Session persistence in `localStorage`.
//!
//! The token and the serialized user profile live under fixed keys and are
//! written and removed together: a token must never be stored without its
//! profile. Outside a browser every read returns `None` and writes are no-ops.

use crate::net::types::User;

pub const TOKEN_KEY: &str = "jwt_token";
pub const USER_KEY: &str = "session_user";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Read and decode the stored user profile, if any.
pub fn read_user() -> Option<User> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("stored profile is unreadable: {err}");
                None
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist a freshly established session.
pub fn write_session(token: &str, user: &User) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = local_storage() else { return };
        let _ = storage.set_item(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(raw) => {
                let _ = storage.set_item(USER_KEY, &raw);
            }
            Err(err) => {
                // Keep the invariant: no token without a profile.
                log::warn!("could not persist profile: {err}");
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, user);
    }
}

/// Remove both session keys.
pub fn clear_session() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
