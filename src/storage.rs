//! Token Storage
//!
//! The bearer token lives under a single local-storage key for the life of
//! the login session. All access tolerates an unavailable storage object.

const TOKEN_STORAGE_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read the stored bearer token, if any
pub fn load_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
}

/// Persist the bearer token after login/signup
pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

/// Drop the stored token on logout
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
