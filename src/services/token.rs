//! Bearer token persistence in browser localStorage.
//!
//! A single token string under one key. No expiry, no rotation. All
//! operations are guarded: environments without storage access (denied
//! permissions, missing window) degrade to no-ops and never throw.

use crate::config::TOKEN_STORAGE_KEY;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The stored token, or `None` when absent or storage is unavailable.
pub fn get_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

/// Persist or clear the token.
pub fn set_token(token: Option<&str>) {
    if let Some(storage) = local_storage() {
        let result = match token {
            Some(t) => storage.set_item(TOKEN_STORAGE_KEY, t),
            None => storage.remove_item(TOKEN_STORAGE_KEY),
        };
        if let Err(e) = result {
            log::warn!("localStorage write failed: {:?}", e);
        }
    }
}
