//! Browser persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth client keeps the live session in memory; these helpers are the
//! only code that touches `localStorage`/`sessionStorage`, so the choice of
//! area (remember me or not) stays in one place. Native builds no-op.

use crate::state::session::Session;

#[cfg(feature = "csr")]
const SESSION_KEY: &str = "narthex_session";

/// Which browser storage a session should outlive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives browser restarts (`localStorage`); the "remember me" path.
    Local,
    /// Survives reloads only (`sessionStorage`).
    Session,
}

#[cfg(feature = "csr")]
fn area_storage(area: StorageArea) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match area {
        StorageArea::Local => window.local_storage().ok().flatten(),
        StorageArea::Session => window.session_storage().ok().flatten(),
    }
}

/// Which area currently holds a persisted session, if any. Used to write a
/// refreshed token back where the original sign-in put it.
pub fn stored_area() -> Option<StorageArea> {
    #[cfg(feature = "csr")]
    {
        for area in [StorageArea::Local, StorageArea::Session] {
            if let Some(storage) = area_storage(area) {
                if matches!(storage.get_item(SESSION_KEY), Ok(Some(_))) {
                    return Some(area);
                }
            }
        }
        None
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Load a previously persisted session, preferring the longer-lived area.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        for area in [StorageArea::Local, StorageArea::Session] {
            let Some(storage) = area_storage(area) else {
                continue;
            };
            if let Ok(Some(raw)) = storage.get_item(SESSION_KEY) {
                if let Ok(session) = serde_json::from_str(&raw) {
                    return Some(session);
                }
                // Unreadable blob from an older build; drop it.
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
        None
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist `session` to `area` and clear the other area so a stale copy
/// cannot resurrect after sign-out or a remember-me change.
pub fn save_session(session: &Session, area: StorageArea) {
    #[cfg(feature = "csr")]
    {
        let other = match area {
            StorageArea::Local => StorageArea::Session,
            StorageArea::Session => StorageArea::Local,
        };
        if let Some(storage) = area_storage(other) {
            let _ = storage.remove_item(SESSION_KEY);
        }
        let Some(storage) = area_storage(area) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, area);
    }
}

/// Remove the persisted session from both areas.
pub fn clear_session() {
    #[cfg(feature = "csr")]
    {
        for area in [StorageArea::Local, StorageArea::Session] {
            if let Some(storage) = area_storage(area) {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}
