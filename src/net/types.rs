//! Wire DTOs for the Supabase auth and row APIs.
//!
//! DESIGN
//! ======
//! These types mirror the service payloads field for field; conversion into
//! app types ([`Session`], [`AuthUser`]) happens in one place so expiry
//! normalization cannot drift between sign-in, refresh, and the OAuth
//! callback. Profile rows keep every column optional because the table is
//! populated lazily and PostgREST returns `null` for untouched columns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{AuthUser, Session};

/// User object embedded in auth responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireUser {
    /// Auth user identifier (UUID string).
    pub id: String,
    /// Primary email, absent for some OAuth identities.
    pub email: Option<String>,
}

/// Token grant payload returned by sign-in, signup, and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSession {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token scheme, in practice always `"bearer"`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Relative lifetime in seconds, when reported.
    pub expires_in: Option<u64>,
    /// Absolute expiry in unix seconds; newer service versions send this.
    pub expires_at: Option<u64>,
    /// Opaque token for the refresh grant.
    pub refresh_token: Option<String>,
    /// The authenticated user.
    pub user: WireUser,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl WireUser {
    pub fn into_user(self) -> AuthUser {
        AuthUser { id: self.id, email: self.email }
    }
}

impl WireSession {
    /// Convert to the app session, resolving expiry against `now_unix` when
    /// the service only reported a relative lifetime.
    pub fn into_session(self, now_unix: u64) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_unix.saturating_add(secs)));
        Session {
            access_token: self.access_token,
            token_type: self.token_type,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user.into_user(),
        }
    }
}

/// Error body shapes the services use, superimposed.
///
/// GoTrue has shipped `{"error","error_description"}`, `{"code","msg"}`, and
/// `{"error_code","msg"}` across versions; PostgREST sends `{"code","message",
/// "details","hint"}`. One permissive struct covers all of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WireErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WireErrorBody {
    /// The most human-readable message present, if any. Blank fields are
    /// skipped, not treated as found.
    pub fn best_message(&self) -> Option<&str> {
        [&self.error_description, &self.msg, &self.message, &self.error]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|msg| !msg.trim().is_empty())
    }
}

/// Result of a signup request.
///
/// With email confirmation enabled the service creates the user but returns
/// no token grant; the UI tells the user to check their inbox instead of
/// navigating anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Auto-confirm project: signed in immediately.
    SignedIn(Session),
    /// Confirmation email sent to the given address.
    ConfirmationRequired { email: Option<String> },
}

/// Columns read for the profile page header (`select=avatar_url,name`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Display name.
    pub name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Columns backing the edit form (`select=name,username,email,about_me`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    /// Display name.
    pub name: Option<String>,
    /// Unique handle.
    pub username: Option<String>,
    /// Contact email shown read-only in the form.
    pub email: Option<String>,
    /// Free-form bio.
    pub about_me: Option<String>,
}

/// Row upserted when the edit form is saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Auth user id; the upsert conflict target.
    pub id: String,
    /// Contact email carried along unchanged.
    pub email: Option<String>,
    /// Unique handle.
    pub username: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Free-form bio.
    pub about_me: Option<String>,
    /// RFC 3339 timestamp of this save.
    pub updated_at: String,
}
