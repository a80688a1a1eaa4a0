//! Session data model for the hosted identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route gate, the auth client, and every authenticated page share this
//! model. `SessionState` is the value provided through context; pages read
//! it, only the auth client writes it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier (UUID string minted by the identity service).
    pub id: String,
    /// Sign-in email, if the account has one (OAuth accounts may not).
    pub email: Option<String>,
}

/// A provider-issued session: proof that a user is authenticated.
///
/// Sessions are never fabricated locally: every value decodes from an
/// identity-service response or from the persisted copy of one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// Token scheme, `"bearer"` in practice.
    pub token_type: String,
    /// Token used to obtain a fresh session once `access_token` expires.
    pub refresh_token: Option<String>,
    /// Expiry as unix seconds, if the service reported one.
    pub expires_at: Option<u64>,
    /// The user this session belongs to.
    pub user: AuthUser,
}

impl Session {
    /// Whether the session expires within `margin_secs` of `now_unix`.
    ///
    /// Sessions without a reported expiry never qualify for a refresh.
    pub fn expires_within(&self, now_unix: u64, margin_secs: u64) -> bool {
        self.expires_at
            .is_some_and(|at| at <= now_unix.saturating_add(margin_secs))
    }
}

/// Resolution of the authentication question, as currently known.
///
/// Starts `Unknown` and flips to one of the terminal answers once the
/// identity service responds; later pushes (login, logout, token refresh)
/// may move between the terminals for the lifetime of the app.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No provider response observed yet.
    #[default]
    Unknown,
    /// A session is live.
    SignedIn(Session),
    /// The provider answered: nobody is signed in.
    SignedOut,
}

impl SessionState {
    /// Fold an optional session into the matching terminal state.
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::SignedIn(session),
            None => Self::SignedOut,
        }
    }

    /// Whether the provider has answered at all.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            _ => None,
        }
    }
}

/// Kind of change the identity service reported alongside a state update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChange {
    /// First answer after startup (restored session or confirmed absence).
    InitialSession,
    /// A sign-in completed (password, signup, or OAuth callback).
    SignedIn,
    /// The session ended (sign-out or refresh rejection).
    SignedOut,
    /// The access token was exchanged; the user did not change.
    TokenRefreshed,
}
