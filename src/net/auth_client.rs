//! Auth client: session state, change subscriptions, and sign-in flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthClient` lives in leptos context for the whole app. The root
//! component subscribes and mirrors every change into a reactive signal;
//! pages call the async operations and let the subscription carry the
//! resulting state everywhere else. Between the startup restore and pushed
//! changes, last write wins.
//!
//! DESIGN
//! ======
//! State transitions funnel through one `apply` step that drops exact
//! duplicates, so repeated notifications for an unchanged session cause no
//! signal writes and no gate re-evaluation downstream. Listener callbacks
//! run outside the lock. Unsubscribing twice, or dropping an already
//! released subscription, is a no-op.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::error::ApiError;
use super::identity;
use super::types::SignupOutcome;
use crate::config::SupabaseConfig;
use crate::state::session::{AuthChange, Session, SessionState};
use crate::util::storage::{self, StorageArea};

#[cfg(feature = "csr")]
use crate::util::fragment::{FragmentOutcome, FragmentTokens, parse_auth_fragment};

/// Refresh when the access token has this little lifetime left.
pub const REFRESH_MARGIN_SECS: u64 = 60;

type ChangeListener = Arc<dyn Fn(&AuthChange, &SessionState) + Send + Sync>;

struct Listener {
    id: u64,
    callback: ChangeListener,
}

struct ClientInner {
    state: SessionState,
    listeners: Vec<Listener>,
    next_listener_id: u64,
}

/// Handle for one auth-change subscription; releasing it stops callbacks.
pub struct AuthSubscription {
    id: u64,
    inner: Weak<Mutex<ClientInner>>,
}

impl AuthSubscription {
    /// Stop receiving change callbacks. Safe to call more than once.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            lock_inner(&inner).listeners.retain(|listener| listener.id != self.id);
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

fn lock_inner(inner: &Mutex<ClientInner>) -> MutexGuard<'_, ClientInner> {
    // Single-threaded in the browser; recover instead of propagating poison.
    inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// What the startup restore should do with whatever storage held.
#[derive(Debug, PartialEq, Eq)]
enum RestoreAction {
    NothingStored,
    UseStored(Session),
    Refresh { refresh_token: String, fallback: Session },
}

#[derive(Clone)]
pub struct AuthClient {
    config: SupabaseConfig,
    inner: Arc<Mutex<ClientInner>>,
}

impl AuthClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config,
            inner: Arc::new(Mutex::new(ClientInner {
                state: SessionState::Unknown,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        lock_inner(&self.inner).state.clone()
    }

    /// Register `callback` for every subsequent state change.
    pub fn subscribe(
        &self,
        callback: impl Fn(&AuthChange, &SessionState) + Send + Sync + 'static,
    ) -> AuthSubscription {
        let mut inner = lock_inner(&self.inner);
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push(Listener { id, callback: Arc::new(callback) });
        AuthSubscription { id, inner: Arc::downgrade(&self.inner) }
    }

    /// Store `next` and notify listeners, unless it equals the current
    /// state, in which case nothing happens at all.
    fn apply(&self, change: &AuthChange, next: SessionState) {
        let listeners: Vec<ChangeListener> = {
            let mut inner = lock_inner(&self.inner);
            if inner.state == next {
                return;
            }
            inner.state = next.clone();
            inner.listeners.iter().map(|listener| Arc::clone(&listener.callback)).collect()
        };
        for listener in listeners {
            listener(change, &next);
        }
    }

    fn restore_decision(stored: Option<Session>, now_unix: u64) -> RestoreAction {
        let Some(session) = stored else {
            return RestoreAction::NothingStored;
        };
        if !session.expires_within(now_unix, REFRESH_MARGIN_SECS) {
            return RestoreAction::UseStored(session);
        }
        match session.refresh_token.clone() {
            Some(refresh_token) => RestoreAction::Refresh { refresh_token, fallback: session },
            // Nothing to refresh with: a hard-expired token is useless,
            // one merely close to expiry can still serve requests.
            None if session.expires_within(now_unix, 0) => RestoreAction::NothingStored,
            None => RestoreAction::UseStored(session),
        }
    }

    /// Resolve the initial session: OAuth callback fragment first, then
    /// whatever storage holds. Always leaves the state resolved, so the
    /// route gate cannot spin forever.
    pub async fn restore(&self) {
        #[cfg(feature = "csr")]
        if let Some(outcome) = take_oauth_fragment() {
            match outcome {
                FragmentOutcome::Tokens(tokens) => {
                    self.complete_oauth_callback(tokens).await;
                    return;
                }
                FragmentOutcome::Failed(message) => {
                    // Provider bounced the sign-in. Any session already in
                    // storage is still good, so fall through to it.
                    leptos::logging::warn!("oauth sign-in failed: {message}");
                }
            }
        }

        match Self::restore_decision(storage::load_session(), current_unix()) {
            RestoreAction::NothingStored => {
                storage::clear_session();
                self.apply(&AuthChange::InitialSession, SessionState::SignedOut);
            }
            RestoreAction::UseStored(session) => {
                self.apply(&AuthChange::InitialSession, SessionState::SignedIn(session));
            }
            RestoreAction::Refresh { refresh_token, fallback } => {
                match identity::refresh_session(&self.config, &refresh_token).await {
                    Ok(session) => {
                        self.persist(&session, storage::stored_area());
                        self.apply(&AuthChange::InitialSession, SessionState::SignedIn(session));
                    }
                    Err(err) if err.is_auth_rejection() => {
                        storage::clear_session();
                        self.apply(&AuthChange::InitialSession, SessionState::SignedOut);
                    }
                    Err(err) => {
                        // Service unreachable; trust the stored session if it
                        // has any life left and let the keeper retry.
                        leptos::logging::warn!("session refresh failed, keeping stored session: {err}");
                        if fallback.expires_within(current_unix(), 0) {
                            storage::clear_session();
                            self.apply(&AuthChange::InitialSession, SessionState::SignedOut);
                        } else {
                            self.apply(&AuthChange::InitialSession, SessionState::SignedIn(fallback));
                        }
                    }
                }
            }
        }
    }

    /// Email/password sign-in. `remember` picks the storage that outlives
    /// the browser, otherwise the session ends with the tab.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<(), ApiError> {
        let session = identity::password_sign_in(&self.config, email, password).await?;
        let area = if remember { StorageArea::Local } else { StorageArea::Session };
        self.persist(&session, Some(area));
        self.apply(&AuthChange::SignedIn, SessionState::SignedIn(session));
        Ok(())
    }

    /// Register a new account. Signs in directly on auto-confirm projects;
    /// otherwise the caller shows the check-your-inbox notice.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignupOutcome, ApiError> {
        let outcome = identity::sign_up(&self.config, email, password).await?;
        if let SignupOutcome::SignedIn(session) = &outcome {
            self.persist(session, Some(StorageArea::Local));
            self.apply(&AuthChange::SignedIn, SessionState::SignedIn(session.clone()));
        }
        Ok(outcome)
    }

    /// Leave for the OAuth provider; the service redirects back to the
    /// dashboard with tokens in the fragment.
    pub fn sign_in_with_oauth(&self, provider: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let location = web_sys::window()
                .map(|window| window.location())
                .ok_or(ApiError::Unsupported)?;
            let origin = location
                .origin()
                .map_err(|_| ApiError::Transport("no window origin".to_owned()))?;
            let url = identity::authorize_url(&self.config, provider, &format!("{origin}/dashboard"));
            location
                .set_href(&url)
                .map_err(|_| ApiError::Transport("provider redirect failed".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = provider;
            Err(ApiError::Unsupported)
        }
    }

    /// Revoke remotely (best effort), clear storage, and go signed-out.
    pub async fn sign_out(&self) {
        let token = match self.state() {
            SessionState::SignedIn(session) => Some(session.access_token),
            SessionState::Unknown | SessionState::SignedOut => None,
        };
        if let Some(token) = token {
            identity::sign_out(&self.config, &token).await;
        }
        storage::clear_session();
        self.apply(&AuthChange::SignedOut, SessionState::SignedOut);
    }

    /// Keeper tick: refresh the access token shortly before it expires.
    /// Transport failures keep the session and retry on the next tick; a
    /// definitive rejection of the refresh token signs out.
    pub async fn refresh_if_expiring(&self) {
        let SessionState::SignedIn(session) = self.state() else {
            return;
        };
        if !session.expires_within(current_unix(), REFRESH_MARGIN_SECS) {
            return;
        }
        let Some(refresh_token) = session.refresh_token.clone() else {
            return;
        };
        match identity::refresh_session(&self.config, &refresh_token).await {
            Ok(fresh) => {
                self.persist(&fresh, storage::stored_area());
                self.apply(&AuthChange::TokenRefreshed, SessionState::SignedIn(fresh));
            }
            Err(err) if err.is_auth_rejection() => {
                leptos::logging::warn!("refresh token rejected, signing out: {err}");
                storage::clear_session();
                self.apply(&AuthChange::SignedOut, SessionState::SignedOut);
            }
            Err(err) => {
                leptos::logging::warn!("session refresh failed, will retry: {err}");
            }
        }
    }

    fn persist(&self, session: &Session, area: Option<StorageArea>) {
        storage::save_session(session, area.unwrap_or(StorageArea::Local));
    }

    #[cfg(feature = "csr")]
    async fn complete_oauth_callback(&self, tokens: FragmentTokens) {
        let now = identity::now_unix();
        let expires_at = tokens
            .expires_at
            .or_else(|| tokens.expires_in.map(|secs| now.saturating_add(secs)));
        match identity::fetch_user(&self.config, &tokens.access_token).await {
            Ok(user) => {
                let session = Session {
                    access_token: tokens.access_token,
                    token_type: tokens.token_type.unwrap_or_else(|| "bearer".to_owned()),
                    refresh_token: tokens.refresh_token,
                    expires_at,
                    user,
                };
                self.persist(&session, Some(StorageArea::Local));
                self.apply(&AuthChange::SignedIn, SessionState::SignedIn(session));
            }
            Err(err) => {
                leptos::logging::warn!("could not resolve oauth user: {err}");
                self.apply(&AuthChange::InitialSession, SessionState::SignedOut);
            }
        }
    }
}

fn current_unix() -> u64 {
    #[cfg(feature = "csr")]
    {
        identity::now_unix()
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Read and consume an auth-relevant URL fragment. The fragment is stripped
/// from the address bar either way, so a reload cannot replay it.
#[cfg(feature = "csr")]
fn take_oauth_fragment() -> Option<FragmentOutcome> {
    let window = web_sys::window()?;
    let location = window.location();
    let hash = location.hash().ok()?;
    let outcome = parse_auth_fragment(&hash)?;
    let bare = format!(
        "{}{}",
        location.pathname().unwrap_or_else(|_| "/".to_owned()),
        location.search().unwrap_or_default()
    );
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&bare));
    }
    Some(outcome)
}
