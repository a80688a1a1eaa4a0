//! GoTrue auth API client: password grants, signup, refresh, OAuth, logout.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unsupported`] so the crate and
//! its tests compile without a browser.
//!
//! DESIGN
//! ======
//! Endpoint construction and response decoding are pure functions over
//! strings; the async wrappers only move bytes. Tests cover the pure layer,
//! which is where every version-to-version service quirk lives.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::error::ApiError;
use super::types::{SignupOutcome, WireErrorBody, WireSession, WireUser};
use crate::config::SupabaseConfig;
use crate::state::session::{AuthUser, Session};

// =============================================================
// Pure: endpoints and decoding
// =============================================================

pub fn token_endpoint(config: &SupabaseConfig, grant_type: &str) -> String {
    config.auth_url(&format!("/token?grant_type={grant_type}"))
}

/// Browser navigation target for an OAuth provider sign-in.
///
/// The service redirects back to `redirect_to` with tokens in the URL
/// fragment once the provider round-trip completes.
pub fn authorize_url(config: &SupabaseConfig, provider: &str, redirect_to: &str) -> String {
    config.auth_url(&format!(
        "/authorize?provider={provider}&redirect_to={}",
        percent_encode_component(redirect_to)
    ))
}

/// RFC 3986 component encoding; unreserved characters pass through.
pub fn percent_encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

/// Decode a token-grant body (sign-in, refresh, OAuth user fill-in).
pub fn decode_grant(body: &str, now_unix: u64) -> Result<Session, ApiError> {
    let wire: WireSession =
        serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(wire.into_session(now_unix))
}

/// Decode a signup body, which is a token grant when the project
/// auto-confirms and a bare user object when confirmation is pending.
pub fn decode_signup(body: &str, now_unix: u64) -> Result<SignupOutcome, ApiError> {
    if let Ok(wire) = serde_json::from_str::<WireSession>(body) {
        return Ok(SignupOutcome::SignedIn(wire.into_session(now_unix)));
    }
    let user: WireUser =
        serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(SignupOutcome::ConfirmationRequired { email: user.email })
}

/// Decode the `/user` endpoint body.
pub fn decode_user(body: &str) -> Result<AuthUser, ApiError> {
    let wire: WireUser =
        serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(wire.into_user())
}

/// Turn a non-success response into an [`ApiError::Service`], digging the
/// message out of whichever error shape the service used.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<WireErrorBody>(body)
        .ok()
        .as_ref()
        .and_then(WireErrorBody::best_message)
        .map_or_else(|| format!("request failed with status {status}"), str::to_owned);
    ApiError::service(status, message)
}

// =============================================================
// Browser: HTTP calls
// =============================================================

/// Current unix time in seconds.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_unix() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(feature = "csr")]
async fn post_json(
    config: &SupabaseConfig,
    url: &str,
    bearer: &str,
    payload: &serde_json::Value,
) -> Result<(u16, String), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {bearer}"))
        .json(payload)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    Ok((status, body))
}

/// Sign in with an email/password grant.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the service rejects the
/// credentials, or the grant body does not decode.
pub async fn password_sign_in(
    config: &SupabaseConfig,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = token_endpoint(config, "password");
        let payload = serde_json::json!({ "email": email, "password": password });
        let (status, body) = post_json(config, &url, &config.anon_key, &payload).await?;
        if !(200..300).contains(&status) {
            return Err(error_from_body(status, &body));
        }
        decode_grant(&body, now_unix())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email, password);
        Err(ApiError::Unsupported)
    }
}

/// Register a new email/password user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the service refuses the
/// registration (weak password, address already registered).
pub async fn sign_up(
    config: &SupabaseConfig,
    email: &str,
    password: &str,
) -> Result<SignupOutcome, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config.auth_url("/signup");
        let payload = serde_json::json!({ "email": email, "password": password });
        let (status, body) = post_json(config, &url, &config.anon_key, &payload).await?;
        if !(200..300).contains(&status) {
            return Err(error_from_body(status, &body));
        }
        decode_signup(&body, now_unix())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email, password);
        Err(ApiError::Unsupported)
    }
}

/// Exchange a refresh token for a fresh grant.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the refresh token has
/// been revoked or already used.
pub async fn refresh_session(
    config: &SupabaseConfig,
    refresh_token: &str,
) -> Result<Session, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = token_endpoint(config, "refresh_token");
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let (status, body) = post_json(config, &url, &config.anon_key, &payload).await?;
        if !(200..300).contains(&status) {
            return Err(error_from_body(status, &body));
        }
        decode_grant(&body, now_unix())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, refresh_token);
        Err(ApiError::Unsupported)
    }
}

/// Fetch the user behind an access token. Used after the OAuth callback,
/// whose fragment carries tokens but no user object.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is not valid.
pub async fn fetch_user(config: &SupabaseConfig, access_token: &str) -> Result<AuthUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.auth_url("/user"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(error_from_body(status, &body));
        }
        decode_user(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, access_token);
        Err(ApiError::Unsupported)
    }
}

/// Revoke the session server-side. Best effort: local sign-out proceeds
/// whether or not the service acknowledges.
pub async fn sign_out(config: &SupabaseConfig, access_token: &str) {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post(&config.auth_url("/logout"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, access_token);
    }
}
