//! PostgREST client for the `profiles` table.
//!
//! Single-row reads use the PostgREST object representation, which answers
//! 406 when the row does not exist yet; callers receive `Ok(None)` and fall
//! back to empty fields, since profiles are created lazily on first save.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning [`ApiError::Unsupported`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::identity::{error_from_body, percent_encode_component};
use super::types::{ProfileDetails, ProfileSummary, ProfileUpdate};
use crate::config::SupabaseConfig;
use crate::state::session::Session;

/// Status PostgREST uses for "zero rows" under the object representation.
const NO_ROW_STATUS: u16 = 406;

// =============================================================
// Pure: endpoints and decoding
// =============================================================

/// Row filter for one user's profile with an explicit column list.
pub fn profile_query_url(config: &SupabaseConfig, user_id: &str, select: &str) -> String {
    config.rest_url(&format!(
        "/profiles?id=eq.{}&select={select}",
        percent_encode_component(user_id)
    ))
}

/// Decode a single-object read: `Ok(None)` when the row does not exist.
pub fn decode_single_row<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, ApiError> {
    if status == NO_ROW_STATUS {
        return Ok(None);
    }
    if !(200..300).contains(&status) {
        return Err(error_from_body(status, body));
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

// =============================================================
// Browser: HTTP calls
// =============================================================

#[cfg(feature = "csr")]
async fn get_single_object(
    config: &SupabaseConfig,
    session: &Session,
    select: &str,
) -> Result<(u16, String), ApiError> {
    let url = profile_query_url(config, &session.user.id, select);
    let resp = gloo_net::http::Request::get(&url)
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", session.access_token))
        .header("Accept", "application/vnd.pgrst.object+json")
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

/// Columns for the profile page header.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the row does not decode.
/// A missing row is `Ok(None)`, not an error.
pub async fn fetch_profile_summary(
    config: &SupabaseConfig,
    session: &Session,
) -> Result<Option<ProfileSummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = get_single_object(config, session, "avatar_url,name").await?;
        decode_single_row(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session);
        Err(ApiError::Unsupported)
    }
}

/// Columns backing the edit form.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the row does not decode.
/// A missing row is `Ok(None)`, not an error.
pub async fn fetch_profile_details(
    config: &SupabaseConfig,
    session: &Session,
) -> Result<Option<ProfileDetails>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = get_single_object(config, session, "name,username,email,about_me").await?;
        decode_single_row(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session);
        Err(ApiError::Unsupported)
    }
}

/// Upsert the caller's profile row. Merge semantics: an existing row is
/// updated in place, a missing row is created.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or row-level security
/// rejects the write.
pub async fn upsert_profile(
    config: &SupabaseConfig,
    session: &Session,
    update: &ProfileUpdate,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.rest_url("/profiles"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(update)
            .map_err(|err| ApiError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            let body = resp
                .text()
                .await
                .map_err(|err| ApiError::Transport(err.to_string()))?;
            return Err(error_from_body(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session, update);
        Err(ApiError::Unsupported)
    }
}

/// RFC 3339 timestamp for `updated_at`, from the browser clock.
#[cfg(feature = "csr")]
pub fn iso_timestamp_now() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
