//! URL-fragment parsing for the OAuth callback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity service finishes an OAuth sign-in by redirecting the browser
//! back with the tokens in the URL fragment (or an error description when
//! the provider rejected it). The auth client checks the fragment once at
//! startup; everything here is pure so the wire contract stays testable.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// Token bundle delivered in a successful OAuth callback fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Lifetime in seconds, when the service reports a relative expiry.
    pub expires_in: Option<u64>,
    /// Absolute expiry in unix seconds, when reported directly.
    pub expires_at: Option<u64>,
    pub token_type: Option<String>,
}

/// What an auth-relevant URL fragment turned out to contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentOutcome {
    /// The callback carried a usable token bundle.
    Tokens(FragmentTokens),
    /// The provider bounced the sign-in; the payload is the display message.
    Failed(String),
}

/// Parse a `window.location` fragment into an auth outcome.
///
/// Returns `None` for fragments that have nothing to do with the OAuth
/// callback (plain anchors, empty fragments), so ordinary navigation never
/// disturbs the session.
pub fn parse_auth_fragment(fragment: &str) -> Option<FragmentOutcome> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.is_empty() {
        return None;
    }

    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut expires_at = None;
    let mut token_type = None;
    let mut error = None;
    let mut error_description = None;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_owned()),
            "refresh_token" => refresh_token = Some(value.to_owned()),
            "expires_in" => expires_in = value.parse::<u64>().ok(),
            "expires_at" => expires_at = value.parse::<u64>().ok(),
            "token_type" => token_type = Some(value.to_owned()),
            "error" => error = Some(decode_component(value)),
            "error_description" => error_description = Some(decode_component(value)),
            _ => {}
        }
    }

    if let Some(access_token) = access_token {
        return Some(FragmentOutcome::Tokens(FragmentTokens {
            access_token,
            refresh_token,
            expires_in,
            expires_at,
            token_type,
        }));
    }
    if error.is_some() || error_description.is_some() {
        let message = error_description
            .or(error)
            .unwrap_or_else(|| "Sign-in was rejected by the provider.".to_owned());
        return Some(FragmentOutcome::Failed(message));
    }
    None
}

/// Minimal `application/x-www-form-urlencoded` component decode: `+` as
/// space plus `%XX` escapes. Invalid escapes pass through untouched.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
