use super::*;

fn tokens(outcome: FragmentOutcome) -> FragmentTokens {
    match outcome {
        FragmentOutcome::Tokens(tokens) => tokens,
        FragmentOutcome::Failed(message) => panic!("expected tokens, got failure: {message}"),
    }
}

// ====== Callback Fragments ======

#[test]
fn full_callback_fragment_yields_tokens() {
    let fragment = "#access_token=at-123&expires_at=1700003600&expires_in=3600\
                    &refresh_token=rt-456&token_type=bearer";
    let parsed = tokens(parse_auth_fragment(fragment).unwrap());
    assert_eq!(parsed.access_token, "at-123");
    assert_eq!(parsed.refresh_token.as_deref(), Some("rt-456"));
    assert_eq!(parsed.expires_in, Some(3600));
    assert_eq!(parsed.expires_at, Some(1_700_003_600));
    assert_eq!(parsed.token_type.as_deref(), Some("bearer"));
}

#[test]
fn minimal_fragment_needs_only_an_access_token() {
    let parsed = tokens(parse_auth_fragment("access_token=at-only").unwrap());
    assert_eq!(parsed.access_token, "at-only");
    assert_eq!(parsed.refresh_token, None);
    assert_eq!(parsed.expires_in, None);
    assert_eq!(parsed.expires_at, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let fragment = "#provider_token=pt&access_token=at&provider_refresh_token=prt";
    let parsed = tokens(parse_auth_fragment(fragment).unwrap());
    assert_eq!(parsed.access_token, "at");
}

#[test]
fn malformed_expiries_are_dropped_not_fatal() {
    let parsed = tokens(parse_auth_fragment("#access_token=at&expires_in=soon").unwrap());
    assert_eq!(parsed.expires_in, None);
}

// ====== Provider Errors ======

#[test]
fn error_description_becomes_the_failure_message() {
    let fragment = "#error=server_error&error_code=500\
                    &error_description=Database+error+saving+new+user";
    assert_eq!(
        parse_auth_fragment(fragment),
        Some(FragmentOutcome::Failed(
            "Database error saving new user".to_owned()
        ))
    );
}

#[test]
fn bare_error_code_still_fails_with_something_readable() {
    assert_eq!(
        parse_auth_fragment("#error=access_denied"),
        Some(FragmentOutcome::Failed("access_denied".to_owned()))
    );
}

#[test]
fn percent_escapes_in_descriptions_are_decoded() {
    let fragment = "#error=invalid_request&error_description=Missing%20%22code%22%20param";
    assert_eq!(
        parse_auth_fragment(fragment),
        Some(FragmentOutcome::Failed("Missing \"code\" param".to_owned()))
    );
}

#[test]
fn broken_percent_escape_passes_through() {
    let fragment = "#error_description=50%ZZ+off";
    assert_eq!(
        parse_auth_fragment(fragment),
        Some(FragmentOutcome::Failed("50%ZZ off".to_owned()))
    );
}

// ====== Unrelated Fragments ======

#[test]
fn plain_anchors_are_not_auth_fragments() {
    assert_eq!(parse_auth_fragment("#section-2"), None);
    assert_eq!(parse_auth_fragment("#"), None);
    assert_eq!(parse_auth_fragment(""), None);
}

#[test]
fn query_like_fragment_without_tokens_is_ignored() {
    assert_eq!(parse_auth_fragment("#tab=settings&page=3"), None);
}
