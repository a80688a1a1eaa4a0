use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_session(expires_at: Option<u64>) -> Session {
    Session {
        access_token: "at-1".to_owned(),
        token_type: "bearer".to_owned(),
        refresh_token: Some("rt-1".to_owned()),
        expires_at,
        user: AuthUser {
            id: "u-1".to_owned(),
            email: Some("alice@example.com".to_owned()),
        },
    }
}

// =============================================================
// Session expiry
// =============================================================

#[test]
fn expires_within_is_false_well_before_expiry() {
    let session = make_session(Some(10_000));
    assert!(!session.expires_within(1_000, 60));
}

#[test]
fn expires_within_is_true_inside_the_margin() {
    let session = make_session(Some(10_000));
    assert!(session.expires_within(9_950, 60));
}

#[test]
fn expires_within_is_true_after_expiry() {
    let session = make_session(Some(10_000));
    assert!(session.expires_within(20_000, 0));
}

#[test]
fn expires_within_is_false_without_reported_expiry() {
    let session = make_session(None);
    assert!(!session.expires_within(u64::MAX, u64::MAX));
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_unknown_and_unresolved() {
    let state = SessionState::default();
    assert_eq!(state, SessionState::Unknown);
    assert!(!state.is_resolved());
    assert!(state.session().is_none());
}

#[test]
fn from_session_some_is_signed_in() {
    let state = SessionState::from_session(Some(make_session(None)));
    assert!(state.is_resolved());
    assert_eq!(state.session().map(|s| s.user.id.as_str()), Some("u-1"));
}

#[test]
fn from_session_none_is_signed_out() {
    let state = SessionState::from_session(None);
    assert_eq!(state, SessionState::SignedOut);
    assert!(state.is_resolved());
    assert!(state.session().is_none());
}

// =============================================================
// Serde round-trip of the persisted shape
// =============================================================

#[test]
fn session_serde_preserves_every_field() {
    let session = make_session(Some(1_700_000_000));
    let raw = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, session);
}

#[test]
fn session_decodes_with_missing_optionals() {
    let raw = r#"{
        "access_token": "at-2",
        "token_type": "bearer",
        "refresh_token": null,
        "expires_at": null,
        "user": { "id": "u-2", "email": null }
    }"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.refresh_token, None);
    assert_eq!(session.expires_at, None);
    assert_eq!(session.user.email, None);
}
