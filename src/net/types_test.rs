use super::*;

// =============================================================
// Helpers
// =============================================================

fn grant_json() -> serde_json::Value {
    serde_json::json!({
        "access_token": "at-1",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_700_003_600u64,
        "refresh_token": "rt-1",
        "user": {
            "id": "u-1",
            "aud": "authenticated",
            "email": "kai@example.com",
            "role": "authenticated"
        }
    })
}

// =============================================================
// WireSession
// =============================================================

#[test]
fn grant_payload_decodes_with_extra_user_fields_ignored() {
    let wire: WireSession = serde_json::from_value(grant_json()).unwrap();
    assert_eq!(wire.access_token, "at-1");
    assert_eq!(wire.refresh_token.as_deref(), Some("rt-1"));
    assert_eq!(wire.user.id, "u-1");
    assert_eq!(wire.user.email.as_deref(), Some("kai@example.com"));
}

#[test]
fn absolute_expiry_wins_over_relative() {
    let wire: WireSession = serde_json::from_value(grant_json()).unwrap();
    let session = wire.into_session(9_999);
    assert_eq!(session.expires_at, Some(1_700_003_600));
}

#[test]
fn relative_expiry_resolves_against_now() {
    let mut value = grant_json();
    value.as_object_mut().unwrap().remove("expires_at");
    let wire: WireSession = serde_json::from_value(value).unwrap();
    let session = wire.into_session(1_000);
    assert_eq!(session.expires_at, Some(4_600));
}

#[test]
fn missing_expiry_information_leaves_expiry_unknown() {
    let wire: WireSession = serde_json::from_value(serde_json::json!({
        "access_token": "at-1",
        "user": { "id": "u-1" }
    }))
    .unwrap();
    let session = wire.into_session(1_000);
    assert_eq!(session.expires_at, None);
    assert_eq!(session.token_type, "bearer");
    assert_eq!(session.user.email, None);
}

// =============================================================
// WireErrorBody
// =============================================================

#[test]
fn gotrue_legacy_error_shape_yields_its_description() {
    let body: WireErrorBody = serde_json::from_str(
        r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
    )
    .unwrap();
    assert_eq!(body.best_message(), Some("Invalid login credentials"));
}

#[test]
fn gotrue_msg_shape_yields_its_msg() {
    let body: WireErrorBody =
        serde_json::from_str(r#"{"code":400,"msg":"User already registered"}"#).unwrap();
    assert_eq!(body.best_message(), Some("User already registered"));
}

#[test]
fn postgrest_shape_yields_its_message() {
    let body: WireErrorBody = serde_json::from_str(
        r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value"}"#,
    )
    .unwrap();
    assert_eq!(body.best_message(), Some("duplicate key value"));
}

#[test]
fn blank_or_empty_bodies_yield_nothing() {
    assert_eq!(WireErrorBody::default().best_message(), None);
    let body: WireErrorBody = serde_json::from_str(r#"{"msg":"  "}"#).unwrap();
    assert_eq!(body.best_message(), None);
}

#[test]
fn blank_description_falls_through_to_the_next_field() {
    let body: WireErrorBody = serde_json::from_str(
        r#"{"error":"invalid_grant","error_description":"","msg":"Token expired"}"#,
    )
    .unwrap();
    assert_eq!(body.best_message(), Some("Token expired"));
}

// =============================================================
// Profile rows
// =============================================================

#[test]
fn profile_rows_tolerate_null_columns() {
    let details: ProfileDetails = serde_json::from_str(
        r#"{"name":"Kai","username":null,"email":"kai@example.com","about_me":null}"#,
    )
    .unwrap();
    assert_eq!(details.name.as_deref(), Some("Kai"));
    assert_eq!(details.username, None);
    assert_eq!(details.about_me, None);

    let summary: ProfileSummary =
        serde_json::from_str(r#"{"avatar_url":null,"name":null}"#).unwrap();
    assert_eq!(summary, ProfileSummary::default());
}

#[test]
fn profile_update_serializes_every_column() {
    let update = ProfileUpdate {
        id: "u-1".to_owned(),
        email: Some("kai@example.com".to_owned()),
        username: Some("kai".to_owned()),
        name: Some("Kai".to_owned()),
        about_me: None,
        updated_at: "2026-08-01T12:00:00.000Z".to_owned(),
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["id"], "u-1");
    assert_eq!(value["about_me"], serde_json::Value::Null);
    assert_eq!(value["updated_at"], "2026-08-01T12:00:00.000Z");
}
