use super::*;
use crate::state::session::AuthUser;

// =============================================================
// Helpers
// =============================================================

fn make_session(access_token: &str) -> Session {
    Session {
        access_token: access_token.to_owned(),
        token_type: "bearer".to_owned(),
        refresh_token: Some("rt-1".to_owned()),
        expires_at: Some(2_000),
        user: AuthUser { id: "u-1".to_owned(), email: Some("kai@example.com".to_owned()) },
    }
}

fn make_client() -> AuthClient {
    let config = SupabaseConfig::from_parts(Some("https://abc.supabase.co"), Some("anon-key"))
        .expect("valid config");
    AuthClient::new(config)
}

type EventLog = Arc<Mutex<Vec<(AuthChange, SessionState)>>>;

fn subscribe_logging(client: &AuthClient) -> (AuthSubscription, EventLog) {
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let subscription = client.subscribe(move |change, state| {
        sink.lock().unwrap().push((*change, state.clone()));
    });
    (subscription, events)
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn a_new_client_is_unresolved() {
    assert_eq!(make_client().state(), SessionState::Unknown);
}

#[test]
fn apply_stores_the_state_and_notifies() {
    let client = make_client();
    let (_sub, events) = subscribe_logging(&client);

    let session = make_session("at-1");
    client.apply(&AuthChange::SignedIn, SessionState::SignedIn(session.clone()));

    assert_eq!(client.state(), SessionState::SignedIn(session.clone()));
    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], (AuthChange::SignedIn, SessionState::SignedIn(session)));
}

#[test]
fn an_identical_state_is_dropped_silently() {
    let client = make_client();
    let (_sub, events) = subscribe_logging(&client);

    let session = make_session("at-1");
    client.apply(&AuthChange::SignedIn, SessionState::SignedIn(session.clone()));
    // Same session pushed again, even under a different change kind.
    client.apply(&AuthChange::SignedIn, SessionState::SignedIn(session.clone()));
    client.apply(&AuthChange::TokenRefreshed, SessionState::SignedIn(session));

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn a_refreshed_token_is_a_real_transition() {
    let client = make_client();
    let (_sub, events) = subscribe_logging(&client);

    client.apply(&AuthChange::SignedIn, SessionState::SignedIn(make_session("at-1")));
    client.apply(&AuthChange::TokenRefreshed, SessionState::SignedIn(make_session("at-2")));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].0, AuthChange::TokenRefreshed);
}

#[test]
fn sign_out_after_sign_in_round_trips() {
    let client = make_client();
    let (_sub, events) = subscribe_logging(&client);

    client.apply(&AuthChange::InitialSession, SessionState::SignedOut);
    client.apply(&AuthChange::SignedIn, SessionState::SignedIn(make_session("at-1")));
    client.apply(&AuthChange::SignedOut, SessionState::SignedOut);

    assert_eq!(client.state(), SessionState::SignedOut);
    let kinds: Vec<AuthChange> = events.lock().unwrap().iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        vec![AuthChange::InitialSession, AuthChange::SignedIn, AuthChange::SignedOut]
    );
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn unsubscribe_stops_callbacks() {
    let client = make_client();
    let (sub, events) = subscribe_logging(&client);

    sub.unsubscribe();
    client.apply(&AuthChange::SignedIn, SessionState::SignedIn(make_session("at-1")));

    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn unsubscribing_twice_is_a_noop() {
    let client = make_client();
    let (sub, events) = subscribe_logging(&client);

    sub.unsubscribe();
    sub.unsubscribe();
    drop(sub);
    client.apply(&AuthChange::SignedOut, SessionState::SignedOut);

    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn dropping_the_handle_releases_the_subscription() {
    let client = make_client();
    let (sub, events) = subscribe_logging(&client);

    drop(sub);
    client.apply(&AuthChange::SignedOut, SessionState::SignedOut);

    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn unsubscribe_outliving_the_client_is_safe() {
    let client = make_client();
    let (sub, _events) = subscribe_logging(&client);

    drop(client);
    sub.unsubscribe();
}

#[test]
fn each_subscription_is_independent() {
    let client = make_client();
    let (first, first_events) = subscribe_logging(&client);
    let (_second, second_events) = subscribe_logging(&client);

    client.apply(&AuthChange::InitialSession, SessionState::SignedOut);
    first.unsubscribe();
    client.apply(&AuthChange::SignedIn, SessionState::SignedIn(make_session("at-1")));

    assert_eq!(first_events.lock().unwrap().len(), 1);
    assert_eq!(second_events.lock().unwrap().len(), 2);
}

#[test]
fn a_late_subscriber_sees_only_later_changes() {
    let client = make_client();
    client.apply(&AuthChange::InitialSession, SessionState::SignedOut);

    let (_sub, events) = subscribe_logging(&client);
    assert!(events.lock().unwrap().is_empty());
    // The snapshot covers the gap.
    assert_eq!(client.state(), SessionState::SignedOut);
}

// =============================================================
// Startup restore decisions
// =============================================================

#[test]
fn nothing_stored_resolves_signed_out() {
    assert_eq!(AuthClient::restore_decision(None, 1_000), RestoreAction::NothingStored);
}

#[test]
fn a_fresh_stored_session_is_used_directly() {
    let session = make_session("at-1"); // expires at 2_000
    assert_eq!(
        AuthClient::restore_decision(Some(session.clone()), 1_000),
        RestoreAction::UseStored(session)
    );
}

#[test]
fn an_expiring_session_with_a_refresh_token_refreshes() {
    let session = make_session("at-1");
    let decision = AuthClient::restore_decision(Some(session.clone()), 1_990);
    assert_eq!(
        decision,
        RestoreAction::Refresh { refresh_token: "rt-1".to_owned(), fallback: session }
    );
}

#[test]
fn an_expiring_session_without_refresh_is_used_while_it_lasts() {
    let mut session = make_session("at-1");
    session.refresh_token = None;
    assert_eq!(
        AuthClient::restore_decision(Some(session.clone()), 1_990),
        RestoreAction::UseStored(session)
    );
}

#[test]
fn a_dead_session_without_refresh_is_discarded() {
    let mut session = make_session("at-1");
    session.refresh_token = None;
    assert_eq!(
        AuthClient::restore_decision(Some(session), 2_001),
        RestoreAction::NothingStored
    );
}

#[test]
fn a_session_without_expiry_is_trusted() {
    let mut session = make_session("at-1");
    session.expires_at = None;
    assert_eq!(
        AuthClient::restore_decision(Some(session.clone()), u64::MAX),
        RestoreAction::UseStored(session)
    );
}
