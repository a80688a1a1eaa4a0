use super::*;

#[test]
fn from_parts_normalizes_trailing_slashes() {
    let cfg = SupabaseConfig::from_parts(Some("https://abc.supabase.co/"), Some("anon-key"))
        .expect("valid config");
    assert_eq!(cfg.project_url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "anon-key");
}

#[test]
fn from_parts_trims_surrounding_whitespace() {
    let cfg = SupabaseConfig::from_parts(Some("  https://abc.supabase.co  "), Some(" key "))
        .expect("valid config");
    assert_eq!(cfg.project_url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "key");
}

#[test]
fn missing_url_is_reported_by_name() {
    assert_eq!(
        SupabaseConfig::from_parts(None, Some("key")),
        Err(ConfigError::MissingVar("SUPABASE_URL"))
    );
    assert_eq!(
        SupabaseConfig::from_parts(Some("   "), Some("key")),
        Err(ConfigError::MissingVar("SUPABASE_URL"))
    );
}

#[test]
fn missing_key_is_reported_by_name() {
    assert_eq!(
        SupabaseConfig::from_parts(Some("https://abc.supabase.co"), None),
        Err(ConfigError::MissingVar("SUPABASE_ANON_KEY"))
    );
    assert_eq!(
        SupabaseConfig::from_parts(Some("https://abc.supabase.co"), Some("")),
        Err(ConfigError::MissingVar("SUPABASE_ANON_KEY"))
    );
}

#[test]
fn service_urls_compose_from_the_project_base() {
    let cfg = SupabaseConfig::from_parts(Some("https://abc.supabase.co"), Some("key"))
        .expect("valid config");
    assert_eq!(
        cfg.auth_url("/token?grant_type=password"),
        "https://abc.supabase.co/auth/v1/token?grant_type=password"
    );
    assert_eq!(cfg.rest_url("/profiles"), "https://abc.supabase.co/rest/v1/profiles");
}
