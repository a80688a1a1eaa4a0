use super::*;

#[test]
fn a_complete_signup_passes() {
    let (email, password) = validate_signup(" new@example.com ", "hunter2", true).unwrap();
    assert_eq!(email, "new@example.com");
    assert_eq!(password, "hunter2");
}

#[test]
fn email_checks_run_before_password_checks() {
    assert_eq!(
        validate_signup("", "hunter2", true),
        Err("Enter your email address.".to_owned())
    );
    assert_eq!(
        validate_signup("not-an-email", "hunter2", true),
        Err("Enter a valid email address.".to_owned())
    );
}

#[test]
fn short_passwords_are_rejected() {
    assert_eq!(
        validate_signup("new@example.com", "12345", true),
        Err("Password should be at least 6 characters.".to_owned())
    );
    // Counted in characters, not bytes.
    assert!(validate_signup("new@example.com", "pässwd", true).is_ok());
}

#[test]
fn terms_must_be_accepted() {
    assert_eq!(
        validate_signup("new@example.com", "hunter2", false),
        Err("Please accept the Terms and Conditions.".to_owned())
    );
}
