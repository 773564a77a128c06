use super::*;

// =============================================================
// Field validation (no login call unless both fields present)
// =============================================================

#[test]
fn validate_login_input_accepts_both_fields() {
    let credentials = validate_login_input("a@b.com", "x").expect("valid input");
    assert_eq!(credentials.email, "a@b.com");
    assert_eq!(credentials.password, "x");
}

#[test]
fn validate_login_input_trims_email() {
    let credentials = validate_login_input("  a@b.com  ", "x").expect("valid input");
    assert_eq!(credentials.email, "a@b.com");
}

#[test]
fn validate_login_input_rejects_empty_email() {
    assert_eq!(
        validate_login_input("", "x"),
        Err("Please enter both email and password")
    );
    assert_eq!(
        validate_login_input("   ", "x"),
        Err("Please enter both email and password")
    );
}

#[test]
fn validate_login_input_rejects_empty_password() {
    assert_eq!(
        validate_login_input("a@b.com", ""),
        Err("Please enter both email and password")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let credentials = validate_login_input("a@b.com", " spaced pass ").expect("valid input");
    assert_eq!(credentials.password, " spaced pass ");
}

// =============================================================
// Error display copy
// =============================================================

#[test]
fn rejected_login_shows_its_reason() {
    let err = LoginError::Rejected("Account locked".to_owned());
    assert_eq!(login_error_message(&err), "Account locked");
}

#[test]
fn rejected_login_without_reason_shows_fallback() {
    let err = LoginError::Rejected("   ".to_owned());
    assert_eq!(login_error_message(&err), "Invalid email or password");
}

#[test]
fn transport_failure_shows_generic_copy_not_raw_error() {
    let err = LoginError::Transport("dns lookup failed".to_owned());
    let message = login_error_message(&err);
    assert_eq!(message, "An error occurred during login. Please try again.");
    assert!(!message.contains("dns"));
}

#[test]
fn superseded_login_shows_generic_copy() {
    assert_eq!(
        login_error_message(&LoginError::Superseded),
        "An error occurred during login. Please try again."
    );
}

// =============================================================
// Intended destination
// =============================================================

#[test]
fn resolve_destination_uses_remembered_path() {
    assert_eq!(resolve_destination(Some("/dashboard")), "/dashboard");
}

#[test]
fn resolve_destination_defaults_to_root() {
    assert_eq!(resolve_destination(None), "/");
    assert_eq!(resolve_destination(Some("")), "/");
}

#[test]
fn resolve_destination_rejects_non_local_targets() {
    assert_eq!(resolve_destination(Some("https://evil.example")), "/");
    assert_eq!(resolve_destination(Some("//evil.example")), "/");
    assert_eq!(resolve_destination(Some("dashboard")), "/");
}
