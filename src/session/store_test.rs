use super::*;
use futures::executor::block_on;

// =============================================================
// Persisted payload decoding
// =============================================================

#[test]
fn decode_token_set_reads_full_payload() {
    let raw = r#"{
        "access_token": "at-123",
        "refresh_token": "rt-456",
        "token_type": "Bearer"
    }"#;
    let tokens = decode_token_set(raw).expect("token set");
    assert_eq!(tokens.access_token, "at-123");
    assert_eq!(tokens.refresh_token.as_deref(), Some("rt-456"));
    assert_eq!(tokens.token_type.as_deref(), Some("Bearer"));
}

#[test]
fn decode_token_set_defaults_optional_fields() {
    let tokens = decode_token_set(r#"{"access_token":"at-123"}"#).expect("token set");
    assert!(tokens.refresh_token.is_none());
    assert!(tokens.token_type.is_none());
}

#[test]
fn decode_token_set_ignores_unknown_fields() {
    let raw = r#"{"access_token":"at-123","expires_in":3600,"scope":"openid"}"#;
    assert!(decode_token_set(raw).is_ok());
}

#[test]
fn decode_token_set_rejects_malformed_json() {
    let err = decode_token_set("{not json").expect_err("corrupted");
    assert!(matches!(err, StoreError::Corrupted(_)));
}

#[test]
fn decode_token_set_rejects_missing_access_token() {
    let err = decode_token_set(r#"{"refresh_token":"rt"}"#).expect_err("corrupted");
    assert!(matches!(err, StoreError::Corrupted(_)));
}

#[test]
fn token_set_round_trips_through_json() {
    let tokens = TokenSet {
        access_token: "at-123".to_owned(),
        refresh_token: None,
        token_type: Some("Bearer".to_owned()),
    };
    let raw = serde_json::to_string(&tokens).expect("serialize");
    assert_eq!(decode_token_set(&raw), Ok(tokens));
}

// =============================================================
// Non-browser store behavior
// =============================================================

#[test]
fn local_storage_store_reports_no_session_off_browser() {
    let store = LocalStorageTokenStore;
    let tokens = block_on(store.get_tokens()).expect("no error");
    assert!(tokens.is_none());
}

#[test]
fn local_storage_store_clears_are_safe_off_browser() {
    let store = LocalStorageTokenStore;
    store.clear_tokens();
    store.clear_oauth_state();
    store.clear_tokens();
}
