//! Unit tests for user records

use crate::domain::entities::user::{UserMap, UserRecord, ADMIN_ROLE, ADMIN_USERNAME};

#[test]
fn test_admin_record() {
    let admin = UserRecord::admin("s3cret");

    assert!(admin.has_role(ADMIN_ROLE));
    assert_eq!(admin.roles.len(), 1);
    assert!(!admin.hashed);
}

#[test]
fn test_secret_matching() {
    let user = UserRecord::new("s3cret", ["viewer"]);

    assert!(user.secret_matches("s3cret"));
    assert!(!user.secret_matches("s3cret "));
    assert!(!user.secret_matches(""));
    assert!(!user.secret_matches("wrong"));
}

#[test]
fn test_hashed_records_never_match_plaintext() {
    let mut user = UserRecord::new("s3cret", ["viewer"]);
    user.hashed = true;

    assert!(!user.secret_matches("s3cret"));
}

#[test]
fn test_store_layout_roundtrip() {
    let stored = serde_json::json!({
        "admin": {"password": "pw", "hashed": false, "roles": ["admin"]},
        "bob": {"password": "hunter2", "roles": ["editor", "viewer"]}
    });

    let users: UserMap = serde_json::from_value(stored).unwrap();

    assert!(users[ADMIN_USERNAME].secret_matches("pw"));
    assert!(users["bob"].has_role("editor"));
    assert!(!users["bob"].hashed);
}

#[test]
fn test_debug_redacts_password() {
    let rendered = format!("{:?}", UserRecord::admin("topsecret"));
    assert!(!rendered.contains("topsecret"));
}
