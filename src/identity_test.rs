use serde_json::json;

use super::*;

// =============================================================================
// Identity deserialization
// =============================================================================

#[test]
fn identity_reads_role_field() {
    let identity: Identity =
        serde_json::from_value(json!({ "id": 7, "username": "ada", "role": "admin", "token": "t" })).unwrap();
    assert_eq!(identity, Identity::new("ada", Role::Admin, "t").with_id(7));
}

#[test]
fn identity_reads_legacy_is_admin_flag() {
    let admin: Identity =
        serde_json::from_value(json!({ "username": "ada", "is_admin": true, "token": "t" })).unwrap();
    let user: Identity =
        serde_json::from_value(json!({ "username": "bob", "is_admin": false, "token": "t" })).unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(user.role, Role::User);
}

#[test]
fn identity_role_wins_over_legacy_flag() {
    let identity: Identity =
        serde_json::from_value(json!({ "username": "ada", "role": "user", "is_admin": true, "token": "t" }))
            .unwrap();
    assert_eq!(identity.role, Role::User);
}

#[test]
fn identity_without_privilege_fields_is_plain_user() {
    let identity: Identity = serde_json::from_value(json!({ "username": "ada", "token": "t" })).unwrap();
    assert_eq!(identity.role, Role::User);
    assert_eq!(identity.id, None);
}

#[test]
fn identity_missing_token_is_rejected() {
    let result = serde_json::from_value::<Identity>(json!({ "username": "ada", "role": "user" }));
    assert!(result.is_err());
}

#[test]
fn identity_serializes_role_and_omits_missing_id() {
    let value = serde_json::to_value(Identity::new("ada", Role::Admin, "t")).unwrap();
    assert_eq!(value, json!({ "username": "ada", "role": "admin", "token": "t" }));
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn access_of_identity() {
    let admin = Identity::new("ada", Role::Admin, "t");
    let user = Identity::new("bob", Role::User, "t");
    assert_eq!(Access::of(None), Access::Anonymous);
    assert_eq!(Access::of(Some(&user)), Access::User);
    assert_eq!(Access::of(Some(&admin)), Access::Admin);
}

#[test]
fn access_flags() {
    assert!(!Access::Anonymous.is_authenticated());
    assert!(Access::User.is_authenticated());
    assert!(!Access::User.is_admin());
    assert!(Access::Admin.is_admin());
}

// =============================================================================
// StoredRecord
// =============================================================================

#[test]
fn stored_record_layout() {
    let identity = Identity::new("ada", Role::User, "tok").with_id(3);
    let value = serde_json::to_value(StoredRecord::new(&identity, true, 1_000)).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 3,
            "username": "ada",
            "role": "user",
            "token": "tok",
            "rememberMe": true,
            "expires": 1_000
        })
    );
}

#[test]
fn stored_record_from_legacy_client() {
    let raw = r#"{"username":"ada","is_admin":true,"token":"tok","rememberMe":true,"expires":5000}"#;
    let record: StoredRecord = serde_json::from_str(raw).unwrap();
    assert!(record.is_live_remember_me(4_999));
    assert!(!record.is_live_remember_me(5_000));
    assert_eq!(record.into_identity(), Identity::new("ada", Role::Admin, "tok"));
}

#[test]
fn stored_record_without_remember_metadata_is_not_live() {
    let record: StoredRecord = serde_json::from_str(r#"{"username":"ada","token":"tok"}"#).unwrap();
    assert!(!record.remember_me);
    assert_eq!(record.expires, 0);
    assert!(!record.is_live_remember_me(0));
}
