use super::*;

#[test]
fn token_response_accepts_bare_access_token() {
    let parsed: TokenResponse = serde_json::from_str(r#"{"access_token":"abc123"}"#).unwrap();
    assert_eq!(parsed.access_token, "abc123");
    assert_eq!(parsed.token_type, "bearer");
    assert_eq!(parsed.session_id, None);
    assert_eq!(parsed.user_name, None);
}

#[test]
fn token_response_reads_full_server_body() {
    let body = r#"{"access_token":"t","token_type":"bearer","session_id":12,"user_name":"Ada"}"#;
    let parsed: TokenResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.session_id, Some(12));
    assert_eq!(parsed.user_name.as_deref(), Some("Ada"));
}

#[test]
fn registration_serializes_without_confirmation() {
    let payload = Registration {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Passw0rd!".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "Passw0rd!" })
    );
}

#[test]
fn error_body_detail_is_optional() {
    let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.detail, None);
    let parsed: ErrorBody = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
    assert_eq!(parsed.detail.as_deref(), Some("nope"));
}

#[test]
fn item_omits_missing_quantity() {
    let item = Item { id: 1, name: "Pen".to_owned(), description: String::new(), quantity: None };
    let value = serde_json::to_value(&item).unwrap();
    assert!(value.get("quantity").is_none());
}

#[test]
fn item_list_defaults_missing_items() {
    let parsed: ItemList = serde_json::from_str("{}").unwrap();
    assert!(parsed.items.is_empty());
}

#[test]
fn profile_update_sends_only_changed_fields() {
    let update = ProfileUpdate { name: None, email: Some("new@example.com".to_owned()) };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "new@example.com" }));

    let parsed: ProfileUpdate = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, ProfileUpdate::default());
}
