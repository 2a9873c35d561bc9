use super::*;

fn registration(name: &str, email: &str, password: &str) -> Registration {
    Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

// =============================================================================
// email helpers
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
}

#[test]
fn is_valid_email_requires_local_domain_and_tld() {
    assert!(is_valid_email("ada@example.com"));
    assert!(!is_valid_email("ada@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada example@x.com"));
    assert!(!is_valid_email("ada@@example.com"));
}

// =============================================================================
// validate_registration
// =============================================================================

#[test]
fn validate_registration_normalizes_fields() {
    let user = validate_registration(&registration("  Ada ", " ADA@example.com", "Passw0rd!")).unwrap();
    assert_eq!(user, NewUser { name: "Ada".to_owned(), email: "ada@example.com".to_owned() });
}

#[test]
fn validate_registration_rejects_blank_name() {
    let err = validate_registration(&registration("  ", "ada@example.com", "Passw0rd!")).unwrap_err();
    assert_eq!(err.to_string(), "Name is required");
}

#[test]
fn validate_registration_rejects_bad_email() {
    let err = validate_registration(&registration("Ada", "ada.example.com", "Passw0rd!")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid email address");
}

#[test]
fn validate_registration_rejects_weak_password() {
    let err = validate_registration(&registration("Ada", "ada@example.com", "password")).unwrap_err();
    assert!(matches!(err, AuthError::Validation("Password does not meet requirements")));
}

#[test]
fn auth_error_messages_match_api_details() {
    assert_eq!(AuthError::EmailTaken.to_string(), "Email is already registered");
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
    assert_eq!(AuthError::SessionNotFound.to_string(), "Session not found");
    assert_eq!(AuthError::Unauthorized.to_string(), "Invalid or expired session");
    assert_eq!(AuthError::WrongPassword.to_string(), "Current password is incorrect");
}

// =============================================================================
// live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn register_login_logout_round_trip() {
    let pool = crate::state::test_helpers::integration_pool(&["ada@example.com"]).await;

    let created = register_user(&pool, &registration("Ada", "Ada@Example.com", "Passw0rd!"))
        .await
        .expect("register should succeed");
    assert_eq!(created.email, "ada@example.com");

    let duplicate = register_user(&pool, &registration("Ada 2", "ada@example.com", "Passw0rd!")).await;
    assert!(matches!(duplicate, Err(AuthError::EmailTaken)));

    let wrong = login_user(
        &pool,
        &Credentials { email: "ada@example.com".to_owned(), password: "Wrong0rd!".to_owned() },
    )
    .await;
    assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));

    let token = login_user(
        &pool,
        &Credentials { email: " ADA@example.com".to_owned(), password: "Passw0rd!".to_owned() },
    )
    .await
    .expect("login should succeed");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.user_name.as_deref(), Some("Ada"));
    assert_eq!(token.access_token.len(), 64);

    assert!(logout_user(&pool, &token.access_token).await.expect("first logout"));
    assert!(!logout_user(&pool, &token.access_token).await.expect("second logout"));
    assert!(matches!(logout_user(&pool, "nope").await, Err(AuthError::SessionNotFound)));
}
