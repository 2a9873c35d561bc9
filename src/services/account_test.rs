use super::*;

fn update(name: Option<&str>, email: Option<&str>) -> ProfileUpdate {
    ProfileUpdate { name: name.map(str::to_owned), email: email.map(str::to_owned) }
}

// =============================================================================
// validate_profile_update
// =============================================================================

#[test]
fn profile_update_normalizes_fields() {
    let changes = validate_profile_update(&update(Some(" Grace "), Some(" Grace@Example.COM"))).unwrap();
    assert_eq!(
        changes,
        ProfileChanges { name: Some("Grace".to_owned()), email: Some("grace@example.com".to_owned()) }
    );
}

#[test]
fn profile_update_allows_single_field() {
    let changes = validate_profile_update(&update(None, Some("grace@example.com"))).unwrap();
    assert_eq!(changes.name, None);
    assert_eq!(changes.email.as_deref(), Some("grace@example.com"));
}

#[test]
fn profile_update_rejects_blank_name() {
    let err = validate_profile_update(&update(Some("   "), None)).unwrap_err();
    assert!(matches!(err, AuthError::Validation("Name is required")));
}

#[test]
fn profile_update_rejects_bad_email() {
    let err = validate_profile_update(&update(None, Some("grace.example.com"))).unwrap_err();
    assert!(matches!(err, AuthError::Validation("Invalid email address")));
}

#[test]
fn profile_update_requires_a_change() {
    let err = validate_profile_update(&ProfileUpdate::default()).unwrap_err();
    assert!(matches!(err, AuthError::Validation("Nothing to update")));
}

// =============================================================================
// live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn profile_and_password_changes_round_trip() {
    use client::net::types::{Credentials, Registration};

    use crate::services::auth::{login_user, logout_user, register_user};

    let pool = crate::state::test_helpers::integration_pool(&[
        "grace@example.com",
        "grace2@example.com",
        "taken@example.com",
    ])
    .await;

    let register = |name: &str, email: &str| Registration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: "Passw0rd!".to_owned(),
    };
    register_user(&pool, &register("Grace", "grace@example.com")).await.expect("register grace");
    register_user(&pool, &register("Other", "taken@example.com")).await.expect("register other");

    let login = |email: &str, password: &str| Credentials { email: email.to_owned(), password: password.to_owned() };
    let token = login_user(&pool, &login("grace@example.com", "Passw0rd!")).await.expect("login").access_token;
    let user_id = session_user(&pool, &token).await.expect("active session");

    let conflict = update_profile(&pool, user_id, &update(None, Some("taken@example.com"))).await;
    assert!(matches!(conflict, Err(AuthError::EmailTaken)));

    let profile = update_profile(&pool, user_id, &update(Some("Grace H"), Some("Grace2@example.com")))
        .await
        .expect("profile update");
    assert_eq!(profile.name, "Grace H");
    assert_eq!(profile.email, "grace2@example.com");

    let wrong = PasswordChange { current_password: "Nope0rd!".to_owned(), new_password: "N3wPassw0rd!".to_owned() };
    assert!(matches!(change_password(&pool, user_id, &wrong).await, Err(AuthError::WrongPassword)));

    let right = PasswordChange { current_password: "Passw0rd!".to_owned(), new_password: "N3wPassw0rd!".to_owned() };
    change_password(&pool, user_id, &right).await.expect("password change");

    assert!(matches!(
        login_user(&pool, &login("grace2@example.com", "Passw0rd!")).await,
        Err(AuthError::InvalidCredentials)
    ));
    login_user(&pool, &login("grace2@example.com", "N3wPassw0rd!")).await.expect("login with new password");

    logout_user(&pool, &token).await.expect("logout");
    assert!(matches!(session_user(&pool, &token).await, Err(AuthError::Unauthorized)));
}
