//! Account registration and credential login.
//!
//! DESIGN
//! ======
//! Emails are compared after trim + lowercase. Unknown emails and wrong
//! passwords are indistinguishable to the caller. The password rule set is
//! the same one the sign-up form checks in the browser.

use std::sync::LazyLock;

use client::net::types::{Credentials, RegisteredUser, Registration, TokenResponse};
use client::util::validation::password_meets_requirements;
use regex::Regex;
use sqlx::{PgPool, Row};
use thiserror::Error;
use uuid::Uuid;

use super::{password, session};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Email is already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Session not found")]
    SessionNotFound,
    #[error("Invalid or expired session")]
    Unauthorized,
    #[error("User not found")]
    UserNotFound,
    #[error("Current password is incorrect")]
    WrongPassword,
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Registration input after trimming and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check a registration payload and return its normalized name and email.
///
/// # Errors
///
/// Returns [`AuthError::Validation`] naming the first failing field.
pub fn validate_registration(registration: &Registration) -> Result<NewUser, AuthError> {
    let name = registration.name.trim();
    if name.is_empty() {
        return Err(AuthError::Validation("Name is required"));
    }
    let email = normalize_email(&registration.email);
    if !is_valid_email(&email) {
        return Err(AuthError::Validation("Invalid email address"));
    }
    if !password_meets_requirements(&registration.password) {
        return Err(AuthError::Validation("Password does not meet requirements"));
    }
    Ok(NewUser { name: name.to_owned(), email })
}

pub(super) async fn hash_off_thread(plain: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || password::hash_password(&plain))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

pub(super) async fn verify_off_thread(plain: String, phc: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || password::verify_password(&plain, &phc))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Create a user account.
///
/// # Errors
///
/// Validation failures, [`AuthError::EmailTaken`] on a duplicate email, or
/// database/hashing failures.
pub async fn register_user(pool: &PgPool, registration: &Registration) -> Result<RegisteredUser, AuthError> {
    let new_user = validate_registration(registration)?;

    let taken = sqlx::query("SELECT 1 FROM users WHERE email = $1")
        .bind(&new_user.email)
        .fetch_optional(pool)
        .await?
        .is_some();
    if taken {
        return Err(AuthError::EmailTaken);
    }

    let password_hash = hash_off_thread(registration.password.clone()).await?;
    let id = Uuid::new_v4();
    let inserted = sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&password_hash)
        .execute(pool)
        .await;

    match inserted {
        Ok(_) => {}
        // Lost a race with a concurrent signup for the same email.
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => return Err(AuthError::EmailTaken),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(user_id = %id, "user registered");
    Ok(RegisteredUser { id: id.to_string(), name: new_user.name, email: new_user.email })
}

/// Verify credentials and open a session.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] for an unknown email or wrong password,
/// or database/hashing failures.
pub async fn login_user(pool: &PgPool, credentials: &Credentials) -> Result<TokenResponse, AuthError> {
    let email = normalize_email(&credentials.email);
    let row = sqlx::query("SELECT id, name, password_hash FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let user_id: Uuid = row.get("id");
    let name: String = row.get("name");
    let password_hash: String = row.get("password_hash");

    if !verify_off_thread(credentials.password.clone(), password_hash).await? {
        return Err(AuthError::InvalidCredentials);
    }

    let (session_id, access_token) = session::create_session(pool, user_id).await?;
    tracing::info!(%user_id, session_id, "session started");
    Ok(TokenResponse {
        access_token,
        token_type: "bearer".to_owned(),
        session_id: Some(session_id),
        user_name: Some(name),
    })
}

/// End the session behind `token`. Returns `false` if it had already ended.
///
/// # Errors
///
/// [`AuthError::SessionNotFound`] for an unknown token, or database failures.
pub async fn logout_user(pool: &PgPool, token: &str) -> Result<bool, AuthError> {
    session::end_session(pool, token).await?.ok_or(AuthError::SessionNotFound)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
