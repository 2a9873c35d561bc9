//! Profile edits and password changes for a signed-in user.
//!
//! The caller resolves the user from an active session first; everything
//! here takes the user id as given.

use client::net::types::{PasswordChange, ProfileUpdate, UserProfile};
use client::util::validation::password_meets_requirements;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::auth::{AuthError, hash_off_thread, is_valid_email, normalize_email, verify_off_thread};
use super::session;

/// Normalized profile changes. At least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Resolve the user behind an active session token.
///
/// # Errors
///
/// [`AuthError::Unauthorized`] for an unknown or ended session.
pub async fn session_user(pool: &PgPool, token: &str) -> Result<Uuid, AuthError> {
    session::active_session_user(pool, token).await?.ok_or(AuthError::Unauthorized)
}

/// Trim and normalize a profile update.
///
/// # Errors
///
/// [`AuthError::Validation`] for a blank name, a malformed email, or an
/// update that changes nothing.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<ProfileChanges, AuthError> {
    let name = match update.name.as_deref().map(str::trim) {
        Some("") => return Err(AuthError::Validation("Name is required")),
        other => other.map(str::to_owned),
    };
    let email = update.email.as_deref().map(normalize_email);
    if email.as_deref().is_some_and(|e| !is_valid_email(e)) {
        return Err(AuthError::Validation("Invalid email address"));
    }
    if name.is_none() && email.is_none() {
        return Err(AuthError::Validation("Nothing to update"));
    }
    Ok(ProfileChanges { name, email })
}

/// Apply a profile update.
///
/// # Errors
///
/// Validation failures, [`AuthError::EmailTaken`] when another account holds
/// the email, [`AuthError::UserNotFound`], or database failures.
pub async fn update_profile(pool: &PgPool, user_id: Uuid, update: &ProfileUpdate) -> Result<UserProfile, AuthError> {
    let changes = validate_profile_update(update)?;

    if let Some(email) = &changes.email {
        let taken = sqlx::query("SELECT 1 FROM users WHERE email = $1 AND id <> $2")
            .bind(email)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
            .is_some();
        if taken {
            return Err(AuthError::EmailTaken);
        }
    }

    let updated = sqlx::query(
        "UPDATE users SET name = COALESCE($2, name), email = COALESCE($3, email) \
         WHERE id = $1 RETURNING id, name, email",
    )
    .bind(user_id)
    .bind(&changes.name)
    .bind(&changes.email)
    .fetch_optional(pool)
    .await;

    let row = match updated {
        Ok(Some(row)) => row,
        Ok(None) => return Err(AuthError::UserNotFound),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => return Err(AuthError::EmailTaken),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(%user_id, "profile updated");
    let id: Uuid = row.get("id");
    Ok(UserProfile { id: id.to_string(), name: row.get("name"), email: row.get("email") })
}

/// Replace the password after verifying the current one.
///
/// # Errors
///
/// [`AuthError::Validation`] when the new password is weak,
/// [`AuthError::WrongPassword`] when the current one does not verify,
/// [`AuthError::UserNotFound`], or database/hashing failures.
pub async fn change_password(pool: &PgPool, user_id: Uuid, change: &PasswordChange) -> Result<(), AuthError> {
    if !password_meets_requirements(&change.new_password) {
        return Err(AuthError::Validation("Password does not meet requirements"));
    }

    let current_hash: String = sqlx::query("SELECT password_hash FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::UserNotFound)?
        .get("password_hash");

    if !verify_off_thread(change.current_password.clone(), current_hash).await? {
        return Err(AuthError::WrongPassword);
    }

    let new_hash = hash_off_thread(change.new_password.clone()).await?;
    sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
        .bind(user_id)
        .bind(&new_hash)
        .execute(pool)
        .await?;

    tracing::info!(%user_id, "password changed");
    Ok(())
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
