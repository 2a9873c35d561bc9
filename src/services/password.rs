//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings, so parameters and salt travel with the
//! hash. Both operations are CPU-bound; async callers go through
//! `spawn_blocking`.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

/// Hash a password into a PHC string with a fresh random salt.
///
/// # Errors
///
/// Returns an error if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordHashError(e.to_string()))
}

/// Check a password against a stored PHC string. Malformed hashes never verify.
#[must_use]
pub fn verify_password(password: &str, phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
