//! Session tokens and session records.
//!
//! ARCHITECTURE
//! ============
//! The client receives an opaque random token; the database keeps only its
//! SHA-256 digest. A session is "ended" by stamping `ended_at`, never deleted,
//! so logout can tell an already-ended session from an unknown token.

use std::fmt::Write;

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Lowercase hex SHA-256 of a token, as stored in `sessions.token_hash`.
#[must_use]
pub fn hash_token(token: &str) -> String {
    bytes_to_hex(&Sha256::digest(token.as_bytes()))
}

/// Create a session for the given user, returning its id and the plain token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<(i64, String), sqlx::Error> {
    let token = generate_token();
    let row = sqlx::query("INSERT INTO sessions (user_id, token_hash) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(hash_token(&token))
        .fetch_one(pool)
        .await?;
    Ok((row.get("id"), token))
}

/// End the session identified by `token`.
///
/// Returns `None` for an unknown token, `Some(true)` if this call ended the
/// session, and `Some(false)` if it had already ended.
pub async fn end_session(pool: &PgPool, token: &str) -> Result<Option<bool>, sqlx::Error> {
    let token_hash = hash_token(token);
    let exists = sqlx::query("SELECT id FROM sessions WHERE token_hash = $1")
        .bind(&token_hash)
        .fetch_optional(pool)
        .await?;
    let Some(row) = exists else {
        return Ok(None);
    };
    let id: i64 = row.get("id");

    let ended = sqlx::query("UPDATE sessions SET ended_at = now() WHERE id = $1 AND ended_at IS NULL")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(Some(ended.rows_affected() > 0))
}

/// User behind `token`, provided its session has not ended.
pub async fn active_session_user(pool: &PgPool, token: &str) -> Result<Option<Uuid>, sqlx::Error> {
    let row = sqlx::query("SELECT user_id FROM sessions WHERE token_hash = $1 AND ended_at IS NULL")
        .bind(hash_token(token))
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.get("user_id")))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
