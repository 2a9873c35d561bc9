//! Account routes for the signed-in user: profile edits and password change.
//!
//! Both require `Authorization: Bearer <token>` naming an active session.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Json, Response};
use client::net::types::{PasswordChange, PasswordChanged, ProfileUpdate, UserProfile};
use uuid::Uuid;

use super::JsonBody;
use super::auth::{auth_error_response, require_bearer};
use crate::services::account;
use crate::state::AppState;

async fn signed_in_user(state: &AppState, headers: &HeaderMap) -> Result<Uuid, Response> {
    let token = require_bearer(headers)?;
    account::session_user(&state.pool, token).await.map_err(auth_error_response)
}

/// `PATCH /api/user/profile`: change name and/or email.
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(body): JsonBody<ProfileUpdate>,
) -> Result<Json<UserProfile>, Response> {
    let user_id = signed_in_user(&state, &headers).await?;
    account::update_profile(&state.pool, user_id, &body)
        .await
        .map(Json)
        .map_err(auth_error_response)
}

/// `POST /api/user/change-password`: verify the current password, store the new one.
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(body): JsonBody<PasswordChange>,
) -> Result<Json<PasswordChanged>, Response> {
    let user_id = signed_in_user(&state, &headers).await?;
    account::change_password(&state.pool, user_id, &body)
        .await
        .map_err(auth_error_response)?;
    Ok(Json(PasswordChanged { success: true }))
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
