//! Auth routes: sign-up, sign-in, and bearer-token logout.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Json, Response};
use client::net::types::{Credentials, LogoutResponse, RegisteredUser, Registration, TokenResponse};

use super::{JsonBody, error_response};
use crate::services::auth::{self as auth_svc, AuthError};
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Like [`bearer_token`], but a missing token is already the 401 response.
pub(crate) fn require_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    bearer_token(headers).ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "Missing bearer token"))
}

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::Validation(_) | AuthError::EmailTaken | AuthError::WrongPassword => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        AuthError::SessionNotFound | AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::Hashing(_) | AuthError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a service error to `{ detail }`. Internal failures are logged, not echoed.
pub(crate) fn auth_error_response(err: AuthError) -> Response {
    let status = auth_error_to_status(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "auth request failed");
        return error_response(status, "Internal server error");
    }
    error_response(status, err.to_string())
}

/// `POST /api/auth/signup`: create an account.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Registration>,
) -> Result<(StatusCode, Json<RegisteredUser>), Response> {
    let user = auth_svc::register_user(&state.pool, &body)
        .await
        .map_err(auth_error_response)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `POST /api/auth/signin`: verify credentials and issue a session token.
pub async fn signin(State(state): State<AppState>, JsonBody(body): JsonBody<Credentials>) -> Result<Json<TokenResponse>, Response> {
    auth_svc::login_user(&state.pool, &body)
        .await
        .map(Json)
        .map_err(auth_error_response)
}

/// `POST /api/auth/logout`: end the session behind the bearer token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<LogoutResponse>, Response> {
    let token = require_bearer(&headers)?;
    let ended = auth_svc::logout_user(&state.pool, token)
        .await
        .map_err(auth_error_response)?;
    Ok(Json(LogoutResponse { ended }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
