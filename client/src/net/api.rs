//! REST API helpers for the auth and items endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! calls only make sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result` and never panics, so a page's loading flag is
//! always cleared once the awaited call settles. Error bodies are parsed
//! defensively: anything that is not JSON with a `detail` string is treated
//! as an empty object.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::errors::ApiError;
use super::types::{Credentials, Item, PasswordChange, ProfileUpdate, Registration, TokenResponse, UserProfile};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{ItemList, PasswordChanged};

pub const SIGN_IN_PATH: &str = "/api/auth/signin";
pub const SIGN_UP_PATH: &str = "/api/auth/signup";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const PROFILE_PATH: &str = "/api/user/profile";
pub const CHANGE_PASSWORD_PATH: &str = "/api/user/change-password";
pub const ITEMS_PATH: &str = "/items";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Pull a `detail` string out of an error body, tolerating any garbage.
#[cfg(any(test, feature = "hydrate"))]
fn detail_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
}

/// `Authorization` header value for a stored token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error(status: u16, body: &str) -> ApiError {
    ApiError::Http { status, detail: detail_from_body(body) }
}

#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    endpoint(&crate::util::config::AppConfig::load().api_base(), path)
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    http_error(status, &body)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    send_json(gloo_net::http::Request::post(&api_url(path)), body).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize>(
    request: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request
        .json(body)
        .map_err(|e| ApiError::Serialization(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    Ok(resp)
}

/// Sign in via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the credentials,
/// or the success body has no `access_token`.
pub async fn sign_in(credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(SIGN_IN_PATH, credentials).await?;
        resp.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// The success body is not needed by the caller and is ignored.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the registration.
pub async fn sign_up(registration: &Registration) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(SIGN_UP_PATH, registration).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err(ApiError::Unavailable)
    }
}

/// End the server-side session for `token` via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server does not know the token.
pub async fn log_out(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url(LOGOUT_PATH))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Change name and/or email via `PATCH /api/user/profile`.
///
/// # Errors
///
/// Returns an error if the request fails, the session is not active, or the
/// server rejects the update (for example, an email already in use).
pub async fn update_profile(token: &str, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::patch(&api_url(PROFILE_PATH)).header("Authorization", &bearer_header(token));
        let resp = send_json(request, update).await?;
        resp.json::<UserProfile>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, update);
        Err(ApiError::Unavailable)
    }
}

/// Replace the password via `POST /api/user/change-password`.
///
/// # Errors
///
/// Returns an error if the request fails, the session is not active, or the
/// current password does not verify.
pub async fn change_password(token: &str, change: &PasswordChange) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request =
            gloo_net::http::Request::post(&api_url(CHANGE_PASSWORD_PATH)).header("Authorization", &bearer_header(token));
        let resp = send_json(request, change).await?;
        let body: PasswordChanged = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        if body.success {
            Ok(())
        } else {
            Err(ApiError::Parse("password change was not confirmed".to_owned()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, change);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the demo collection from `GET /items`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not an item list.
pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(ITEMS_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: ItemList = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(body.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Add an entry via `POST /items`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the item.
pub async fn create_item(item: &Item) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(ITEMS_PATH, item).await?;
        resp.json::<Item>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item;
        Err(ApiError::Unavailable)
    }
}
