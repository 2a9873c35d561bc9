//! Client-side API error type.
//!
//! Every failure a page can see (network, HTTP status, bad body) ends up as a
//! single form-level string via [`ApiError::user_message`].

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// Non-2xx response; `detail` is the server's message when it sent one.
    Http { status: u16, detail: Option<String> },
    /// 2xx response whose body could not be decoded.
    Parse(String),
    /// Request body could not be encoded.
    Serialization(String),
    /// Called where no browser is available (SSR).
    Unavailable,
}

impl ApiError {
    /// Message to show on the form: the server's `detail` when present, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { detail: Some(detail), .. } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Http { status, detail: Some(detail) } => write!(f, "request failed ({status}): {detail}"),
            ApiError::Http { status, detail: None } => write!(f, "request failed ({status})"),
            ApiError::Parse(message) => write!(f, "response error: {message}"),
            ApiError::Serialization(message) => write!(f, "request error: {message}"),
            ApiError::Unavailable => write!(f, "not available on server"),
        }
    }
}

impl std::error::Error for ApiError {}
