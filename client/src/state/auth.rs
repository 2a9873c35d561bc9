//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the `/home` route guard and by the auth pages to coordinate
//! sign-in redirects and the submit button's loading state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::errors::ApiError;

/// Token presence as last read from storage.
///
/// `loading` stays true until the browser slot has been read; SSR never
/// reads it, so server-rendered guards neither show nor redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// State before the stored token has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { token: None, loading: true }
    }

    /// State after reading (or writing) the stored token.
    #[must_use]
    pub fn loaded(token: Option<String>) -> Self {
        Self { token, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Loading flag and form-level error for one form's submissions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub loading: bool,
    pub error: String,
}

impl SubmitState {
    /// Start a submission: set loading and clear the previous error.
    ///
    /// Returns `false` (and changes nothing) while a submission is in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error.clear();
        true
    }

    /// Finish a submission on any outcome. Loading is always cleared.
    ///
    /// On failure the error becomes the server's `detail` or `fallback`.
    pub fn settle<T>(&mut self, result: Result<T, ApiError>, fallback: &str) -> Option<T> {
        self.loading = false;
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.error = err.user_message(fallback);
                None
            }
        }
    }
}
