//! Bearer token persistence and the sign-in / sign-out transitions around it.
//!
//! DESIGN
//! ======
//! The token lives in a single storage slot. Its presence is the only
//! "authenticated" signal the route guard uses; nothing here inspects or
//! expires it. `TokenStore` is the seam between the browser slot and the
//! in-memory slot used by tests.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;

use super::auth::{SIGN_IN_ROUTE, post_login_destination};
use super::storage;
use crate::net::types::TokenResponse;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Single-slot token storage.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token slot backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        storage::get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        storage::set_item(TOKEN_KEY, token);
    }

    fn clear(&self) {
        storage::remove_item(TOKEN_KEY);
    }
}

/// Token slot held in memory.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Persist the token from a successful sign-in and pick where to go next.
///
/// Returns the navigation target: the recorded pre-redirect route when it is
/// usable, else the default authenticated route.
pub fn complete_sign_in(store: &impl TokenStore, response: &TokenResponse, redirect: Option<&str>) -> String {
    store.save(&response.access_token);
    post_login_destination(redirect)
}

/// Remove the stored token, returning whatever was there.
pub fn sign_out(store: &impl TokenStore) -> Option<String> {
    let previous = store.load();
    store.clear();
    previous
}

/// Result of a local sign-out: the token to end server-side, if any, and
/// where the user lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignOut {
    pub previous: Option<String>,
    pub target: &'static str,
}

/// Clear the stored token and route to sign-in, whatever was stored.
pub fn complete_sign_out(store: &impl TokenStore) -> SignOut {
    SignOut { previous: sign_out(store), target: SIGN_IN_ROUTE }
}
