//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar, the `/home` guard, and the sign-in page all need the same
//! answers about which routes are "authenticated", where to send a user after
//! sign-in, and how the pre-redirect destination is carried.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;

pub const LANDING_ROUTE: &str = "/";
pub const SIGN_IN_ROUTE: &str = "/signin";
pub const SIGN_UP_ROUTE: &str = "/signup";
pub const HOME_ROUTE: &str = "/home";
pub const ACCOUNT_ROUTE: &str = "/home/account";
/// Items demo page. Kept off `/items`, which is the API path.
pub const ITEMS_DEMO_ROUTE: &str = "/demo/items";

/// Query parameter carrying the route a guest was bounced from.
pub const REDIRECT_PARAM: &str = "redirect";

/// Navbar heuristic: the authenticated area is everything under `/home`.
///
/// This only picks which links to render. It does not look at the token.
#[must_use]
pub fn is_authenticated_area(path: &str) -> bool {
    path.starts_with(HOME_ROUTE)
}

/// Where to go after a successful sign-in.
///
/// Only local absolute paths are honored; auth screens and anything that
/// could leave the origin fall back to [`HOME_ROUTE`].
#[must_use]
pub fn post_login_destination(redirect: Option<&str>) -> String {
    match redirect.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.starts_with(SIGN_IN_ROUTE)
                && !path.starts_with(SIGN_UP_ROUTE) =>
        {
            path.to_owned()
        }
        _ => HOME_ROUTE.to_owned(),
    }
}

/// Whether the page at `path` renders the flash banner.
///
/// Publishers skip the flash otherwise, so it cannot linger in the slot and
/// surface on some later page.
#[must_use]
pub fn route_shows_flash(path: &str) -> bool {
    is_authenticated_area(path) || path == SIGN_IN_ROUTE
}

/// Sign-in URL that remembers `from` as the post-login destination.
#[must_use]
pub fn sign_in_redirect_path(from: &str) -> String {
    if from.is_empty() || from == HOME_ROUTE {
        return SIGN_IN_ROUTE.to_owned();
    }
    let encoded: String = url::form_urlencoded::byte_serialize(from.as_bytes()).collect();
    format!("{SIGN_IN_ROUTE}?{REDIRECT_PARAM}={encoded}")
}

/// True once the stored token has been read and turned out to be absent.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.token.is_none()
}

/// Redirect to sign-in whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            let target = sign_in_redirect_path(&pathname.get_untracked());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Renders `children` only once a stored token has been found.
///
/// Renders nothing while the token is still unknown (SSR, pre-hydration) and
/// sends guests to sign-in with the current path as the redirect target.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    install_unauth_redirect(auth, location.pathname, use_navigate());

    view! { <Show when=move || auth.with(AuthState::is_authenticated)>{children()}</Show> }
}
