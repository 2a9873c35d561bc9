//! Sign-in page: submits credentials, stores the token, and moves on.
//!
//! DESIGN
//! ======
//! The submit callback must stay `Send`, so it never touches the router
//! directly. On success it records the target in `pending_nav` and an effect
//! performs the navigation, mirroring how the other pages navigate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::flash_banner::FlashBanner;
use crate::components::sign_in_form::SignInForm;
use crate::net::types::Credentials;
use crate::state::auth::{AuthState, SubmitState};
use crate::state::flash::{FlashMessage, FlashSlot};
use crate::util::auth::REDIRECT_PARAM;

/// Shown when a failed sign-in carries no server `detail`.
pub const SIGN_IN_FALLBACK: &str = "Invalid email or password";
pub const SIGN_IN_SUCCESS: &str = "Signed in successfully";

#[component]
pub fn SignInPage(flash: RwSignal<FlashSlot>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let submit_state = RwSignal::new(SubmitState::default());
    let pending_nav = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(target) = pending_nav.get() {
            pending_nav.set(None);
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |credentials: Credentials| {
        if !submit_state.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let redirect = query.with_untracked(|q| q.get(REDIRECT_PARAM));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::sign_in(&credentials).await;
            if let Err(e) = &result {
                log::warn!("sign in failed: {e}");
            }
            let Some(response) = submit_state.try_update(|s| s.settle(result, SIGN_IN_FALLBACK)).flatten() else {
                return;
            };
            let store = crate::util::token::BrowserTokenStore;
            let target = crate::util::token::complete_sign_in(&store, &response, redirect.as_deref());
            auth.set(AuthState::loaded(Some(response.access_token)));
            if crate::util::auth::route_shows_flash(&target) {
                flash.update(|slot| slot.set(FlashMessage::success(SIGN_IN_SUCCESS)));
            }
            pending_nav.set(Some(target));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, redirect, auth, flash, pending_nav);
    });

    view! {
        <section class="auth-page">
            <FlashBanner flash=flash/>
            <SignInForm
                on_submit=on_submit
                loading=Signal::derive(move || submit_state.with(|s| s.loading))
                error=Signal::derive(move || submit_state.with(|s| s.error.clone()))
            />
        </section>
    }
}
