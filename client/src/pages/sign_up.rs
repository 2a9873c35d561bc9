//! Sign-up page: registers the account, then sends the user to sign in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::sign_up_form::SignUpForm;
use crate::net::types::Registration;
use crate::state::auth::SubmitState;
use crate::state::flash::{FlashMessage, FlashSlot};
use crate::util::auth::SIGN_IN_ROUTE;

pub const SIGN_UP_FALLBACK: &str = "An error occurred during registration";
pub const SIGN_UP_SUCCESS: &str = "Account created successfully! Please sign in.";

#[component]
pub fn SignUpPage(flash: RwSignal<FlashSlot>) -> impl IntoView {
    let navigate = use_navigate();
    let submit_state = RwSignal::new(SubmitState::default());
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            registered.set(false);
            navigate(SIGN_IN_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |registration: Registration| {
        if !submit_state.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::sign_up(&registration).await;
            if let Err(e) = &result {
                log::warn!("sign up failed: {e}");
            }
            if submit_state.try_update(|s| s.settle(result, SIGN_UP_FALLBACK)).flatten().is_some() {
                flash.update(|slot| slot.set(FlashMessage::success(SIGN_UP_SUCCESS)));
                registered.set(true);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (registration, flash, registered);
    });

    view! {
        <section class="auth-page">
            <SignUpForm
                on_submit=on_submit
                loading=Signal::derive(move || submit_state.with(|s| s.loading))
                error=Signal::derive(move || submit_state.with(|s| s.error.clone()))
            />
        </section>
    }
}
