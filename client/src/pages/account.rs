//! Account page: profile edits and password change for the signed-in user.
//!
//! Both forms send the stored bearer token. Success shows an inline notice
//! and clears the form; failures show the server's `detail` or a fallback.

use leptos::prelude::*;

use crate::components::change_password_form::ChangePasswordForm;
use crate::components::flash_banner::FlashBanner;
use crate::components::profile_form::ProfileForm;
use crate::net::types::{PasswordChange, ProfileUpdate};
use crate::state::auth::{AuthState, SubmitState};
use crate::state::flash::FlashSlot;
use crate::state::forms;

pub const PROFILE_FALLBACK: &str = "Could not update your profile";
pub const PROFILE_SAVED: &str = "Profile updated";
pub const PASSWORD_FALLBACK: &str = "Could not change your password";
pub const PASSWORD_SAVED: &str = "Password changed";

#[component]
pub fn AccountPage(flash: RwSignal<FlashSlot>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let profile_form = RwSignal::new(forms::ProfileForm::default());
    let profile_state = RwSignal::new(SubmitState::default());
    let profile_notice = RwSignal::new(String::new());

    let password_form = RwSignal::new(forms::PasswordChangeForm::default());
    let password_state = RwSignal::new(SubmitState::default());
    let password_notice = RwSignal::new(String::new());

    let on_profile = Callback::new(move |update: ProfileUpdate| {
        if !profile_state.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        profile_notice.set(String::new());
        let token = auth.with_untracked(|a| a.token.clone()).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_profile(&token, &update).await;
            if let Err(e) = &result {
                log::warn!("profile update failed: {e}");
            }
            if profile_state.try_update(|s| s.settle(result, PROFILE_FALLBACK)).flatten().is_some() {
                profile_form.update(forms::ProfileForm::reset);
                profile_notice.set(PROFILE_SAVED.to_owned());
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (token, update);
    });

    let on_password = Callback::new(move |change: PasswordChange| {
        if !password_state.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        password_notice.set(String::new());
        let token = auth.with_untracked(|a| a.token.clone()).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::change_password(&token, &change).await;
            if let Err(e) = &result {
                log::warn!("password change failed: {e}");
            }
            if password_state.try_update(|s| s.settle(result, PASSWORD_FALLBACK)).flatten().is_some() {
                password_form.update(forms::PasswordChangeForm::reset);
                password_notice.set(PASSWORD_SAVED.to_owned());
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (token, change);
    });

    view! {
        <section class="account">
            <FlashBanner flash=flash/>
            <h1>"Account"</h1>
            <ProfileForm
                form=profile_form
                on_submit=on_profile
                loading=Signal::derive(move || profile_state.with(|s| s.loading))
                error=Signal::derive(move || profile_state.with(|s| s.error.clone()))
                notice=profile_notice
            />
            <ChangePasswordForm
                form=password_form
                on_submit=on_password
                loading=Signal::derive(move || password_state.with(|s| s.loading))
                error=Signal::derive(move || password_state.with(|s| s.error.clone()))
                notice=password_notice
            />
        </section>
    }
}
