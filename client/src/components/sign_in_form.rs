//! Email + password sign-in form.

use leptos::prelude::*;

use super::auth_form::AuthForm;
use super::input::TextInput;
use super::password_input::PasswordInput;
use crate::net::types::Credentials;
use crate::state::forms::{self, Field};
use crate::util::auth::SIGN_UP_ROUTE;

/// Validates locally and hands valid credentials to `on_submit`.
///
/// The owning page drives `loading` and the form-level `error`.
#[component]
pub fn SignInForm(
    on_submit: Callback<Credentials>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    let form = RwSignal::new(forms::SignInForm::default());

    let submit = Callback::new(move |()| {
        if let Some(credentials) = form.try_update(forms::SignInForm::submit).flatten() {
            on_submit.run(credentials);
        }
    });
    let edit = move |field: Field| {
        Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
    };

    view! {
        <AuthForm
            title="Welcome back"
            subtitle="Sign in to continue"
            error=error
            loading=loading
            submit_label="Sign In"
            loading_label="Signing in..."
            on_submit=submit
            alt_prompt="Don't have an account?"
            alt_label="Sign up"
            alt_href=SIGN_UP_ROUTE
        >
            <TextInput
                id="signin-email"
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                autocomplete="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=edit(Field::Email)
                error=Signal::derive(move || form.with(|f| f.visible_error(Field::Email)))
            />
            <PasswordInput
                id="signin-password"
                label="Password"
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=edit(Field::Password)
                error=Signal::derive(move || form.with(|f| f.visible_error(Field::Password)))
            />
        </AuthForm>
    }
}
