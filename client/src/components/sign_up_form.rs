//! Registration form with a live password requirements checklist.

use leptos::prelude::*;

use super::auth_form::AuthForm;
use super::input::TextInput;
use super::password_input::PasswordInput;
use super::password_requirements::PasswordRequirements;
use crate::net::types::Registration;
use crate::state::forms::{self, Field};
use crate::util::auth::SIGN_IN_ROUTE;

#[component]
pub fn SignUpForm(
    on_submit: Callback<Registration>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    let form = RwSignal::new(forms::SignUpForm::default());

    let submit = Callback::new(move |()| {
        if let Some(registration) = form.try_update(forms::SignUpForm::submit).flatten() {
            on_submit.run(registration);
        }
    });
    let edit = move |field: Field| {
        Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
    };
    let field_error = move |field: Field| Signal::derive(move || form.with(|f| f.visible_error(field)));
    let checks = Signal::derive(move || form.with(forms::SignUpForm::password_checks));

    view! {
        <AuthForm
            title="Create an account"
            subtitle="Sign up to get started"
            error=error
            loading=loading
            submit_label="Sign Up"
            loading_label="Creating account..."
            submit_disabled=Signal::derive(move || form.with(forms::SignUpForm::submit_disabled))
            on_submit=submit
            alt_prompt="Already have an account?"
            alt_label="Sign in"
            alt_href=SIGN_IN_ROUTE
        >
            <TextInput
                id="signup-name"
                label="Name"
                autocomplete="name"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=edit(Field::Name)
                error=field_error(Field::Name)
            />
            <TextInput
                id="signup-email"
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                autocomplete="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=edit(Field::Email)
                error=field_error(Field::Email)
            />
            <PasswordInput
                id="signup-password"
                label="Password"
                autocomplete="new-password"
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=edit(Field::Password)
                error=field_error(Field::Password)
            />
            <PasswordInput
                id="signup-confirm-password"
                label="Confirm password"
                autocomplete="new-password"
                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                on_input=edit(Field::ConfirmPassword)
                error=field_error(Field::ConfirmPassword)
            />
            <Show when=move || form.with(forms::SignUpForm::show_requirements)>
                <PasswordRequirements checks=checks/>
            </Show>
        </AuthForm>
    }
}
