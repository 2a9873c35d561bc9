//! Password change form with the requirements checklist.

use leptos::prelude::*;

use super::auth_form::AuthForm;
use super::password_input::PasswordInput;
use super::password_requirements::PasswordRequirements;
use crate::net::types::PasswordChange;
use crate::state::forms::{self, Field};

#[component]
pub fn ChangePasswordForm(
    form: RwSignal<forms::PasswordChangeForm>,
    on_submit: Callback<PasswordChange>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<String>,
    #[prop(into)] notice: Signal<String>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        if let Some(change) = form.try_update(forms::PasswordChangeForm::submit).flatten() {
            on_submit.run(change);
        }
    });
    let edit = move |field: Field| Callback::new(move |value: String| form.update(|f| f.set_field(field, value)));
    let field_error = move |field: Field| Signal::derive(move || form.with(|f| f.visible_error(field)));
    let checks = Signal::derive(move || form.with(forms::PasswordChangeForm::password_checks));

    view! {
        <AuthForm
            title="Change password"
            subtitle="Enter your current password to set a new one"
            error=error
            notice=notice
            loading=loading
            submit_label="Change password"
            loading_label="Changing password..."
            submit_disabled=Signal::derive(move || form.with(forms::PasswordChangeForm::submit_disabled))
            on_submit=submit
        >
            <PasswordInput
                id="account-current-password"
                label="Current password"
                value=Signal::derive(move || form.with(|f| f.current_password.clone()))
                on_input=edit(Field::CurrentPassword)
                error=field_error(Field::CurrentPassword)
            />
            <PasswordInput
                id="account-new-password"
                label="New password"
                autocomplete="new-password"
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=edit(Field::Password)
                error=field_error(Field::Password)
            />
            <PasswordInput
                id="account-confirm-password"
                label="Confirm new password"
                autocomplete="new-password"
                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                on_input=edit(Field::ConfirmPassword)
                error=field_error(Field::ConfirmPassword)
            />
            <Show when=move || form.with(forms::PasswordChangeForm::show_requirements)>
                <PasswordRequirements checks=checks/>
            </Show>
        </AuthForm>
    }
}
