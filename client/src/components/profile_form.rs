//! Account profile form: new name and/or email.

use leptos::prelude::*;

use super::auth_form::AuthForm;
use super::input::TextInput;
use crate::net::types::ProfileUpdate;
use crate::state::forms::{self, Field};

/// The page owns `form` so it can reset it once the server accepts an update.
#[component]
pub fn ProfileForm(
    form: RwSignal<forms::ProfileForm>,
    on_submit: Callback<ProfileUpdate>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<String>,
    #[prop(into)] notice: Signal<String>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        if let Some(update) = form.try_update(forms::ProfileForm::submit).flatten() {
            on_submit.run(update);
        }
    });
    let edit = move |field: Field| Callback::new(move |value: String| form.update(|f| f.set_field(field, value)));
    let field_error = move |field: Field| Signal::derive(move || form.with(|f| f.visible_error(field)));

    view! {
        <AuthForm
            title="Profile"
            subtitle="Leave a field blank to keep it"
            error=error
            notice=notice
            loading=loading
            submit_label="Save profile"
            loading_label="Saving..."
            on_submit=submit
        >
            <TextInput
                id="profile-name"
                label="New name"
                autocomplete="name"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=edit(Field::Name)
                error=field_error(Field::Name)
            />
            <TextInput
                id="profile-email"
                label="New email"
                input_type="email"
                placeholder="you@example.com"
                autocomplete="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=edit(Field::Email)
                error=field_error(Field::Email)
            />
        </AuthForm>
    }
}
