//! Labelled text input with an inline error line.

use leptos::prelude::*;

/// Controlled text field. The caller owns the value and receives every edit.
#[component]
pub fn TextInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    let has_error = move || !error.get().is_empty();

    view! {
        <div class="field" class:field--invalid=has_error>
            <label class="field__label" for=id.clone()>
                {label}
            </label>
            <input
                class="field__input"
                id=id
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=has_error>
                <p class="field__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
