//! Password field with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "current-password")] autocomplete: &'static str,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let has_error = move || !error.get().is_empty();

    view! {
        <div class="field" class:field--invalid=has_error>
            <label class="field__label" for=id.clone()>
                {label}
            </label>
            <div class="field__password">
                <input
                    class="field__input"
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    class="field__toggle"
                    type="button"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            <Show when=has_error>
                <p class="field__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
