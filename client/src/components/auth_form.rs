//! Shared frame for the auth and account forms.
//!
//! Renders the heading, a form-level error, the submit button with its
//! loading label, and an optional link to the alternate auth screen. Field
//! markup is passed in as children.

use leptos::prelude::*;

#[component]
pub fn AuthForm(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] error: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    submit_label: &'static str,
    loading_label: &'static str,
    on_submit: Callback<()>,
    #[prop(optional)] alt_prompt: &'static str,
    #[prop(optional)] alt_label: &'static str,
    #[prop(optional)] alt_href: &'static str,
    #[prop(into, default = Signal::stored(String::new()))] notice: Signal<String>,
    #[prop(into, default = Signal::stored(false))] submit_disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let disabled = move || loading.get() || submit_disabled.get();

    view! {
        <div class="auth-card">
            <h1 class="auth-card__title">{title}</h1>
            <p class="auth-card__subtitle">{subtitle}</p>
            <form
                class="auth-form"
                novalidate=true
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                {children()}
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-form__notice" role="status">
                        {move || notice.get()}
                    </p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-form__error" role="alert">
                        {move || error.get()}
                    </p>
                </Show>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=disabled>
                    {move || if loading.get() { loading_label } else { submit_label }}
                </button>
            </form>
            {(!alt_href.is_empty())
                .then(|| {
                    view! {
                        <p class="auth-card__alt">
                            {alt_prompt}
                            " "
                            <a href=alt_href>{alt_label}</a>
                        </p>
                    }
                })}
        </div>
    }
}
