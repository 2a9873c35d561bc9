//! Live checklist of password rules.

use leptos::prelude::*;

use crate::util::validation::PasswordChecks;

#[component]
pub fn PasswordRequirements(#[prop(into)] checks: Signal<PasswordChecks>) -> impl IntoView {
    view! {
        <ul class="password-requirements">
            {move || {
                checks
                    .get()
                    .rows()
                    .into_iter()
                    .map(|(label, met)| {
                        view! {
                            <li
                                class="password-requirements__item"
                                class:password-requirements__item--met=met
                            >
                                <span class="password-requirements__mark" aria-hidden="true">
                                    {if met { "✓" } else { "○" }}
                                </span>
                                {label}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
