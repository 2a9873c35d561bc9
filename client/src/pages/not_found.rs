use leptos::prelude::*;

use crate::util::auth::LANDING_ROUTE;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found."</h1>
            <a href=LANDING_ROUTE>"Back to home"</a>
        </section>
    }
}
