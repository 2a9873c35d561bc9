//! Public landing page.

use leptos::prelude::*;

use crate::util::auth::{ITEMS_DEMO_ROUTE, SIGN_IN_ROUTE, SIGN_UP_ROUTE};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="landing">
            <h1 class="landing__title">"Anima"</h1>
            <p class="landing__tagline">"Your space, one sign-in away."</p>
            <div class="landing__actions">
                <a class="btn btn--primary" href=SIGN_UP_ROUTE>
                    "Get started"
                </a>
                <a class="btn" href=SIGN_IN_ROUTE>
                    "Sign in"
                </a>
            </div>
            <p class="landing__demo">
                <a href=ITEMS_DEMO_ROUTE>"Try the items demo"</a>
            </p>
        </section>
    }
}
