//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    account::AccountPage,
    home::{HomeLayout, HomePage},
    items::ItemsPage,
    landing::LandingPage,
    not_found::NotFoundPage,
    sign_in::SignInPage,
    sign_up::SignUpPage,
};
use crate::state::{auth::AuthState, flash::FlashSlot};
use crate::util::token::{BrowserTokenStore, TokenStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Auth state is shared through context. The flash slot is handed to the
/// pages that publish or show flashes as an explicit prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let flash = RwSignal::new(FlashSlot::default());
    provide_context(auth);

    // Effects only run in the browser, where the token slot is readable.
    Effect::new(move || {
        auth.set(AuthState::loaded(BrowserTokenStore.load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/anima.css"/>
        <Title text="Anima"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("signin") view=move || view! { <SignInPage flash=flash/> }/>
                    <Route path=StaticSegment("signup") view=move || view! { <SignUpPage flash=flash/> }/>
                    <Route path=(StaticSegment("demo"), StaticSegment("items")) view=ItemsPage/>
                    <ParentRoute path=StaticSegment("home") view=HomeLayout>
                        <Route path=StaticSegment("") view=move || view! { <HomePage flash=flash/> }/>
                        <Route path=StaticSegment("account") view=move || view! { <AccountPage flash=flash/> }/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
