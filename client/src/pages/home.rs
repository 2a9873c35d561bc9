//! Authenticated area: the `/home` layout and its index page.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::flash_banner::FlashBanner;
use crate::state::flash::FlashSlot;
use crate::util::auth::{ACCOUNT_ROUTE, RequireAuth};

/// Parent route for `/home/*`; children render only for signed-in users.
#[component]
pub fn HomeLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="home-layout">
                <Outlet/>
            </div>
        </RequireAuth>
    }
}

#[component]
pub fn HomePage(flash: RwSignal<FlashSlot>) -> impl IntoView {
    view! {
        <section class="home">
            <FlashBanner flash=flash/>
            <h1>"Home"</h1>
            <p>"You are signed in."</p>
            <a href=ACCOUNT_ROUTE>"Manage your account"</a>
        </section>
    }
}
