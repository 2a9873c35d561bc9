//! Top navigation bar.
//!
//! DESIGN
//! ======
//! The action set is picked from the current path alone (`/home...` shows the
//! signed-in actions). Logout clears the stored token right away, then an
//! effect performs the navigation so the click handler stays `Send`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{ACCOUNT_ROUTE, LANDING_ROUTE, SIGN_IN_ROUTE, SIGN_UP_ROUTE, is_authenticated_area};
use crate::util::token::{BrowserTokenStore, complete_sign_out};

const PRIMARY_LINKS: &[(&str, &str)] = &[("Home", LANDING_ROUTE), ("About", "/about"), ("Contact", "/contact")];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);
    let logged_out = RwSignal::new(None::<&'static str>);

    let in_auth_area = Memo::new(move |_| location.pathname.with(|p| is_authenticated_area(p)));

    Effect::new(move || {
        if let Some(target) = logged_out.get() {
            logged_out.set(None);
            navigate(target, NavigateOptions::default());
            auth.set(AuthState::loaded(None));
        }
    });

    let close_menu = move || menu_open.set(false);
    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        close_menu();
        let outcome = complete_sign_out(&BrowserTokenStore);
        logged_out.set(Some(outcome.target));
        let previous = outcome.previous;
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = previous {
                leptos::task::spawn_local(async move {
                    if let Err(e) = crate::net::api::log_out(&token).await {
                        log::warn!("logout request failed: {e}");
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = previous;
    };

    view! {
        <nav
            class="navbar"
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Escape" {
                    close_menu();
                }
            }
        >
            <a class="navbar__logo" href=LANDING_ROUTE on:click=move |_| close_menu()>
                "Anima"
            </a>
            <button
                class="navbar__toggle"
                type="button"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class="navbar__menu" class:navbar__menu--open=move || menu_open.get()>
                <ul class="navbar__links">
                    {PRIMARY_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a class="navbar__link" href=*href on:click=move |_| close_menu()>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="navbar__actions">
                    <Show
                        when=move || in_auth_area.get()
                        fallback=move || {
                            view! {
                                <a class="btn" href=SIGN_IN_ROUTE on:click=move |_| close_menu()>
                                    "Sign In"
                                </a>
                                <a class="btn btn--primary" href=SIGN_UP_ROUTE on:click=move |_| close_menu()>
                                    "Sign Up"
                                </a>
                            }
                        }
                    >
                        <a class="btn" href=ACCOUNT_ROUTE on:click=move |_| close_menu()>
                            "Account"
                        </a>
                        <button class="btn btn--primary" type="button" on:click=on_logout>
                            "Log off"
                        </button>
                    </Show>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__backdrop" on:click=move |_| close_menu()></div>
            </Show>
        </nav>
    }
}
