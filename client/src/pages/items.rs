//! Items demo page. Not linked from the navbar.

use leptos::prelude::*;

use crate::components::items::{AddItemForm, ItemList};
use crate::net::types::Item;

#[component]
pub fn ItemsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<Item>::new());
    let refresh = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        refresh.track();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_items().await {
                Ok(list) => items.set(list),
                Err(e) => log::warn!("fetch items failed: {e}"),
            }
        });
    });

    let on_added = Callback::new(move |()| refresh.update(|n| *n = n.wrapping_add(1)));

    view! {
        <section class="items-page">
            <h1>"Items"</h1>
            <AddItemForm on_added=on_added/>
            <ItemList items=items/>
        </section>
    }
}
