//! Items demo: list plus add form against the `/items` API.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use leptos::prelude::*;

use crate::net::types::Item;

/// Display line for one item: the name, plus ` - description` when present.
#[must_use]
pub fn item_label(item: &Item) -> String {
    if item.description.trim().is_empty() {
        item.name.clone()
    } else {
        format!("{} - {}", item.name, item.description)
    }
}

/// Parsed quantity field; `None` for blank or unparsable input.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Build a new item from form input.
///
/// `None` when the name is blank or a non-blank quantity is not a whole
/// number; the form then stays as typed.
#[must_use]
pub fn build_item(name: &str, description: &str, quantity: &str, id: i64) -> Option<Item> {
    let name = name.trim();
    let quantity = match quantity.trim() {
        "" => None,
        raw => Some(parse_quantity(raw)?),
    };
    if name.is_empty() {
        return None;
    }
    Some(Item { id, name: name.to_owned(), description: description.trim().to_owned(), quantity })
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[component]
pub fn ItemList(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    view! {
        <ul class="item-list">
            <For each=move || items.get() key=|item| item.id let:item>
                <li class="item-list__row">
                    <span class="item-list__label">{item_label(&item)}</span>
                    {item.quantity.map(|q| view! { <span class="item-list__qty">{format!("x{q}")}</span> })}
                </li>
            </For>
        </ul>
    }
}

/// Add form. Calls `on_added` after the server accepts the item.
#[component]
pub fn AddItemForm(on_added: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(item) = build_item(&name.get(), &description.get(), &quantity.get(), now_ms()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_item(&item).await {
                    Ok(_) => {
                        name.set(String::new());
                        description.set(String::new());
                        quantity.set(String::new());
                        on_added.run(());
                    }
                    Err(e) => log::warn!("add item failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = on_added;
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <input
                class="item-form__input"
                type="text"
                placeholder="Item name"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="item-form__input"
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <input
                class="item-form__input item-form__input--qty"
                type="number"
                min="0"
                placeholder="Qty"
                prop:value=move || quantity.get()
                on:input=move |ev| quantity.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">
                "Add Item"
            </button>
        </form>
    }
}
