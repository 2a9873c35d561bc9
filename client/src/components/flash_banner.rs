//! One-shot banner for the flash slot.

use leptos::prelude::*;

use crate::state::flash::{FlashMessage, FlashSlot};

/// Takes the pending flash on mount and hides it after its duration.
#[component]
pub fn FlashBanner(flash: RwSignal<FlashSlot>) -> impl IntoView {
    let shown = RwSignal::new(flash.try_update(FlashSlot::take).flatten());

    #[cfg(feature = "hydrate")]
    {
        if let Some(duration_ms) = shown.with_untracked(|m| m.as_ref().map(|m| m.duration_ms)) {
            gloo_timers::callback::Timeout::new(duration_ms, move || {
                // The page may be gone by now.
                let _ = shown.try_set(None);
            })
            .forget();
        }
    }

    view! {
        <Show when=move || shown.with(Option::is_some)>
            <div
                class=move || shown.with(|m| m.as_ref().map(FlashMessage::css_class).unwrap_or_default())
                role="status"
            >
                <span class="flash__text">
                    {move || shown.with(|m| m.as_ref().map(|m| m.text.clone()).unwrap_or_default())}
                </span>
                <button
                    class="flash__close"
                    type="button"
                    aria-label="Dismiss"
                    on:click=move |_| shown.set(None)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
