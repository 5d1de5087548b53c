//! Dismissible error banner for failed fetches and mutations.

use leptos::prelude::*;

/// Renders `message` when set; the close button clears it. Failures never
/// crash a page, they end up here.
#[component]
pub fn Notice(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="notice notice--error">
                <span class="notice__text">{move || message.get().unwrap_or_default()}</span>
                <button class="notice__dismiss" on:click=move |_| message.set(None)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
