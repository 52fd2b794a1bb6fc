//! Debounced search input.

use leptos::prelude::*;

use crate::state::search::{DEFAULT_DEBOUNCE_MS, Debouncer};
use crate::util::timers;

/// Text input that emits `on_search` once typing pauses for `debounce_ms`.
/// Enter emits immediately; Escape clears.
#[component]
pub fn SearchBox(
    on_search: Callback<String>,
    #[prop(into, optional)] placeholder: String,
    #[prop(default = DEFAULT_DEBOUNCE_MS)] debounce_ms: u32,
    #[prop(into, optional)] label: String,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let gate = StoredValue::new(Debouncer::default());

    let emit_now = move |value: String| {
        gate.update_value(Debouncer::cancel);
        on_search.run(value);
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        let mut ticket = 0;
        gate.update_value(|d| ticket = d.schedule());
        timers::after(debounce_ms, move || {
            if gate.try_with_value(|d| d.is_current(ticket)) == Some(true) {
                on_search.run(value);
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            if !query.get_untracked().is_empty() {
                ev.prevent_default();
                ev.stop_propagation();
                query.set(String::new());
                emit_now(String::new());
            }
        }
        "Enter" => {
            ev.prevent_default();
            emit_now(query.get_untracked());
        }
        _ => {}
    };

    let on_clear = move |_| {
        query.set(String::new());
        emit_now(String::new());
    };

    let aria_label = if label.is_empty() { placeholder.clone() } else { label };

    view! {
        <div class="search-box">
            <input
                class="search-box__input"
                type="search"
                placeholder=placeholder
                aria-label=aria_label
                autocomplete="off"
                prop:value=move || query.get()
                on:input=on_input
                on:keydown=on_keydown
            />
            <Show when=move || !query.with(String::is_empty)>
                <button class="search-box__clear" on:click=on_clear aria-label="Clear search">
                    "✕"
                </button>
            </Show>
        </div>
    }
}
