//! Collapsible sections with optional persisted expansion.

use leptos::prelude::*;

use crate::state::accordion::AccordionState;
use crate::util::{dom, storage};

/// One section of an [`Accordion`].
#[derive(Clone)]
pub struct AccordionItem {
    pub id: String,
    pub title: String,
    pub content: ViewFn,
}

impl AccordionItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self { id: id.into(), title: title.into(), content: content.into() }
    }
}

/// Accordion. With `storage_key`, expanded ids survive reloads.
#[component]
pub fn Accordion(
    items: Vec<AccordionItem>,
    #[prop(optional)] allow_multiple: bool,
    #[prop(optional)] default_open: Vec<String>,
    #[prop(optional, into)] storage_key: Option<String>,
) -> impl IntoView {
    let mut initial = AccordionState::new(allow_multiple);
    let restored = storage_key.as_deref().and_then(storage::load_json::<Vec<String>>);
    initial.restore(restored.unwrap_or(default_open));
    let state = RwSignal::new(initial);
    let storage_key = StoredValue::new(storage_key);

    let persist = move || {
        storage_key.with_value(|key| {
            if let Some(key) = key {
                state.with_untracked(|s| storage::save_json(key, &s.expanded()));
            }
        });
    };

    let ids: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
    let ids = StoredValue::new(ids);
    let on_expand_all = move |_| {
        ids.with_value(|ids| state.update(|s| s.expand_all(ids.iter().map(String::as_str))));
        persist();
    };
    let on_collapse_all = move |_| {
        state.update(AccordionState::collapse_all);
        persist();
    };

    let sections = items
        .into_iter()
        .map(|item| {
            let AccordionItem { id, title, content } = item;
            let panel_id = dom::unique_id("accordion-panel");
            let header_id = dom::unique_id("accordion-header");
            let id = StoredValue::new(id);
            let is_open = move || id.with_value(|id| state.with(|s| s.is_open(id)));
            let on_toggle = move |_| {
                id.with_value(|id| state.update(|s| s.toggle(id)));
                persist();
            };
            let item_class = move || if is_open() { "accordion__item accordion__item--open" } else { "accordion__item" };

            view! {
                <div class=item_class>
                    <button
                        class="accordion__header"
                        id=header_id.clone()
                        aria-expanded=move || is_open().to_string()
                        aria-controls=panel_id.clone()
                        on:click=on_toggle
                    >
                        <span class="accordion__title">{title}</span>
                        <span class="accordion__chevron" aria-hidden="true">"▾"</span>
                    </button>
                    <div class="accordion__panel" id=panel_id role="region" aria-labelledby=header_id hidden=move || !is_open()>
                        <Show when=is_open>{content.run()}</Show>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="accordion">
            <Show when=move || allow_multiple>
                <div class="accordion__toolbar">
                    <button class="accordion__action" on:click=on_expand_all>"Expand all"</button>
                    <button class="accordion__action" on:click=on_collapse_all>"Collapse all"</button>
                </div>
            </Show>
            {sections}
        </div>
    }
}
