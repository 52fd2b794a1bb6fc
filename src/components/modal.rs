//! Dialog rendered over a backdrop with a focus trap.

use leptos::prelude::*;

use crate::components::overlay::{handle_overlay_keydown, install_overlay_effects};
use crate::util::dom;

/// Modal dialog. Escape closes; so does a backdrop click when
/// `close_on_backdrop` is set.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into, optional)] title: String,
    #[prop(default = true)] close_on_backdrop: bool,
    #[prop(into, optional)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let panel = NodeRef::<leptos::html::Div>::new();
    install_overlay_effects(open, panel, on_close);

    let title_id = dom::unique_id("modal-title");
    let has_title = !title.is_empty();
    let panel_class = if class.is_empty() { "dialog".to_owned() } else { format!("dialog {class}") };

    let on_backdrop = move |_| {
        if close_on_backdrop {
            on_close.run(());
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| handle_overlay_keydown(&ev, panel, on_close);

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=has_title.then(|| title_id.clone())
                    tabindex="-1"
                    node_ref=panel
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="dialog__header">
                        {has_title.then(|| view! { <h2 id=title_id.clone()>{title.clone()}</h2> })}
                        <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close" aria-label="Close">
                            "✕"
                        </button>
                    </div>
                    <div class="dialog__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
