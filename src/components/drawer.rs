//! Side panel sliding in from a viewport edge.
//!
//! Shares the modal's overlay wiring: backdrop, Escape, focus trap, and
//! scroll lock. The panel stays mounted while closed so the slide-out
//! transition can play; it is `inert` and hidden then, out of the tab order.

use leptos::prelude::*;

use crate::components::overlay::{handle_overlay_keydown, install_overlay_effects};
use crate::state::overlay::{DEFAULT_DRAWER_SIZE_PX, DrawerSide, DrawerState};

/// Drawer panel driven by `open`.
#[component]
pub fn Drawer(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] side: DrawerSide,
    #[prop(default = DEFAULT_DRAWER_SIZE_PX)] size_px: f64,
    #[prop(into, optional)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let panel = NodeRef::<leptos::html::Div>::new();
    install_overlay_effects(open, panel, on_close);

    let panel_class = move || {
        let state = if open.get() { " drawer--open" } else { "" };
        format!("drawer drawer--{}{state}", side.modifier())
    };
    let panel_style = move || DrawerState { open: open.get(), side, size_px }.panel_style();
    let backdrop_class = move || if open.get() { "drawer-backdrop drawer-backdrop--visible" } else { "drawer-backdrop" };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| handle_overlay_keydown(&ev, panel, on_close);

    view! {
        <div class=backdrop_class on:click=move |_| on_close.run(()) aria-hidden="true"></div>
        <div
            class=panel_class
            style=panel_style
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!open.get()).to_string()
            inert=move || !open.get()
            aria-label=title.clone()
            tabindex="-1"
            node_ref=panel
            on:keydown=on_keydown
        >
            <div class="drawer__header">
                <span class="drawer__title">{title.clone()}</span>
                <button class="drawer__close" on:click=move |_| on_close.run(()) title="Close" aria-label="Close">
                    "✕"
                </button>
            </div>
            <div class="drawer__body">{children()}</div>
        </div>
    }
}
