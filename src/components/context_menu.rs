//! Right-click menu scoped to a target area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps an arbitrary region (a chart, a positions row) and replaces the
//! browser menu there. While open, window listeners close it on outside
//! click, scroll, or Escape and drive arrow-key navigation.

#[cfg(test)]
#[path = "context_menu_test.rs"]
mod context_menu_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::menu::{ContextMenuState, MenuItem};
use crate::util::dom;
use crate::util::geometry::Size;

#[cfg(feature = "hydrate")]
use crate::util::geometry::{Point, Rect, viewport_size};

pub const MENU_WIDTH_PX: f64 = 200.0;
const ITEM_HEIGHT_PX: f64 = 32.0;
const SEPARATOR_HEIGHT_PX: f64 = 9.0;
const MENU_PADDING_PX: f64 = 8.0;

/// Rendered size of a menu, estimated before it is in the DOM.
#[must_use]
pub fn estimated_menu_size(items: &[MenuItem]) -> Size {
    let rows: f64 = items.iter().map(|item| if item.separator { SEPARATOR_HEIGHT_PX } else { ITEM_HEIGHT_PX }).sum();
    Size::new(MENU_WIDTH_PX, rows + MENU_PADDING_PX)
}

/// Context menu over `children`. `on_select` receives the chosen item id.
#[component]
pub fn ContextMenu(items: Vec<MenuItem>, on_select: Callback<String>, children: Children) -> impl IntoView {
    let menu_size = estimated_menu_size(&items);
    let state = RwSignal::new(ContextMenuState::new(items));
    let is_open = move || state.with(|s| s.open);

    let on_contextmenu = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let viewport = Rect::from_size(viewport_size());
            state.update(|s| s.open_at(pointer, menu_size, viewport));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = menu_size;
        }
    };

    let select = move |picked: Option<String>| {
        if let Some(id) = picked {
            #[cfg(feature = "hydrate")]
            log::debug!("context menu: selected {id}");
            on_select.run(id);
        }
    };

    let click_handle = window_event_listener(leptos::ev::click, move |_| {
        if state.try_with_untracked(|s| s.open) == Some(true) {
            state.update(ContextMenuState::close);
        }
    });
    // Scrolls inside nested containers do not bubble, so listen in capture.
    let scroll_handle = dom::listen_window_capture("scroll", move || {
        if state.try_with_untracked(|s| s.open) == Some(true) {
            state.update(ContextMenuState::close);
        }
    });
    let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if state.try_with_untracked(|s| s.open) != Some(true) {
            return;
        }
        match ev.key().as_str() {
            "Escape" => state.update(ContextMenuState::close),
            "ArrowDown" => state.update(ContextMenuState::highlight_next),
            "ArrowUp" => state.update(ContextMenuState::highlight_prev),
            "Enter" => select(state.try_update(ContextMenuState::activate).flatten()),
            _ => return,
        }
        ev.prevent_default();
    });
    on_cleanup(move || {
        click_handle.remove();
        scroll_handle.remove();
        key_handle.remove();
    });

    let menu_style = move || {
        let p = state.with(|s| s.position);
        format!("position: fixed; left: {}px; top: {}px; min-width: {MENU_WIDTH_PX}px", p.x, p.y)
    };

    view! {
        <div class="context-menu-target" on:contextmenu=on_contextmenu>
            {children()}
        </div>
        <Show when=is_open>
            <ul
                class="context-menu"
                role="menu"
                style=menu_style
                on:click=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| ev.prevent_default()
            >
                {move || {
                    state.with(|s| {
                        s.items
                            .iter()
                            .enumerate()
                            .map(|(index, item)| render_item(state, index, item, s.highlighted == Some(index), select))
                            .collect_view()
                    })
                }}
            </ul>
        </Show>
    }
}

fn render_item(
    state: RwSignal<ContextMenuState>,
    index: usize,
    item: &MenuItem,
    highlighted: bool,
    select: impl Fn(Option<String>) + Copy + Send + Sync + 'static,
) -> AnyView {
    if item.separator {
        return view! { <li class="context-menu__separator" role="separator"></li> }.into_any();
    }
    let mut class = String::from("context-menu__item");
    if highlighted {
        class.push_str(" context-menu__item--highlighted");
    }
    if item.danger {
        class.push_str(" context-menu__item--danger");
    }
    if item.disabled {
        class.push_str(" context-menu__item--disabled");
    }
    let id = item.id.clone();
    view! {
        <li
            class=class
            role="menuitem"
            aria-disabled=item.disabled.to_string()
            on:mouseenter=move |_| state.update(|s| s.highlight(index))
            on:click=move |_| select(state.try_update(|s| s.activate_id(&id)).flatten())
        >
            <span class="context-menu__label">{item.label.clone()}</span>
            {item.shortcut.clone().map(|keys| view! { <kbd class="context-menu__shortcut">{keys}</kbd> })}
        </li>
    }
    .into_any()
}
