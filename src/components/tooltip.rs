//! Hover/focus tooltip with delayed open and viewport-aware placement.

use leptos::prelude::*;

use crate::state::search::Debouncer;
use crate::state::tooltip::{DEFAULT_GAP_PX, DEFAULT_OPEN_DELAY_MS, Placement};
use crate::util::dom;
use crate::util::geometry::Point;

#[cfg(feature = "hydrate")]
use crate::state::tooltip::place_tooltip;
#[cfg(feature = "hydrate")]
use crate::util::geometry::{Rect, Size, rect_from_dom, viewport_size};
#[cfg(feature = "hydrate")]
use crate::util::timers;

/// Tooltip attached to `children`. Opens after `open_delay_ms` of hover or
/// immediately on focus; closes on leave, blur, or Escape.
#[component]
pub fn Tooltip(
    #[prop(into)] text: Signal<String>,
    #[prop(optional)] placement: Placement,
    #[prop(default = DEFAULT_OPEN_DELAY_MS)] open_delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let anchor_ref = NodeRef::<leptos::html::Span>::new();
    let tip_ref = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);
    let layout = RwSignal::new((placement, Point::default()));
    let gate = StoredValue::new(Debouncer::default());
    let tip_id = dom::unique_id("tooltip");

    let show = move || {
        #[cfg(feature = "hydrate")]
        {
            let (Some(anchor), Some(tip)) = (anchor_ref.get_untracked(), tip_ref.get_untracked()) else {
                return;
            };
            let anchor = rect_from_dom(&anchor.get_bounding_client_rect());
            let tip_rect = tip.get_bounding_client_rect();
            let tip = Size::new(tip_rect.width(), tip_rect.height());
            let viewport = Rect::from_size(viewport_size());
            layout.set(place_tooltip(anchor, tip, viewport, placement, DEFAULT_GAP_PX));
        }
        visible.set(true);
    };
    let hide = move || {
        gate.update_value(Debouncer::cancel);
        visible.set(false);
    };

    let on_enter = move |_| {
        let mut ticket = 0;
        gate.update_value(|d| ticket = d.schedule());
        #[cfg(feature = "hydrate")]
        {
            timers::after(open_delay_ms, move || {
                if gate.try_with_value(|d| d.is_current(ticket)) == Some(true) {
                    show();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, open_delay_ms);
        }
    };
    let on_focus = move |_| {
        gate.update_value(Debouncer::cancel);
        show();
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && visible.get_untracked() {
            hide();
        }
    };

    let tip_class = move || {
        let (side, _) = layout.get();
        let state = if visible.get() { " tooltip--visible" } else { "" };
        format!("tooltip tooltip--{}{state}", side.modifier())
    };
    let tip_style = move || {
        let (_, at) = layout.get();
        format!("position: fixed; left: {}px; top: {}px", at.x, at.y)
    };

    view! {
        <span
            class="tooltip-anchor"
            node_ref=anchor_ref
            aria-describedby=tip_id.clone()
            on:mouseenter=on_enter
            on:mouseleave=move |_| hide()
            on:focusin=on_focus
            on:focusout=move |_| hide()
            on:keydown=on_keydown
        >
            {children()}
        </span>
        <div
            class=tip_class
            id=tip_id
            role="tooltip"
            style=tip_style
            aria-hidden=move || (!visible.get()).to_string()
            node_ref=tip_ref
        >
            {move || text.get()}
        </div>
    }
}
