//! Shared wiring for focus-trapping overlays (modal, drawer).
//!
//! SYSTEM CONTEXT
//! ==============
//! Overlays open and close from a `Signal<bool>` owned by the caller. On open
//! they remember the focused element, lock body scroll, and move focus inside
//! the panel; on close they undo all three. Escape and Tab handling is shared
//! through [`handle_overlay_keydown`] on the panel, plus a window listener for
//! presses made while focus sits outside it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::overlay::{StrayKey, stray_key_action};
use crate::util::dom;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::util::timers;

/// Install open/close side effects for an overlay panel.
pub fn install_overlay_effects(open: Signal<bool>, panel: NodeRef<leptos::html::Div>, on_close: Callback<()>) {
    let locked = Arc::new(AtomicBool::new(false));

    #[cfg(feature = "hydrate")]
    {
        let locked = locked.clone();
        let previous_focus: Rc<RefCell<Option<web_sys::HtmlElement>>> = Rc::new(RefCell::new(None));
        Effect::new(move |prev: Option<bool>| {
            let now_open = open.get();
            let was_open = prev.unwrap_or(false);
            if now_open && !was_open {
                *previous_focus.borrow_mut() = dom::active_element();
                if !locked.swap(true, Ordering::Relaxed) {
                    dom::lock_scroll();
                }
                // The panel mounts in the same tick; focus once it exists.
                timers::after(0, move || {
                    if let Some(el) = panel.get_untracked() {
                        dom::focus_first(&el);
                    }
                });
            } else if !now_open && was_open {
                if locked.swap(false, Ordering::Relaxed) {
                    dom::unlock_scroll();
                }
                if let Some(el) = previous_focus.borrow_mut().take() {
                    let _ = el.focus();
                }
            }
            now_open
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (open, panel);
    }

    let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if open.try_get_untracked() != Some(true) {
            return;
        }
        #[cfg(feature = "hydrate")]
        let focus_inside = panel.get_untracked().is_some_and(|el| dom::event_inside(&el, &ev));
        #[cfg(not(feature = "hydrate"))]
        let focus_inside = false;
        match stray_key_action(&ev.key(), focus_inside) {
            Some(StrayKey::Close) => {
                ev.prevent_default();
                on_close.run(());
            }
            Some(StrayKey::Refocus) => {
                ev.prevent_default();
                #[cfg(feature = "hydrate")]
                {
                    if let Some(el) = panel.get_untracked()
                        && !dom::trap_tab(&el, ev.shift_key())
                    {
                        dom::focus_first(&el);
                    }
                }
            }
            None => {}
        }
    });

    on_cleanup(move || {
        key_handle.remove();
        if locked.swap(false, Ordering::Relaxed) {
            dom::unlock_scroll();
        }
    });
}

/// Escape closes; Tab and Shift+Tab cycle focus inside `panel`.
pub fn handle_overlay_keydown(ev: &leptos::ev::KeyboardEvent, panel: NodeRef<leptos::html::Div>, on_close: Callback<()>) {
    match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            ev.stop_propagation();
            on_close.run(());
        }
        "Tab" => {
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = panel.get_untracked()
                    && dom::trap_tab(&el, ev.shift_key())
                {
                    ev.prevent_default();
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = panel;
            }
        }
        _ => {}
    }
}
