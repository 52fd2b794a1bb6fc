//! DOM glue for focus management, scroll locking, and keyboard targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Overlay widgets (modal, drawer, shortcut help) share these helpers so the
//! focus trap and body scroll lock behave identically everywhere. The
//! decisions themselves live in `state::overlay`; this module only applies
//! them to the document.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::overlay::{ScrollLock, next_focus_index};

/// Elements that take keyboard focus inside an overlay.
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[cfg(feature = "hydrate")]
thread_local! {
    static SCROLL_LOCK: RefCell<ScrollLock> = RefCell::new(ScrollLock::default());
}

/// Document-unique element id such as `tooltip-7`, for ARIA references.
#[must_use]
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Whether the user asked the OS to minimize motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Whether a key event from an element with this tag should be left to the
/// element instead of global shortcuts.
#[must_use]
pub fn is_editable_tag(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || matches!(
            tag_name.to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT"
        )
}

/// Whether `ev` originated in a text-entry element.
#[cfg(feature = "hydrate")]
pub fn event_in_editable(ev: &web_sys::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        .is_some_and(|el| is_editable_tag(&el.tag_name(), el.is_content_editable()))
}

/// Whether `ev` was dispatched at `root` or one of its descendants.
#[cfg(feature = "hydrate")]
pub fn event_inside(root: &web_sys::Element, ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

/// Focusable descendants of `root` in document order.
#[cfg(feature = "hydrate")]
pub fn focusable_elements(root: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// The element that currently has focus, if it is an HTML element.
#[cfg(feature = "hydrate")]
pub fn active_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.active_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Move focus to the first focusable descendant of `root`, or to `root`.
#[cfg(feature = "hydrate")]
pub fn focus_first(root: &web_sys::HtmlElement) {
    let target = focusable_elements(root).into_iter().next();
    let _ = target.as_ref().unwrap_or(root).focus();
}

/// Cycle focus inside `root` for a Tab press. Returns `true` when focus moved
/// and the browser default should be suppressed.
#[cfg(feature = "hydrate")]
pub fn trap_tab(root: &web_sys::Element, backwards: bool) -> bool {
    let items = focusable_elements(root);
    let current = active_element().and_then(|active| {
        let active: &web_sys::Node = active.as_ref();
        items.iter().position(|el| el.is_same_node(Some(active)))
    });
    let Some(next) = next_focus_index(items.len(), current, backwards) else {
        return false;
    };
    items[next].focus().is_ok()
}

/// Handle for a listener installed by [`listen_window_capture`].
///
/// `Send + Sync`, so it can move into `on_cleanup`.
#[derive(Clone, Debug)]
pub struct CaptureListener {
    active: Arc<AtomicBool>,
}

impl CaptureListener {
    /// Stop delivering events to the handler.
    pub fn remove(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

/// Listen for `event` on the window during the capture phase.
///
/// Capture also sees events that do not bubble, such as `scroll` inside a
/// nested container.
pub fn listen_window_capture<F>(event: &'static str, handler: F) -> CaptureListener
where
    F: FnMut() + 'static,
{
    let listener = CaptureListener { active: Arc::new(AtomicBool::new(true)) };
    #[cfg(feature = "hydrate")]
    {
        let mut handler = handler;
        let active = listener.active.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if active.load(Ordering::Relaxed) {
                handler();
            }
        });
        let added = web_sys::window().is_some_and(|w| {
            w.add_event_listener_with_callback_and_bool(event, callback.as_ref().unchecked_ref(), true)
                .is_ok()
        });
        if added {
            callback.forget();
        } else {
            log::warn!("dom: failed to add capture listener for {event}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event, handler);
    }
    listener
}

/// Take one reference on the body scroll lock.
pub fn lock_scroll() {
    #[cfg(feature = "hydrate")]
    {
        if SCROLL_LOCK.with(|lock| lock.borrow_mut().acquire()) {
            set_body_overflow(Some("hidden"));
        }
    }
}

/// Release one reference on the body scroll lock.
pub fn unlock_scroll() {
    #[cfg(feature = "hydrate")]
    {
        if SCROLL_LOCK.with(|lock| lock.borrow_mut().release()) {
            set_body_overflow(None);
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = match value {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if result.is_err() {
        log::warn!("dom: failed to update body overflow");
    }
}

/// Call `on_visible` once, the first time `el` intersects the viewport.
///
/// Runs it immediately when `IntersectionObserver` is unavailable.
#[cfg(feature = "hydrate")]
pub fn observe_visible_once<F>(el: &web_sys::Element, on_visible: F)
where
    F: FnOnce() + 'static,
{
    let pending = Rc::new(RefCell::new(Some(on_visible)));
    let pending_for_cb = Rc::clone(&pending);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .is_ok_and(|entry| entry.is_intersecting())
            });
            if !hit {
                return;
            }
            observer.disconnect();
            if let Some(f) = pending_for_cb.borrow_mut().take() {
                f();
            }
        },
    );

    match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(el);
            callback.forget();
        }
        Err(_) => {
            log::debug!("dom: IntersectionObserver unavailable, revealing immediately");
            if let Some(f) = pending.borrow_mut().take() {
                f();
            }
        }
    }
}
