//! Browser timer and animation-frame helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auto-dismiss, debounce, hover delays, and particle loops all need the same
//! three primitives: run once later, run repeatedly until stopped, and run on
//! every animation frame until told to stop. Outside `hydrate` every helper
//! is a no-op so SSR and native tests never schedule work.
//!
//! Cancellation is cooperative. One-shot timers are guarded by a
//! [`crate::state::search::Debouncer`] ticket at the call site; repeating
//! timers are stopped through their [`Ticker`].

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Run `f` once after `ms` milliseconds.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}

/// Handle for a repeating timer started with [`every`].
///
/// `Send + Sync`, so it can move into `on_cleanup`.
#[derive(Clone, Debug)]
pub struct Ticker {
    alive: Arc<AtomicBool>,
}

impl Ticker {
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Run `f` every `ms` milliseconds until the returned [`Ticker`] is stopped.
pub fn every<F>(ms: u32, f: F) -> Ticker
where
    F: Fn() + 'static,
{
    let ticker = Ticker { alive: Arc::new(AtomicBool::new(true)) };
    #[cfg(feature = "hydrate")]
    {
        let alive = ticker.alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                f();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
    ticker
}

/// Call `step` on every animation frame with the frame timestamp until it
/// returns `false`.
///
/// Without a window `step` runs once.
pub fn animate<F>(step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let mut step = step;
        let Some(window) = web_sys::window() else {
            step(now_ms());
            return;
        };

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let window_for_cb = window.clone();
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            if !step(ts) {
                holder_for_cb.borrow_mut().take();
                return;
            }
            let scheduled = holder_for_cb
                .borrow()
                .as_ref()
                .is_some_and(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok());
            if !scheduled {
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            *holder.borrow_mut() = Some(cb);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = step;
    }
}

/// Milliseconds since the Unix epoch, or `0.0` outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
