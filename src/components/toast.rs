//! Toast notifications: context handle plus the rendering host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component can raise a toast through [`use_toasts`]. One [`ToastHost`]
//! per page renders the stack and owns the only expiry timer; hovering the
//! stack pauses every countdown.

use leptos::prelude::*;

use crate::state::toast::{EXIT_DELAY_MS, EXPIRE_TICK_MS, NewToast, ToastKind, ToastQueue};
use crate::util::timers;

/// Cheap, copyable handle for raising toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    /// Show `toast` and return its id.
    pub fn show(&self, toast: NewToast) -> u64 {
        let now = timers::now_ms();
        self.queue.try_update(|q| q.push(toast, now)).unwrap_or_default()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(NewToast::new(ToastKind::Success, message))
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(NewToast::new(ToastKind::Error, message))
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.show(NewToast::new(ToastKind::Warning, message))
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(NewToast::new(ToastKind::Info, message))
    }

    /// Start the exit animation for `id`, then remove it.
    pub fn dismiss(&self, id: u64) {
        if self.queue.try_update(|q| q.dismiss(id)) == Some(true) {
            schedule_removal(self.queue, id);
        }
    }

    pub fn clear(&self) {
        self.queue.update(ToastQueue::clear);
    }
}

/// Install the toast queue in context and return its handle.
pub fn provide_toasts() -> Toaster {
    let toaster = Toaster { queue: RwSignal::new(ToastQueue::default()) };
    provide_context(toaster);
    toaster
}

/// Handle installed by [`provide_toasts`].
///
/// # Panics
///
/// Panics when no ancestor called [`provide_toasts`].
pub fn use_toasts() -> Toaster {
    expect_context::<Toaster>()
}

fn schedule_removal(queue: RwSignal<ToastQueue>, id: u64) {
    timers::after(EXIT_DELAY_MS, move || {
        queue.try_update(|q| q.remove(id));
    });
}

/// Renders the toast stack and expires toasts on a shared interval.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toasts();
    let queue = toaster.queue;

    let ticker = timers::every(EXPIRE_TICK_MS, move || {
        let now = timers::now_ms();
        // Most ticks expire nothing; only notify subscribers when one did.
        let Some(expired) = queue.try_update_untracked(|q| q.expire(now)) else {
            return;
        };
        if expired.is_empty() {
            return;
        }
        queue.notify();
        for id in expired {
            schedule_removal(queue, id);
        }
    });
    on_cleanup(move || ticker.stop());

    let on_enter = move |_| queue.update(|q| q.pause(timers::now_ms()));
    let on_leave = move |_| queue.update(|q| q.resume(timers::now_ms()));

    view! {
        <div class="toast-stack" on:mouseenter=on_enter on:mouseleave=on_leave>
            <For each=move || queue.get().toasts key=|t| (t.id, t.dismissing) let:toast>
                {
                    let id = toast.id;
                    let kind = toast.kind;
                    let class = if toast.dismissing {
                        format!("toast toast--{} toast--leaving", kind.modifier())
                    } else {
                        format!("toast toast--{}", kind.modifier())
                    };
                    let role = if kind == ToastKind::Error { "alert" } else { "status" };
                    view! {
                        <div class=class role=role aria-live=kind.aria_live()>
                            <span class="toast__icon" aria-hidden="true">{kind.icon()}</span>
                            <div class="toast__content">
                                {toast.title.map(|title| view! { <div class="toast__title">{title}</div> })}
                                <div class="toast__message">{toast.message}</div>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
