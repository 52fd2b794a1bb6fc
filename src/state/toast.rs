//! Toast notification queue with auto-dismiss timers.
//!
//! DESIGN
//! ======
//! The queue never reads a clock; callers pass `now_ms`. A single host
//! interval calls [`ToastQueue::expire`], which keeps every toast on one
//! timer instead of one browser timeout per toast, and makes pausing on hover
//! a bookkeeping change rather than a timer cancellation.
//!
//! Dismissal is two-phase: `dismissing` first (exit animation), then
//! [`ToastQueue::remove`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const DEFAULT_MAX_VISIBLE: usize = 5;
/// Delay between `dismissing` and removal, long enough for the exit animation.
pub const EXIT_DELAY_MS: u32 = 250;
/// Interval at which the host checks for expired toasts.
pub const EXPIRE_TICK_MS: u32 = 100;

/// Severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Auto-dismiss delay. Errors linger longest so they can be read.
    #[must_use]
    pub fn default_duration_ms(self) -> f64 {
        match self {
            Self::Success | Self::Info => 4_000.0,
            Self::Warning => 6_000.0,
            Self::Error => 8_000.0,
        }
    }

    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }

    /// ARIA live-region politeness: errors interrupt, the rest wait.
    #[must_use]
    pub fn aria_live(self) -> &'static str {
        if self == Self::Error { "assertive" } else { "polite" }
    }
}

/// Request to show a toast.
#[derive(Clone, Debug, PartialEq)]
pub struct NewToast {
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    /// Lifetime in ms; `None` keeps the toast until dismissed.
    pub duration_ms: Option<f64>,
}

impl NewToast {
    #[must_use]
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self { kind, title: None, message: message.into(), duration_ms: Some(kind.default_duration_ms()) }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms.max(0.0));
        self
    }

    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.duration_ms = None;
        self
    }
}

/// A toast currently in the stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    pub created_ms: f64,
    pub duration_ms: Option<f64>,
    /// Lifetime left as of `timer_started_ms`.
    remaining_ms: Option<f64>,
    timer_started_ms: f64,
    pub dismissing: bool,
}

impl Toast {
    fn remaining_at(&self, now_ms: f64) -> Option<f64> {
        let remaining = self.remaining_ms?;
        Some(remaining - (now_ms - self.timer_started_ms).max(0.0))
    }
}

/// Ordered toast stack, oldest first.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    pub max_visible: usize,
    paused: bool,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self { toasts: Vec::new(), max_visible: DEFAULT_MAX_VISIBLE, paused: false, next_id: 0 }
    }
}

impl ToastQueue {
    #[must_use]
    pub fn with_max_visible(max_visible: usize) -> Self {
        Self { max_visible: max_visible.max(1), ..Self::default() }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Show a toast and return its id. Evicts the oldest toasts past
    /// `max_visible`.
    pub fn push(&mut self, toast: NewToast, now_ms: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind: toast.kind,
            title: toast.title,
            message: toast.message,
            created_ms: now_ms,
            duration_ms: toast.duration_ms,
            remaining_ms: toast.duration_ms,
            timer_started_ms: now_ms,
            dismissing: false,
        });
        let overflow = self.toasts.len().saturating_sub(self.max_visible);
        if overflow > 0 {
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Begin the exit animation for `id`. Returns `false` for unknown or
    /// already-dismissing toasts.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id && !t.dismissing) {
            Some(toast) => {
                toast.dismissing = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Mark every toast whose lifetime has elapsed as dismissing and return
    /// their ids. Nothing expires while paused.
    pub fn expire(&mut self, now_ms: f64) -> Vec<u64> {
        if self.paused {
            return Vec::new();
        }
        let mut expired = Vec::new();
        for toast in &mut self.toasts {
            if toast.dismissing {
                continue;
            }
            if toast.remaining_at(now_ms).is_some_and(|left| left <= 0.0) {
                toast.dismissing = true;
                expired.push(toast.id);
            }
        }
        expired
    }

    /// Freeze every countdown (pointer entered the stack).
    pub fn pause(&mut self, now_ms: f64) {
        if self.paused {
            return;
        }
        for toast in &mut self.toasts {
            toast.remaining_ms = toast.remaining_at(now_ms);
            toast.timer_started_ms = now_ms;
        }
        self.paused = true;
    }

    /// Restart every countdown from where [`Self::pause`] left it.
    pub fn resume(&mut self, now_ms: f64) {
        if !self.paused {
            return;
        }
        for toast in &mut self.toasts {
            toast.timer_started_ms = now_ms;
        }
        self.paused = false;
    }
}
