//! Text effects: typewriter cycling and word-by-word reveal.
//!
//! Both honour `prefers-reduced-motion` by jumping straight to the final
//! text.

use leptos::prelude::*;

use crate::state::typewriter::{Phase, Typewriter, TypewriterTiming, reveal_words};
use crate::util::{dom, timers};

pub const DEFAULT_REVEAL_MS: f64 = 1_200.0;

/// Types, holds, and deletes each phrase in turn, with a blinking caret.
#[component]
pub fn TypewriterText(
    phrases: Vec<String>,
    #[prop(default = true)] looped: bool,
    #[prop(optional)] timing: TypewriterTiming,
    #[prop(default = true)] caret: bool,
) -> impl IntoView {
    let state = RwSignal::new(Typewriter::new(phrases, looped, timing));

    if dom::prefers_reduced_motion() {
        state.update(Typewriter::finish);
    } else {
        schedule_tick(state, timing.type_ms);
    }

    let text = move || state.with(|t| t.visible().to_owned());
    let finished = move || state.with(|t| t.phase() == Phase::Finished);

    view! {
        <span class="typewriter" aria-live="polite">
            <span class="typewriter__text">{text}</span>
            {caret
                .then(|| {
                    view! {
                        <span
                            class=move || if finished() { "typewriter__caret typewriter__caret--idle" } else { "typewriter__caret" }
                            aria-hidden="true"
                        >
                            "|"
                        </span>
                    }
                })}
        </span>
    }
}

/// Chain one-shot timers; the chain ends when the model finishes or the
/// component is disposed.
fn schedule_tick(state: RwSignal<Typewriter>, delay_ms: u32) {
    timers::after(delay_ms, move || {
        if let Some(Some(next)) = state.try_update(Typewriter::tick) {
            schedule_tick(state, next);
        }
    });
}

/// Reveals `text` word by word once it scrolls into view.
#[component]
pub fn RevealText(#[prop(into)] text: String, #[prop(default = DEFAULT_REVEAL_MS)] duration_ms: f64) -> impl IntoView {
    let root = NodeRef::<leptos::html::P>::new();
    let progress = RwSignal::new(0.0_f64);

    if dom::prefers_reduced_motion() {
        progress.set(1.0);
    } else {
        Effect::new(move |started: Option<bool>| {
            if started == Some(true) {
                return true;
            }
            let Some(el) = root.get() else {
                return false;
            };
            #[cfg(feature = "hydrate")]
            {
                dom::observe_visible_once(&el, move || start_reveal(progress, duration_ms));
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (el, duration_ms);
            }
            true
        });
    }

    let words = move || {
        let p = progress.get();
        reveal_words(&text, p)
            .into_iter()
            .map(|(word, shown)| {
                let class = if shown { "reveal__word reveal__word--visible" } else { "reveal__word" };
                view! { <span class=class>{word.to_owned()}</span> " " }
            })
            .collect_view()
    };

    view! { <p class="reveal" node_ref=root>{words}</p> }
}

#[cfg(feature = "hydrate")]
fn start_reveal(progress: RwSignal<f64>, duration_ms: f64) {
    let mut start: Option<f64> = None;
    timers::animate(move |ts| {
        let t0 = *start.get_or_insert(ts);
        let p = if duration_ms > 0.0 { (ts - t0) / duration_ms } else { 1.0 };
        progress.try_set(p.min(1.0)).is_none() && p < 1.0
    });
}
