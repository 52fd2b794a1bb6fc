//! Press-feedback button with ripple and optional particle burst.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primary action control across the trading UI (place order, confirm,
//! cancel). Ripples are removed by one-shot timers; particle bursts run on an
//! animation-frame loop that stops itself once every particle has faded.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use crate::state::effects::{DEFAULT_PARTICLE_COUNT, DEFAULT_PARTICLE_SPEED, DEFAULT_RIPPLE_MS, ParticleBurst, RippleState};

#[cfg(feature = "hydrate")]
use crate::util::geometry::{Point, rect_from_dom};
#[cfg(feature = "hydrate")]
use crate::util::timers;

/// Visual emphasis of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// CSS class list for a button in the given state.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, loading: bool, disabled: bool) -> String {
    let mut class = format!("btn btn--{} btn--{}", variant.modifier(), size.modifier());
    if loading {
        class.push_str(" btn--loading");
    }
    if disabled {
        class.push_str(" btn--disabled");
    }
    class
}

/// Button that draws a ripple from the press point. With `particles` set, a
/// click also fires a radial particle burst.
#[component]
pub fn RippleButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    #[prop(default = DEFAULT_RIPPLE_MS)] ripple_ms: u32,
    #[prop(optional)] particles: bool,
    #[prop(default = DEFAULT_PARTICLE_COUNT)] particle_count: usize,
    #[prop(into, optional)] title: String,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_ref = NodeRef::<leptos::html::Button>::new();
    let ripples = RwSignal::new(RippleState::default());
    let burst = RwSignal::new(ParticleBurst::default());
    let inert = move || disabled.get() || loading.get();

    let on_pointerdown = move |ev: leptos::ev::PointerEvent| {
        if inert() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = button_ref.get_untracked() else {
                return;
            };
            let rect = rect_from_dom(&el.get_bounding_client_rect());
            let ripple = ripples
                .try_update(|r| r.spawn(f64::from(ev.client_x()), f64::from(ev.client_y()), rect));
            if let Some(ripple) = ripple {
                timers::after(ripple_ms, move || {
                    ripples.try_update(|r| r.remove(ripple.id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, ripple_ms);
        }
    };

    let on_button_click = move |ev: leptos::ev::MouseEvent| {
        if inert() {
            ev.prevent_default();
            return;
        }
        if particles {
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = button_ref.get_untracked() {
                    let rect = rect_from_dom(&el.get_bounding_client_rect());
                    let origin = Point::new(f64::from(ev.client_x()) - rect.x, f64::from(ev.client_y()) - rect.y);
                    let was_idle = burst.try_update(|b| {
                        let idle = b.is_finished();
                        b.burst(origin, particle_count, DEFAULT_PARTICLE_SPEED);
                        idle
                    });
                    if was_idle == Some(true) {
                        run_burst(burst);
                    }
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = particle_count;
            }
        }
        if let Some(cb) = on_click {
            cb.run(ev);
        }
    };

    let class = move || button_class(variant, size, loading.get(), disabled.get());

    view! {
        <button
            class=class
            node_ref=button_ref
            disabled=move || disabled.get()
            aria-busy=move || loading.get().to_string()
            title=title
            on:pointerdown=on_pointerdown
            on:click=on_button_click
        >
            <span class="btn__label">{children()}</span>
            <Show when=move || loading.get()>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            <span class="btn__ripples" aria-hidden="true">
                <For each=move || ripples.get().ripples key=|r| r.id let:ripple>
                    <span class="btn__ripple" style=ripple.style()></span>
                </For>
            </span>
            <span class="btn__particles" aria-hidden="true">
                {move || {
                    burst
                        .get()
                        .particles
                        .iter()
                        .map(|p| view! { <span class="btn__particle" style=p.style()></span> })
                        .collect_view()
                }}
            </span>
        </button>
    }
}

/// Step `burst` every animation frame until it finishes or the button is
/// disposed.
#[cfg(feature = "hydrate")]
fn run_burst(burst: RwSignal<ParticleBurst>) {
    let mut last_ts: Option<f64> = None;
    timers::animate(move |ts| {
        let dt = last_ts.map_or(0.0, |prev| ts - prev);
        last_ts = Some(ts);
        burst
            .try_update(|b| {
                b.step(dt);
                !b.is_finished()
            })
            .unwrap_or(false)
    });
}
