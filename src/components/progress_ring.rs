//! Circular SVG progress indicator.

use leptos::prelude::*;

use crate::util::ring_math::{
    DEFAULT_RING_SIZE, DEFAULT_RING_STROKE, DEFAULT_TONE_THRESHOLDS, INDETERMINATE_ARC_PERCENT, percent_label,
    ring_geometry, tone_for_percent,
};

/// Progress ring. `indeterminate` draws a spinning fixed arc instead of
/// `percent`.
#[component]
pub fn ProgressRing(
    #[prop(into)] percent: Signal<f64>,
    #[prop(default = DEFAULT_RING_SIZE)] size: f64,
    #[prop(default = DEFAULT_RING_STROKE)] stroke: f64,
    #[prop(default = DEFAULT_TONE_THRESHOLDS)] thresholds: (f64, f64),
    #[prop(optional)] indeterminate: bool,
    #[prop(default = true)] show_label: bool,
    #[prop(into, optional)] label: String,
) -> impl IntoView {
    let geometry = Memo::new(move |_| {
        let drawn = if indeterminate { INDETERMINATE_ARC_PERCENT } else { percent.get() };
        ring_geometry(size, stroke, drawn)
    });
    let center = size / 2.0;
    let class = move || {
        let tone = tone_for_percent(percent.get(), thresholds);
        let spin = if indeterminate { " progress-ring--spinning" } else { "" };
        format!("progress-ring progress-ring--{}{spin}", tone.modifier())
    };
    let value_now = move || (!indeterminate).then(|| geometry.get().percent.round().to_string());

    view! {
        <div
            class=class
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=value_now
            aria-label=label
            style=format!("width: {size}px; height: {size}px")
        >
            <svg width=size.to_string() height=size.to_string() viewBox=format!("0 0 {size} {size}")>
                <circle
                    class="progress-ring__track"
                    cx=center.to_string()
                    cy=center.to_string()
                    r=move || geometry.get().radius.to_string()
                    fill="none"
                    stroke-width=stroke.to_string()
                />
                <circle
                    class="progress-ring__arc"
                    cx=center.to_string()
                    cy=center.to_string()
                    r=move || geometry.get().radius.to_string()
                    fill="none"
                    stroke-width=stroke.to_string()
                    stroke-linecap="round"
                    stroke-dasharray=move || geometry.get().circumference.to_string()
                    stroke-dashoffset=move || geometry.get().dash_offset.to_string()
                    transform=format!("rotate(-90 {center} {center})")
                />
            </svg>
            {(show_label && !indeterminate)
                .then(|| view! { <span class="progress-ring__label">{move || percent_label(percent.get())}</span> })}
        </div>
    }
}
