//! Card that tilts toward the pointer with a moving glare.

use leptos::prelude::*;

use crate::util::tilt_math::{DEFAULT_MAX_TILT_DEG, DEFAULT_PERSPECTIVE_PX, Tilt};

#[cfg(feature = "hydrate")]
use crate::util::geometry::{Point, rect_from_dom};
#[cfg(feature = "hydrate")]
use crate::util::tilt_math::tilt_angles;
#[cfg(feature = "hydrate")]
use crate::util::{dom, timers};

#[component]
pub fn TiltCard(
    #[prop(default = DEFAULT_MAX_TILT_DEG)] max_deg: f64,
    #[prop(default = DEFAULT_PERSPECTIVE_PX)] perspective_px: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let card = NodeRef::<leptos::html::Div>::new();
    let tilt = RwSignal::new(Tilt::rest());
    let hovering = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let latest_pointer = StoredValue::new(None::<Point>);

    // Coalesce pointer moves into one layout read per frame.
    let on_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if dom::prefers_reduced_motion() {
                return;
            }
            let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let frame_queued = latest_pointer.get_value().is_some();
            latest_pointer.set_value(Some(pointer));
            hovering.set(true);
            if frame_queued {
                return;
            }
            timers::animate(move |_| {
                let Some(pointer) = latest_pointer.try_update_value(Option::take).flatten() else {
                    return false;
                };
                if let Some(el) = card.get_untracked() {
                    let rect = rect_from_dom(&el.get_bounding_client_rect());
                    tilt.try_set(tilt_angles(pointer, rect, max_deg));
                }
                false
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, max_deg);
        }
    };
    let on_leave = move |_| {
        #[cfg(feature = "hydrate")]
        latest_pointer.set_value(None);
        hovering.set(false);
        tilt.set(Tilt::rest());
    };

    let card_class = move || {
        let base = if class.is_empty() { "tilt-card".to_owned() } else { format!("tilt-card {class}") };
        if hovering.get() { format!("{base} tilt-card--active") } else { base }
    };
    let card_style = move || {
        let t = tilt.get();
        format!("transform: {}; {}", t.transform(perspective_px), t.glare_style())
    };

    view! {
        <div class=card_class style=card_style node_ref=card on:pointermove=on_move on:pointerleave=on_leave>
            {children()}
            <div class="tilt-card__glare" aria-hidden="true"></div>
        </div>
    }
}
