//! Fixed-row-height virtualized list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Watchlists and order books can hold thousands of rows. Only rows inside
//! the viewport (plus overscan) are in the DOM; a spacer keeps the scrollbar
//! honest. Scroll events are coalesced to one range update per frame.

use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;

use crate::state::virtual_list::{DEFAULT_OVERSCAN, scroll_top_for_index, visible_range};

/// Virtualized list over `items`. `row` renders one item given its index.
/// When `scroll_to` changes to `Some(index)`, the list scrolls just enough to
/// show that row.
#[component]
pub fn VirtualList<T>(
    #[prop(into)] items: Signal<Vec<T>>,
    item_height: f64,
    height: f64,
    row: Callback<(usize, T), AnyView>,
    #[prop(default = DEFAULT_OVERSCAN)] overscan: usize,
    #[prop(into, optional)] scroll_to: Option<Signal<Option<usize>>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let viewport = NodeRef::<leptos::html::Div>::new();
    let scroll_top = RwSignal::new(0.0_f64);
    let frame_pending = StoredValue::new(false);

    let range = Memo::new(move |_| {
        let count = items.with(Vec::len);
        visible_range(count, item_height, height, scroll_top.get(), overscan)
    });

    let on_scroll = move |_| {
        if frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        #[cfg(feature = "hydrate")]
        {
            crate::util::timers::animate(move |_| {
                frame_pending.try_update_value(|pending| *pending = false);
                if let Some(el) = viewport.get_untracked() {
                    scroll_top.try_set(f64::from(el.scroll_top()));
                }
                false
            });
        }
    };

    if let Some(target) = scroll_to {
        Effect::new(move |_| {
            let Some(index) = target.get() else {
                return;
            };
            let Some(el) = viewport.get_untracked() else {
                return;
            };
            let current = f64::from(el.scroll_top());
            let next = scroll_top_for_index(index, item_height, height, current);
            if (next - current).abs() > f64::EPSILON {
                #[allow(clippy::cast_possible_truncation)]
                el.set_scroll_top(next.round() as i32);
                scroll_top.set(next);
            }
        });
    }

    let rows = move || {
        let r = range.get();
        items.with(|all| {
            all.get(r.start..r.end)
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(offset, item)| {
                    let index = r.start + offset;
                    view! {
                        <div class="virtual-list__row" role="listitem" style=format!("height: {item_height}px")>
                            {row.run((index, item.clone()))}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            class="virtual-list"
            role="list"
            node_ref=viewport
            style=format!("height: {height}px; overflow-y: auto; position: relative")
            on:scroll=on_scroll
        >
            <div class="virtual-list__spacer" style=move || format!("height: {}px; position: relative", range.get().total_height)>
                <div
                    class="virtual-list__window"
                    style=move || format!("position: absolute; left: 0; right: 0; transform: translateY({}px)", range.get().offset_top)
                >
                    {rows}
                </div>
            </div>
        </div>
    }
}
