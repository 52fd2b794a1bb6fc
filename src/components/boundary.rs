//! Fallback rendering for widgets whose content fails to load.
//!
//! Children that evaluate to `Err(_)` are replaced by a compact notice instead
//! of breaking the surrounding page. The first failure is logged.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use leptos::prelude::*;

/// Notice shown in place of a failed widget.
#[must_use]
pub fn fallback_message(name: &str, errors: &[String]) -> String {
    match errors {
        [] => format!("{name} is unavailable."),
        [only] => format!("{name} is unavailable: {only}"),
        [first, rest @ ..] => format!("{name} is unavailable: {first} (+{} more)", rest.len()),
    }
}

/// Error boundary with a named, styled fallback.
#[component]
pub fn WidgetBoundary(#[prop(into)] name: String, children: Children) -> impl IntoView {
    let fallback = move |errors: ArcRwSignal<Errors>| {
        let name = name.clone();
        view! {
            <div class="widget-fallback" role="alert">
                {move || {
                    let messages: Vec<String> = errors.with(|errs| errs.iter().map(|(_, e)| e.to_string()).collect());
                    #[cfg(feature = "hydrate")]
                    {
                        if let Some(first) = messages.first() {
                            log::warn!("boundary: {name} failed: {first}");
                        }
                    }
                    fallback_message(&name, &messages)
                }}
            </div>
        }
    };

    view! { <ErrorBoundary fallback=fallback>{children()}</ErrorBoundary> }
}
