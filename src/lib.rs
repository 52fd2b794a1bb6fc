//! Presentational widgets for a trading-assistant front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds DOM-free widget models, `components` renders them with
//! Leptos, and `util` wraps the browser (storage, timers, focus, theme).
//! `app::WidgetGallery` composes every widget into one page.

pub mod app;
pub mod components;
pub mod error;
pub mod state;
pub mod util;

/// Hydrate server-rendered gallery markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser();
    leptos::mount::hydrate_body(app::WidgetGallery);
}

/// Render the gallery client-side into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    init_browser();
    leptos::mount::mount_to_body(app::WidgetGallery);
}

#[cfg(feature = "hydrate")]
fn init_browser() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}
