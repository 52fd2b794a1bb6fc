//! Theme preference initialization and cycling.
//!
//! Reads the user's preference from storage and applies a `data-theme`
//! attribute to the `<html>` element. `System` defers to the
//! `prefers-color-scheme` media query.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

const STORAGE_KEY: &str = "theme";

/// User-selected color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Next theme in the toggle order `System -> Light -> Dark -> System`.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// Whether this theme renders dark given the system preference.
    #[must_use]
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_prefers_dark,
        }
    }

    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub fn attribute(self, system_prefers_dark: bool) -> &'static str {
        if self.is_dark(system_prefers_dark) { "dark" } else { "light" }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

/// Read the stored theme, defaulting to [`Theme::System`].
pub fn read_preference() -> Theme {
    storage::load_json(STORAGE_KEY).unwrap_or_default()
}

/// Whether the browser reports a dark color-scheme preference.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    let value = theme.attribute(system_prefers_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}

/// Advance to the next theme, apply it, and persist it.
pub fn cycle(current: Theme) -> Theme {
    let next = current.cycled();
    apply(next);
    storage::save_json(STORAGE_KEY, &next);
    next
}
