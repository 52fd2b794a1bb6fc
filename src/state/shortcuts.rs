//! Keyboard shortcut registry and discovery tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page code registers its shortcuts once; the global key listener matches
//! incoming chords here, and the help modal renders [`ShortcutRegistry::grouped`].
//! Shortcuts the user has actually used are remembered so the UI can hint at
//! the ones they have not discovered yet.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

use std::collections::BTreeSet;

use crate::state::search::match_rank;

/// Error returned when registering or parsing a shortcut.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("empty key chord")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("chord `{chord}` is already bound to `{existing}`")]
    Conflict { chord: String, existing: String },
    #[error("shortcut id `{0}` is already registered")]
    DuplicateId(String),
}

/// Keyboard family, which decides what `Mod` means and how chords display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    Mac,
    #[default]
    Other,
}

impl Platform {
    /// Detect from the browser's user agent; `Other` outside the browser.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let ua = web_sys::window()
                .and_then(|w| w.navigator().user_agent().ok())
                .unwrap_or_default();
            Self::from_user_agent(&ua)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Other
        }
    }

    #[must_use]
    pub fn from_user_agent(ua: &str) -> Self {
        if ua.contains("Mac OS") || ua.contains("Macintosh") || ua.contains("iPhone") || ua.contains("iPad") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

const NAMED_KEYS: &[&str] = &[
    "Escape", "Enter", "Tab", "Backspace", "Delete", "Space", "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight",
    "Home", "End", "PageUp", "PageDown", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
];

/// Normalize a key name: single characters lowercase, known named keys in
/// canonical case, `Esc` as `Escape`, a literal space as `Space`.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    if key == " " {
        return "Space".to_owned();
    }
    if key.chars().count() == 1 {
        return key.to_lowercase();
    }
    if key.eq_ignore_ascii_case("esc") {
        return "Escape".to_owned();
    }
    NAMED_KEYS
        .iter()
        .find(|named| named.eq_ignore_ascii_case(key))
        .map_or_else(|| key.to_owned(), |named| (*named).to_owned())
}

/// A key plus modifier state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyChord {
    /// Parse `"Mod+Shift+K"`-style notation. `Mod` is Meta on Mac, Ctrl elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::Empty`] for a blank chord or
    /// [`ShortcutError::UnknownModifier`] for an unrecognized modifier.
    pub fn parse(chord: &str, platform: Platform) -> Result<Self, ShortcutError> {
        let chord = chord.trim();
        if chord.is_empty() {
            return Err(ShortcutError::Empty);
        }
        let (mods, key) = if chord == "+" {
            ("", "+")
        } else if let Some(stripped) = chord.strip_suffix("++") {
            (stripped, "+")
        } else {
            match chord.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", chord),
            }
        };
        if key.trim().is_empty() {
            return Err(ShortcutError::Empty);
        }

        let mut out = Self { key: normalize_key(key.trim()), ..Self::default() };
        for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => out.ctrl = true,
                "alt" | "option" | "opt" => out.alt = true,
                "shift" => out.shift = true,
                "meta" | "cmd" | "command" | "super" => out.meta = true,
                "mod" => match platform {
                    Platform::Mac => out.meta = true,
                    Platform::Other => out.ctrl = true,
                },
                _ => return Err(ShortcutError::UnknownModifier(part.to_owned())),
            }
        }
        Ok(out)
    }

    /// Build a chord from raw keyboard event fields.
    #[must_use]
    pub fn from_event_parts(key: &str, ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        Self { key: normalize_key(key), ctrl, alt, shift, meta }
    }

    #[cfg(feature = "hydrate")]
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self::from_event_parts(&ev.key(), ev.ctrl_key(), ev.alt_key(), ev.shift_key(), ev.meta_key())
    }

    /// Whether an event chord triggers this binding.
    ///
    /// Shift is ignored for single symbol keys like `?`, whose shift state
    /// depends on the keyboard layout.
    #[must_use]
    pub fn matches(&self, event: &Self) -> bool {
        let shift_insensitive = is_symbol_key(&self.key);
        self.key == event.key
            && self.ctrl == event.ctrl
            && self.alt == event.alt
            && self.meta == event.meta
            && (shift_insensitive || self.shift == event.shift)
    }

    /// Platform-specific label, e.g. `⌘⇧K` or `Ctrl+Shift+K`.
    #[must_use]
    pub fn display(&self, platform: Platform) -> String {
        let key = display_key(&self.key);
        match platform {
            Platform::Mac => {
                let mut out = String::new();
                if self.ctrl {
                    out.push('⌃');
                }
                if self.alt {
                    out.push('⌥');
                }
                if self.shift {
                    out.push('⇧');
                }
                if self.meta {
                    out.push('⌘');
                }
                out.push_str(&key);
                out
            }
            Platform::Other => {
                let mut parts = Vec::new();
                if self.ctrl {
                    parts.push("Ctrl".to_owned());
                }
                if self.alt {
                    parts.push("Alt".to_owned());
                }
                if self.shift {
                    parts.push("Shift".to_owned());
                }
                if self.meta {
                    parts.push("Meta".to_owned());
                }
                parts.push(key);
                parts.join("+")
            }
        }
    }
}

fn is_symbol_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_alphanumeric())
}

fn display_key(key: &str) -> String {
    match key {
        "Escape" => "Esc".to_owned(),
        "ArrowUp" => "↑".to_owned(),
        "ArrowDown" => "↓".to_owned(),
        "ArrowLeft" => "←".to_owned(),
        "ArrowRight" => "→".to_owned(),
        other => other.to_uppercase(),
    }
}

/// One registered binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub id: String,
    pub chord: KeyChord,
    pub description: String,
    pub group: String,
}

/// All shortcuts known to the page, in registration order.
#[derive(Clone, Debug, Default)]
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
    used: BTreeSet<String>,
    platform: Platform,
}

impl ShortcutRegistry {
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self { platform, ..Self::default() }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn all(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Register a binding.
    ///
    /// # Errors
    ///
    /// Fails when the chord does not parse, when the id is taken, or when
    /// another shortcut already answers the same key press.
    pub fn register(&mut self, id: &str, chord: &str, description: &str, group: &str) -> Result<(), ShortcutError> {
        let chord = KeyChord::parse(chord, self.platform)?;
        if self.shortcuts.iter().any(|s| s.id == id) {
            return Err(ShortcutError::DuplicateId(id.to_owned()));
        }
        if let Some(existing) = self
            .shortcuts
            .iter()
            .find(|s| s.chord.matches(&chord) || chord.matches(&s.chord))
        {
            return Err(ShortcutError::Conflict {
                chord: chord.display(self.platform),
                existing: existing.id.clone(),
            });
        }
        self.shortcuts.push(Shortcut {
            id: id.to_owned(),
            chord,
            description: description.to_owned(),
            group: group.to_owned(),
        });
        Ok(())
    }

    pub fn unregister(&mut self, id: &str) {
        self.shortcuts.retain(|s| s.id != id);
    }

    /// Binding triggered by `event`, if any.
    #[must_use]
    pub fn match_event(&self, event: &KeyChord) -> Option<&Shortcut> {
        self.shortcuts.iter().find(|s| s.chord.matches(event))
    }

    /// Shortcuts grouped by `group`, groups in first-registration order.
    #[must_use]
    pub fn grouped(&self) -> Vec<(&str, Vec<&Shortcut>)> {
        let mut groups: Vec<(&str, Vec<&Shortcut>)> = Vec::new();
        for shortcut in &self.shortcuts {
            match groups.iter_mut().find(|(name, _)| *name == shortcut.group) {
                Some((_, items)) => items.push(shortcut),
                None => groups.push((shortcut.group.as_str(), vec![shortcut])),
            }
        }
        groups
    }

    /// Shortcuts whose description, group, or key label matches `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Shortcut> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.shortcuts.iter().collect();
        }
        self.shortcuts
            .iter()
            .filter(|s| {
                match_rank(&s.description, &needle).is_some()
                    || match_rank(&s.group, &needle).is_some()
                    || match_rank(&s.chord.display(self.platform), &needle).is_some()
            })
            .collect()
    }

    /// Record that `id` was used. Returns `true` the first time.
    pub fn mark_used(&mut self, id: &str) -> bool {
        self.shortcuts.iter().any(|s| s.id == id) && self.used.insert(id.to_owned())
    }

    #[must_use]
    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Shortcuts never used yet, in registration order.
    #[must_use]
    pub fn undiscovered(&self) -> Vec<&Shortcut> {
        self.shortcuts.iter().filter(|s| !self.used.contains(&s.id)).collect()
    }

    /// Used ids for persistence.
    #[must_use]
    pub fn used_ids(&self) -> Vec<String> {
        self.used.iter().cloned().collect()
    }

    pub fn restore_used<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        self.used.extend(ids);
    }
}
