//! Keyboard shortcut context, global key listener, and the help modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages register shortcuts with handlers through [`Shortcuts`]. A single
//! window `keydown` listener installed by [`use_global_shortcuts`] matches
//! chords against the registry and runs the handler. Every first use of a
//! shortcut is persisted so [`ShortcutHelp`] can badge the ones the user has
//! not tried yet.
//!
//! TRADE-OFFS
//! ==========
//! Handlers live in a `StoredValue` map beside the registry signal rather than
//! inside it, so the registry stays a plain, testable model.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::search_box::SearchBox;
use crate::state::shortcuts::{KeyChord, Platform, ShortcutError, ShortcutRegistry};
use crate::util::storage;

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Storage key for the ids of shortcuts the user has used.
pub const USED_STORAGE_KEY: &str = "shortcuts_used";
pub const HELP_SHORTCUT_ID: &str = "help";
pub const HELP_CHORD: &str = "Shift+?";

/// Shared shortcut registry plus handlers, installed by [`provide_shortcuts`].
#[derive(Clone, Copy)]
pub struct Shortcuts {
    registry: RwSignal<ShortcutRegistry>,
    handlers: StoredValue<HashMap<String, Callback<()>>>,
    help_open: RwSignal<bool>,
}

impl Shortcuts {
    /// Register `chord` under `id` and bind `handler` to it.
    ///
    /// # Errors
    ///
    /// Propagates [`ShortcutError`] from the registry; the handler is not
    /// bound in that case.
    pub fn register(
        &self,
        id: &str,
        chord: &str,
        description: &str,
        group: &str,
        handler: Callback<()>,
    ) -> Result<(), ShortcutError> {
        if let Some(result) = self.registry.try_update(|r| r.register(id, chord, description, group)) {
            result?;
        }
        self.handlers.update_value(|h| {
            h.insert(id.to_owned(), handler);
        });
        Ok(())
    }

    pub fn unregister(&self, id: &str) {
        self.registry.update(|r| r.unregister(id));
        self.handlers.update_value(|h| {
            h.remove(id);
        });
    }

    pub fn registry(&self) -> Signal<ShortcutRegistry> {
        self.registry.into()
    }

    pub fn help_open(&self) -> Signal<bool> {
        self.help_open.into()
    }

    pub fn set_help_open(&self, open: bool) {
        self.help_open.set(open);
    }

    /// Run the handler bound to `event`. Returns `true` when one ran.
    ///
    /// Events from text inputs only reach Escape bindings.
    pub fn dispatch(&self, event: &KeyChord, in_editable: bool) -> bool {
        if !accepts_event(&event.key, in_editable) {
            return false;
        }
        let Some(id) = self
            .registry
            .try_with_untracked(|r| r.match_event(event).map(|s| s.id.clone()))
            .flatten()
        else {
            return false;
        };

        if self.registry.try_update(|r| r.mark_used(&id)) == Some(true) {
            self.registry.with_untracked(|r| storage::save_json(USED_STORAGE_KEY, &r.used_ids()));
        }
        let handler = self.handlers.try_with_value(|h| h.get(&id).copied()).flatten();
        match handler {
            Some(handler) => {
                handler.run(());
                true
            }
            None => false,
        }
    }
}

/// Whether a key event should reach the shortcut registry.
#[must_use]
pub fn accepts_event(key: &str, in_editable: bool) -> bool {
    !in_editable || key == "Escape"
}

/// Install the shortcut context with the built-in help binding and the
/// persisted used set.
pub fn provide_shortcuts() -> Shortcuts {
    let mut registry = ShortcutRegistry::new(Platform::detect());
    if let Some(used) = storage::load_json::<Vec<String>>(USED_STORAGE_KEY) {
        registry.restore_used(used);
    }
    let shortcuts = Shortcuts {
        registry: RwSignal::new(registry),
        handlers: StoredValue::new(HashMap::new()),
        help_open: RwSignal::new(false),
    };
    let help_open = shortcuts.help_open;
    let toggle_help = Callback::new(move |()| help_open.update(|open| *open = !*open));
    if let Err(err) = shortcuts.register(HELP_SHORTCUT_ID, HELP_CHORD, "Show keyboard shortcuts", "General", toggle_help) {
        #[cfg(feature = "hydrate")]
        log::warn!("shortcuts: help binding rejected: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
    }
    provide_context(shortcuts);
    shortcuts
}

/// Context installed by [`provide_shortcuts`].
///
/// # Panics
///
/// Panics when no ancestor called [`provide_shortcuts`].
pub fn use_shortcuts() -> Shortcuts {
    expect_context::<Shortcuts>()
}

/// Listen for registered chords on the window for the life of the caller.
pub fn use_global_shortcuts(shortcuts: Shortcuts) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        #[cfg(feature = "hydrate")]
        {
            let chord = KeyChord::from_event(&ev);
            if shortcuts.dispatch(&chord, dom::event_in_editable(&ev)) {
                ev.prevent_default();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, shortcuts);
        }
    });
    on_cleanup(move || handle.remove());
}

/// One line of the help table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutRow {
    pub id: String,
    pub keys: String,
    pub description: String,
    /// Not used yet.
    pub is_new: bool,
}

/// Help table contents for `query`, grouped in registration order. Groups
/// with no matching shortcut are omitted.
#[must_use]
pub fn shortcut_rows(registry: &ShortcutRegistry, query: &str) -> Vec<(String, Vec<ShortcutRow>)> {
    let matches: Vec<&str> = registry.search(query).into_iter().map(|s| s.id.as_str()).collect();
    registry
        .grouped()
        .into_iter()
        .filter_map(|(group, items)| {
            let rows: Vec<ShortcutRow> = items
                .into_iter()
                .filter(|s| matches.contains(&s.id.as_str()))
                .map(|s| ShortcutRow {
                    id: s.id.clone(),
                    keys: s.chord.display(registry.platform()),
                    description: s.description.clone(),
                    is_new: !registry.is_used(&s.id),
                })
                .collect();
            (!rows.is_empty()).then(|| (group.to_owned(), rows))
        })
        .collect()
}

/// Searchable modal listing every registered shortcut.
#[component]
pub fn ShortcutHelp() -> impl IntoView {
    let shortcuts = use_shortcuts();
    let registry = shortcuts.registry();
    let query = RwSignal::new(String::new());
    let on_close = Callback::new(move |()| {
        shortcuts.set_help_open(false);
        query.set(String::new());
    });

    let groups = move || registry.with(|r| shortcut_rows(r, &query.get()));
    let undiscovered = move || registry.with(|r| r.undiscovered().len());

    view! {
        <Modal open=shortcuts.help_open() on_close=on_close title="Keyboard shortcuts" class="help-shortcuts-modal">
            <div class="help-shortcuts-modal__subtitle">
                {move || match undiscovered() {
                    0 => "You have tried every shortcut.".to_owned(),
                    n => format!("{n} shortcuts you have not tried yet"),
                }}
            </div>
            <SearchBox on_search=Callback::new(move |q: String| query.set(q)) placeholder="Search shortcuts" debounce_ms=0 />
            <div class="help-shortcuts-modal__table-wrap">
                <table class="help-shortcuts-modal__table">
                    <thead>
                        <tr>
                            <th>"Action"</th>
                            <th>"Shortcut"</th>
                        </tr>
                    </thead>
                    {move || {
                        groups()
                            .into_iter()
                            .map(|(group, rows)| {
                                view! {
                                    <tbody>
                                        <tr class="help-shortcuts-modal__group">
                                            <th colspan="2">{group}</th>
                                        </tr>
                                        {rows
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {row.description}
                                                            {row.is_new.then(|| view! { <span class="help-shortcuts-modal__new">"new"</span> })}
                                                        </td>
                                                        <td class="help-shortcuts-modal__keys">
                                                            <kbd>{row.keys}</kbd>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                }
                            })
                            .collect_view()
                    }}
                </table>
            </div>
        </Modal>
    }
}
