//! Pure widget state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each model owns one widget's transient interaction state and exposes
//! DOM-free transitions. Components keep a model in an `RwSignal` and call
//! these methods from event handlers and timers.

pub mod accordion;
pub mod effects;
pub mod menu;
pub mod overlay;
pub mod search;
pub mod shortcuts;
pub mod toast;
pub mod tooltip;
pub mod typewriter;
pub mod virtual_list;
