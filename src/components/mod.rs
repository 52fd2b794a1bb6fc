//! Widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component keeps its `state` model in a signal, wires DOM events, and
//! schedules browser timers. Overlay behaviour shared by modal and drawer
//! lives in `overlay`.

pub mod accordion;
pub mod boundary;
pub mod button;
pub mod context_menu;
pub mod drawer;
pub mod modal;
pub mod overlay;
pub mod progress_ring;
pub mod search_box;
pub mod shortcuts;
pub mod tilt_card;
pub mod toast;
pub mod tooltip;
pub mod typewriter;
pub mod virtual_list;
