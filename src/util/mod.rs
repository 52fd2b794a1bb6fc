//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! focus) and geometry from component logic to improve reuse and testability.

pub mod dom;
pub mod geometry;
pub mod ring_math;
pub mod storage;
pub mod theme;
pub mod tilt_math;
pub mod timers;
