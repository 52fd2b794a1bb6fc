//! Typewriter and word-reveal text effects.
//!
//! The typewriter is a small phase machine stepped by the component's timer:
//! `Typing -> Holding -> Deleting -> Typing(next phrase)`. Each
//! [`Typewriter::tick`] returns the delay before the next step so the
//! component can chain one-shot timers instead of polling.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

pub const DEFAULT_TYPE_DELAY_MS: u32 = 60;
pub const DEFAULT_DELETE_DELAY_MS: u32 = 30;
pub const DEFAULT_HOLD_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Typing,
    Holding,
    Deleting,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self { type_ms: DEFAULT_TYPE_DELAY_MS, delete_ms: DEFAULT_DELETE_DELAY_MS, hold_ms: DEFAULT_HOLD_DELAY_MS }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    /// Number of chars of the current phrase on screen.
    shown: usize,
    phase: Phase,
    looped: bool,
    timing: TypewriterTiming,
}

impl Typewriter {
    #[must_use]
    pub fn new(phrases: Vec<String>, looped: bool, timing: TypewriterTiming) -> Self {
        let phase = if phrases.is_empty() { Phase::Finished } else { Phase::Typing };
        Self { phrases, phrase_index: 0, shown: 0, phase, looped, timing }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Currently visible prefix of the active phrase.
    #[must_use]
    pub fn visible(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return "";
        };
        let end = phrase.char_indices().nth(self.shown).map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Advance one step. Returns the delay until the next tick, or `None`
    /// when the effect has finished.
    pub fn tick(&mut self) -> Option<u32> {
        let len = self.phrases.get(self.phrase_index).map(|p| p.chars().count())?;
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown < len {
                    return Some(self.timing.type_ms);
                }
                let last = self.phrase_index + 1 >= self.phrases.len();
                if last && !self.looped {
                    self.phase = Phase::Finished;
                    return None;
                }
                self.phase = Phase::Holding;
                Some(self.timing.hold_ms)
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                Some(self.timing.delete_ms)
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown > 0 {
                    return Some(self.timing.delete_ms);
                }
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                Some(self.timing.type_ms)
            }
            Phase::Finished => None,
        }
    }

    /// Jump straight to the fully typed final state (reduced motion).
    pub fn finish(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        self.phrase_index = self.phrases.len() - 1;
        self.shown = self.phrases[self.phrase_index].chars().count();
        self.phase = Phase::Finished;
    }
}

/// Split `text` into words and mark the first `progress` fraction visible.
///
/// Progress is clamped to `[0, 1]`; a word becomes visible once progress
/// reaches its end boundary.
#[must_use]
pub fn reveal_words(text: &str, progress: f64) -> Vec<(&str, bool)> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let visible = (progress * words.len() as f64 + 1e-9).floor() as usize;
    words.into_iter().enumerate().map(|(i, w)| (w, i < visible)).collect()
}
