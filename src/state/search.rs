//! Debounce gating and ranked filtering for search inputs.
//!
//! DESIGN
//! ======
//! Browser timers cannot be cancelled once handed to `spawn_local`, so
//! debouncing is a sequence gate: each keystroke takes a ticket and the timer
//! callback only acts if its ticket is still the latest. The same gate serves
//! tooltip open delays and any other "last call wins" timer.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

pub const DEFAULT_DEBOUNCE_MS: u32 = 250;
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Last-call-wins gate for delayed callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    seq: u64,
}

impl Debouncer {
    /// Take a ticket, superseding every earlier one.
    pub fn schedule(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.seq
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.seq += 1;
    }
}

/// Match quality, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    Prefix,
    WordStart,
    Substring,
}

/// Rank `candidate` against an already-lowercased `needle`.
#[must_use]
pub fn match_rank(candidate: &str, needle: &str) -> Option<MatchRank> {
    let haystack = candidate.to_lowercase();
    if haystack.starts_with(needle) {
        return Some(MatchRank::Prefix);
    }
    // Every start offset, overlapping ones included.
    let word_start = haystack.char_indices().any(|(i, _)| {
        haystack[i..].starts_with(needle) && haystack[..i].chars().next_back().is_some_and(|c| !c.is_alphanumeric())
    });
    if word_start {
        return Some(MatchRank::WordStart);
    }
    haystack.contains(needle).then_some(MatchRank::Substring)
}

/// Case-insensitive filter returning indices into `items`, best matches
/// first, stable within a rank, capped at `limit`.
///
/// A blank query returns the first `limit` indices.
#[must_use]
pub fn filter_items<S: AsRef<str>>(items: &[S], query: &str, limit: usize) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..items.len().min(limit)).collect();
    }
    let mut ranked: Vec<(MatchRank, usize)> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match_rank(item.as_ref(), &needle).map(|rank| (rank, i)))
        .collect();
    ranked.sort();
    ranked.into_iter().take(limit).map(|(_, i)| i).collect()
}
