//! Expanded-item tracking for accordions.
//!
//! Items are identified by caller-chosen string ids. Open order is kept so
//! that switching to single-open mode can keep the most recent item.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use serde::{Deserialize, Serialize};

/// Which accordion items are expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionState {
    /// Expanded ids, oldest first.
    expanded: Vec<String>,
    allow_multiple: bool,
}

impl AccordionState {
    #[must_use]
    pub fn new(allow_multiple: bool) -> Self {
        Self { expanded: Vec::new(), allow_multiple }
    }

    #[must_use]
    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.expanded.iter().any(|open| open == id)
    }

    /// Expanded ids, oldest first.
    #[must_use]
    pub fn expanded(&self) -> &[String] {
        &self.expanded
    }

    pub fn open(&mut self, id: &str) {
        if self.is_open(id) {
            return;
        }
        if !self.allow_multiple {
            self.expanded.clear();
        }
        self.expanded.push(id.to_owned());
    }

    pub fn close(&mut self, id: &str) {
        self.expanded.retain(|open| open != id);
    }

    /// Open a closed item or close an open one.
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.close(id);
        } else {
            self.open(id);
        }
    }

    /// Open every id. In single-open mode only the first id opens.
    pub fn expand_all<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ids = ids.into_iter();
        if !self.allow_multiple {
            if let Some(first) = ids.next() {
                self.open(first);
            }
            return;
        }
        for id in ids {
            self.open(id);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Switch modes. Leaving multi-open keeps only the most recently opened item.
    pub fn set_allow_multiple(&mut self, allow_multiple: bool) {
        self.allow_multiple = allow_multiple;
        if !allow_multiple && self.expanded.len() > 1 {
            let keep = self.expanded.split_off(self.expanded.len() - 1);
            self.expanded = keep;
        }
    }

    /// Restore a persisted expanded list, respecting the current mode.
    pub fn restore(&mut self, expanded: Vec<String>) {
        self.expanded.clear();
        for id in expanded {
            if !self.is_open(&id) {
                self.expanded.push(id);
            }
        }
        let allow_multiple = self.allow_multiple;
        self.set_allow_multiple(allow_multiple);
    }
}
