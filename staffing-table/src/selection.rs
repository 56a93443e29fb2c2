//! Checkbox selection tracked by row key.

use std::collections::HashSet;
use std::hash::Hash;

/// Derived state of the header "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl CheckState {
    /// Checkbox glyph for this state.
    pub fn indicator(self) -> &'static str {
        match self {
            CheckState::Unchecked => "□",
            CheckState::Indeterminate => "▣",
            CheckState::Checked => "■",
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Tracks selected rows by their keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Flip membership of a single key.
    pub fn toggle(&mut self, key: K) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// Select everything or nothing.
    ///
    /// Clears when the selection already holds every key; otherwise selects
    /// every key, including from a partial state.
    pub fn toggle_all<I>(&mut self, all_keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let all: HashSet<K> = all_keys.into_iter().collect();
        if self.selected.len() == all.len() {
            self.selected.clear();
        } else {
            self.selected = all;
        }
    }

    /// Drop keys that are not in `keep`. Returns true if anything was removed.
    pub fn retain_keys(&mut self, keep: &HashSet<K>) -> bool {
        let before = self.selected.len();
        self.selected.retain(|k| keep.contains(k));
        self.selected.len() != before
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Header checkbox state against `key_count` distinct row keys.
    pub fn check_state(&self, key_count: usize) -> CheckState {
        if self.selected.is_empty() {
            CheckState::Unchecked
        } else if self.selected.len() == key_count {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}
