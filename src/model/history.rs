//! Bounded, deduplicated clipboard history with a pinned set.
//!
//! History is newest first. The pinned set is independent of ordering; only
//! pinned items survive a restart.

use std::collections::HashSet;

use super::item::ClipboardItem;

/// Result of inserting into the history.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    /// An equal item was already present and has been moved to the front.
    pub was_present: bool,
    /// Items dropped to respect the cap.
    pub evicted: Vec<ClipboardItem>,
}

#[derive(Debug, Clone)]
pub struct History {
    items: Vec<ClipboardItem>,
    pinned: HashSet<ClipboardItem>,
    limit: usize,
}

impl History {
    /// Empty history holding at most `limit` entries (at least one).
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            pinned: HashSet::new(),
            limit: limit.max(1),
        }
    }

    /// History seeded from persisted pinned items, in their saved order.
    /// Duplicates in the input are collapsed to their first occurrence.
    pub fn from_pinned(pinned: Vec<ClipboardItem>, limit: usize) -> Self {
        let mut history = Self::new(limit);
        for item in pinned {
            if history.pinned.insert(item.clone()) {
                history.items.push(item);
            }
        }
        history.enforce_limit();
        history
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn items(&self) -> &[ClipboardItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClipboardItem> {
        self.items.get(index)
    }

    pub fn contains(&self, item: &ClipboardItem) -> bool {
        self.position(item).is_some()
    }

    pub fn position(&self, item: &ClipboardItem) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    pub fn is_pinned(&self, item: &ClipboardItem) -> bool {
        self.pinned.contains(item)
    }

    pub fn pinned(&self) -> &HashSet<ClipboardItem> {
        &self.pinned
    }

    /// Pinned items in a stable order: history order first, then any pinned
    /// items no longer in history.
    pub fn pinned_items(&self) -> Vec<ClipboardItem> {
        let mut out: Vec<ClipboardItem> = self
            .items
            .iter()
            .filter(|item| self.pinned.contains(*item))
            .cloned()
            .collect();
        let mut rest: Vec<ClipboardItem> = self
            .pinned
            .iter()
            .filter(|item| !self.items.contains(item))
            .cloned()
            .collect();
        rest.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        out.extend(rest);
        out
    }

    /// Insert at the front, removing an equal item first.
    pub fn insert(&mut self, item: ClipboardItem) -> InsertOutcome {
        let was_present = match self.position(&item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        };
        // Keep the pinned set's copy in sync with the newest timestamp.
        if self.pinned.remove(&item) {
            self.pinned.insert(item.clone());
        }
        self.items.insert(0, item);
        let evicted = self.enforce_limit();
        InsertOutcome {
            was_present,
            evicted,
        }
    }

    /// Flip the pinned state of an item present in history.
    ///
    /// Returns the new state, or `None` when the item is not in history.
    /// History order and membership are untouched.
    pub fn toggle_pin(&mut self, item: &ClipboardItem) -> Option<bool> {
        let idx = self.position(item)?;
        if self.pinned.remove(item) {
            Some(false)
        } else {
            self.pinned.insert(self.items[idx].clone());
            Some(true)
        }
    }

    /// Remove an item from both history and the pinned set.
    ///
    /// Returns true if anything was removed.
    pub fn remove(&mut self, item: &ClipboardItem) -> bool {
        let in_history = match self.position(item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        };
        let was_pinned = self.pinned.remove(item);
        in_history || was_pinned
    }

    /// Drop the oldest entries until the cap holds. Pinned entries leave
    /// history too but stay in the pinned set, so they are still persisted.
    fn enforce_limit(&mut self) -> Vec<ClipboardItem> {
        if self.items.len() <= self.limit {
            return Vec::new();
        }
        self.items.split_off(self.limit)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(super::constants::DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClipboardItem {
        ClipboardItem::text(s)
    }

    fn texts(h: &History) -> Vec<&str> {
        h.items().iter().filter_map(|i| i.text_value()).collect()
    }

    #[test]
    fn insert_puts_newest_first() {
        let mut h = History::new(10);
        h.insert(t("a"));
        h.insert(t("b"));
        assert_eq!(texts(&h), vec!["b", "a"]);
    }

    #[test]
    fn reinsert_moves_to_front_without_duplicate() {
        let mut h = History::new(10);
        h.insert(t("a"));
        h.insert(t("b"));
        let out = h.insert(t("a"));
        assert!(out.was_present);
        assert_eq!(texts(&h), vec!["a", "b"]);
    }

    #[test]
    fn eviction_drops_oldest_even_when_pinned() {
        let mut h = History::new(3);
        h.insert(t("a"));
        h.insert(t("b"));
        h.insert(t("c"));
        h.toggle_pin(&t("a"));
        let out = h.insert(t("d"));
        assert_eq!(out.evicted, vec![t("a")]);
        assert_eq!(texts(&h), vec!["d", "c", "b"]);
        assert!(h.is_pinned(&t("a")));
        assert_eq!(h.pinned_items(), vec![t("a")]);
    }

    #[test]
    fn from_pinned_over_cap_keeps_overflow_pinned() {
        let h = History::from_pinned(vec![t("a"), t("b"), t("c")], 2);
        assert_eq!(texts(&h), vec!["a", "b"]);
        assert_eq!(h.pinned().len(), 3);
        assert_eq!(h.pinned_items().last(), Some(&t("c")));
    }

    #[test]
    fn toggle_pin_requires_presence() {
        let mut h = History::new(5);
        assert_eq!(h.toggle_pin(&t("ghost")), None);
        assert!(h.pinned().is_empty());
    }

    #[test]
    fn from_pinned_collapses_duplicates() {
        let h = History::from_pinned(vec![t("a"), t("b"), t("a")], 10);
        assert_eq!(texts(&h), vec!["a", "b"]);
        assert_eq!(h.pinned().len(), 2);
    }

    #[test]
    fn zero_limit_is_treated_as_one() {
        let mut h = History::new(0);
        h.insert(t("a"));
        h.insert(t("b"));
        assert_eq!(texts(&h), vec!["b"]);
    }
}
