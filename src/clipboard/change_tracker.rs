//! Pasteboard change detection.
//!
//! The pasteboard exposes a counter that increments on every write. The
//! poller compares it to the last seen value; writes made by the app itself
//! are registered up front so they are not recorded as new copies.

/// What an observed change count means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteboardChange {
    /// Same count as last time.
    Unchanged,
    /// Another application (or a synthetic Cmd+C) wrote to the pasteboard.
    External,
    /// The count matches a write made by this app.
    SelfWrite,
}

#[derive(Debug, Default)]
pub struct ChangeTracker {
    last_count: Option<i64>,
    self_write: Option<i64>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that treats `count` as already seen, so whatever is on the
    /// pasteboard at startup is not recorded.
    pub fn starting_at(count: i64) -> Self {
        Self {
            last_count: Some(count),
            self_write: None,
        }
    }

    /// Classify a freshly read change count and remember it.
    pub fn observe(&mut self, count: i64) -> PasteboardChange {
        if self.last_count == Some(count) {
            return PasteboardChange::Unchanged;
        }
        self.last_count = Some(count);
        if self.self_write.take() == Some(count) {
            PasteboardChange::SelfWrite
        } else {
            PasteboardChange::External
        }
    }

    /// Register the change count produced by our own pasteboard write.
    pub fn mark_self_write(&mut self, count: i64) {
        self.self_write = Some(count);
    }

    pub fn last_count(&self) -> Option<i64> {
        self.last_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_external() {
        let mut t = ChangeTracker::new();
        assert_eq!(t.observe(3), PasteboardChange::External);
        assert_eq!(t.last_count(), Some(3));
    }

    #[test]
    fn starting_count_is_unchanged() {
        let mut t = ChangeTracker::starting_at(7);
        assert_eq!(t.observe(7), PasteboardChange::Unchanged);
        assert_eq!(t.observe(8), PasteboardChange::External);
    }

    #[test]
    fn self_write_is_reported_once() {
        let mut t = ChangeTracker::starting_at(1);
        t.mark_self_write(2);
        assert_eq!(t.observe(2), PasteboardChange::SelfWrite);
        assert_eq!(t.observe(2), PasteboardChange::Unchanged);
        assert_eq!(t.observe(3), PasteboardChange::External);
    }

    #[test]
    fn external_write_after_self_write_is_not_swallowed() {
        let mut t = ChangeTracker::starting_at(1);
        t.mark_self_write(2);
        // Someone else wrote twice before we polled.
        assert_eq!(t.observe(3), PasteboardChange::External);
        assert_eq!(t.observe(4), PasteboardChange::External);
    }
}
