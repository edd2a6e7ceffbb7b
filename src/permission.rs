//! Accessibility permission transitions.
//!
//! The OS offers no notification when the user flips the Accessibility
//! switch, so the app polls `AXIsProcessTrusted` and feeds the results here.

/// Tracks the last known trust state and reports changes.
#[derive(Debug, Default)]
pub struct PermissionMonitor {
    last: Option<bool>,
}

impl PermissionMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a poll result. Returns `Some(new_state)` on the first
    /// observation and on every change, `None` otherwise.
    pub fn observe(&mut self, trusted: bool) -> Option<bool> {
        if self.last == Some(trusted) {
            return None;
        }
        self.last = Some(trusted);
        Some(trusted)
    }

    pub fn is_trusted(&self) -> bool {
        self.last.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_reported() {
        let mut m = PermissionMonitor::new();
        assert_eq!(m.observe(false), Some(false));
        assert!(!m.is_trusted());
    }

    #[test]
    fn only_transitions_are_reported() {
        let mut m = PermissionMonitor::new();
        m.observe(false);
        assert_eq!(m.observe(false), None);
        assert_eq!(m.observe(true), Some(true));
        assert_eq!(m.observe(true), None);
        assert_eq!(m.observe(false), Some(false));
    }

    #[test]
    fn unknown_state_counts_as_untrusted() {
        assert!(!PermissionMonitor::new().is_trusted());
    }
}
