//! Application events for inter-module communication.
//!
//! Producers (event tap, status bar, popup buttons, timers, observers)
//! publish these; the dispatcher on the main thread executes them. Pure Rust
//! so it can be tested without FFI.

/// Application-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Shortcuts ===
    /// Copy the current selection into history (Ctrl+C)
    CopySelection,

    /// Cut the current selection into history (Ctrl+X)
    CutSelection,

    /// Show or hide the history popup (Ctrl+V, status bar left click)
    TogglePopup,

    /// Paste the n-th most recent history item (Ctrl+1..9, 0-based)
    PasteIndex(usize),

    // === Popup rows ===
    /// Paste the item at this row of the displayed list
    PasteRow(usize),

    /// Pin or unpin the item at this row
    TogglePinRow(usize),

    /// Delete the item at this row
    RemoveRow(usize),

    /// Hide the popup
    HidePopup,

    // === Status bar menu ===
    /// Open System Settings at the Accessibility pane
    OpenAccessibilitySettings,

    /// Flip the launch-at-login registration
    ToggleLaunchAtLogin,

    /// Terminate the application
    Quit,

    // === System ===
    /// Accessibility trust changed (new state)
    PermissionChanged(bool),

    /// The key listener needs to be recreated (wake, tap disabled by the OS)
    ReinstallEventTap,
}

impl AppEvent {
    /// Returns true if handling this event rebuilds the popup contents.
    pub fn refreshes_popup(&self) -> bool {
        matches!(
            self,
            AppEvent::TogglePinRow(_)
                | AppEvent::RemoveRow(_)
                | AppEvent::PermissionChanged(_)
        )
    }

    /// Returns true if the event needs Accessibility trust to do anything.
    ///
    /// A popup row paste still writes the pasteboard without it; only the
    /// synthetic Cmd+V is skipped.
    pub fn requires_accessibility(&self) -> bool {
        matches!(
            self,
            AppEvent::CopySelection
                | AppEvent::CutSelection
                | AppEvent::PasteIndex(_)
                | AppEvent::ReinstallEventTap
        )
    }

    /// Human-readable description for logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::CopySelection => "Copy selection",
            AppEvent::CutSelection => "Cut selection",
            AppEvent::TogglePopup => "Toggle popup",
            AppEvent::PasteIndex(_) => "Paste history item by shortcut",
            AppEvent::PasteRow(_) => "Paste history row",
            AppEvent::TogglePinRow(_) => "Toggle pin",
            AppEvent::RemoveRow(_) => "Remove history row",
            AppEvent::HidePopup => "Hide popup",
            AppEvent::OpenAccessibilitySettings => "Open accessibility settings",
            AppEvent::ToggleLaunchAtLogin => "Toggle launch at login",
            AppEvent::Quit => "Quit",
            AppEvent::PermissionChanged(_) => "Accessibility permission changed",
            AppEvent::ReinstallEventTap => "Reinstall event tap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_mutations_refresh_popup() {
        assert!(AppEvent::TogglePinRow(0).refreshes_popup());
        assert!(AppEvent::RemoveRow(2).refreshes_popup());
        assert!(AppEvent::PermissionChanged(true).refreshes_popup());
    }

    #[test]
    fn test_paste_does_not_refresh_popup() {
        assert!(!AppEvent::PasteRow(0).refreshes_popup());
        assert!(!AppEvent::TogglePopup.refreshes_popup());
    }

    #[test]
    fn test_key_synthesis_events_require_accessibility() {
        assert!(AppEvent::CopySelection.requires_accessibility());
        assert!(AppEvent::PasteIndex(0).requires_accessibility());
        assert!(!AppEvent::TogglePopup.requires_accessibility());
        assert!(!AppEvent::PasteRow(0).requires_accessibility());
        assert!(!AppEvent::Quit.requires_accessibility());
    }

    #[test]
    fn test_event_equality_includes_payload() {
        assert_eq!(AppEvent::PasteIndex(1), AppEvent::PasteIndex(1));
        assert_ne!(AppEvent::PasteIndex(1), AppEvent::PasteIndex(2));
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::CopySelection,
            AppEvent::CutSelection,
            AppEvent::TogglePopup,
            AppEvent::PasteIndex(0),
            AppEvent::PasteRow(0),
            AppEvent::TogglePinRow(0),
            AppEvent::RemoveRow(0),
            AppEvent::HidePopup,
            AppEvent::OpenAccessibilitySettings,
            AppEvent::ToggleLaunchAtLogin,
            AppEvent::Quit,
            AppEvent::PermissionChanged(false),
            AppEvent::ReinstallEventTap,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
