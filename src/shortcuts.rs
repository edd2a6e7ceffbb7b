//! Global shortcut table.
//!
//! Maps a key-down (virtual key code + CGEventFlags) to an app action. Pure
//! Rust so the table can be tested without an event tap.

use crate::events::AppEvent;

// CGEventFlags bits
pub const FLAG_SHIFT: u64 = 1 << 17;
pub const FLAG_CONTROL: u64 = 1 << 18;
pub const FLAG_OPTION: u64 = 1 << 19;
pub const FLAG_COMMAND: u64 = 1 << 20;

// ANSI virtual key codes
pub const KC_C: u16 = 0x08;
pub const KC_X: u16 = 0x07;
pub const KC_V: u16 = 0x09;
pub const KC_COMMAND: u16 = 0x37;

/// Key codes of the digit row, 1 through 9.
pub const KC_DIGITS: [u16; 9] = [18, 19, 20, 21, 23, 22, 26, 28, 25];

/// Actions triggered by the global key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Ctrl+C: copy selection into history.
    Copy,
    /// Ctrl+X: cut selection into history.
    Cut,
    /// Ctrl+V: show or hide the popup.
    TogglePopup,
    /// Ctrl+1..9: paste the n-th most recent item (0-based index).
    PasteIndex(usize),
}

impl ShortcutAction {
    /// Event published when the shortcut fires.
    pub fn to_event(self) -> AppEvent {
        match self {
            ShortcutAction::Copy => AppEvent::CopySelection,
            ShortcutAction::Cut => AppEvent::CutSelection,
            ShortcutAction::TogglePopup => AppEvent::TogglePopup,
            ShortcutAction::PasteIndex(i) => AppEvent::PasteIndex(i),
        }
    }
}

/// Match a key-down against the table. Control must be held; Command and
/// Option must not.
pub fn match_shortcut(keycode: u16, flags: u64) -> Option<ShortcutAction> {
    if flags & FLAG_CONTROL == 0 || flags & (FLAG_COMMAND | FLAG_OPTION) != 0 {
        return None;
    }
    match keycode {
        KC_C => Some(ShortcutAction::Copy),
        KC_X => Some(ShortcutAction::Cut),
        KC_V => Some(ShortcutAction::TogglePopup),
        _ => KC_DIGITS
            .iter()
            .position(|&kc| kc == keycode)
            .map(ShortcutAction::PasteIndex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_c_x_v() {
        assert_eq!(match_shortcut(KC_C, FLAG_CONTROL), Some(ShortcutAction::Copy));
        assert_eq!(match_shortcut(KC_X, FLAG_CONTROL), Some(ShortcutAction::Cut));
        assert_eq!(
            match_shortcut(KC_V, FLAG_CONTROL),
            Some(ShortcutAction::TogglePopup)
        );
    }

    #[test]
    fn digits_map_to_zero_based_index() {
        assert_eq!(
            match_shortcut(18, FLAG_CONTROL),
            Some(ShortcutAction::PasteIndex(0))
        );
        assert_eq!(
            match_shortcut(25, FLAG_CONTROL),
            Some(ShortcutAction::PasteIndex(8))
        );
    }

    #[test]
    fn requires_control() {
        assert_eq!(match_shortcut(KC_C, 0), None);
        assert_eq!(match_shortcut(KC_C, FLAG_SHIFT), None);
    }

    #[test]
    fn command_or_option_disqualify() {
        assert_eq!(match_shortcut(KC_C, FLAG_CONTROL | FLAG_COMMAND), None);
        assert_eq!(match_shortcut(KC_V, FLAG_CONTROL | FLAG_OPTION), None);
    }

    #[test]
    fn shift_is_tolerated() {
        assert_eq!(
            match_shortcut(KC_C, FLAG_CONTROL | FLAG_SHIFT),
            Some(ShortcutAction::Copy)
        );
    }

    #[test]
    fn unrelated_keys_pass_through() {
        assert_eq!(match_shortcut(0x00, FLAG_CONTROL), None);
    }

    #[test]
    fn actions_map_to_events() {
        assert_eq!(ShortcutAction::Copy.to_event(), AppEvent::CopySelection);
        assert_eq!(ShortcutAction::PasteIndex(3).to_event(), AppEvent::PasteIndex(3));
    }
}
