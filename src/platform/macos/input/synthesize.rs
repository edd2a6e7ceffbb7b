//! Synthetic Cmd-shortcuts posted into the focused application.

use core_graphics::event::{CGEvent, CGEventFlags, CGEventTapLocation, CGKeyCode};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

use crate::error::{ClipError, Result};
use crate::shortcuts::{KC_C, KC_COMMAND, KC_V, KC_X};

/// The system shortcuts the app sends on the user's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticShortcut {
    Copy,
    Cut,
    Paste,
}

impl SyntheticShortcut {
    fn keycode(self) -> CGKeyCode {
        match self {
            SyntheticShortcut::Copy => KC_C,
            SyntheticShortcut::Cut => KC_X,
            SyntheticShortcut::Paste => KC_V,
        }
    }
}

fn post_key(source: &CGEventSource, keycode: CGKeyCode, down: bool, flags: CGEventFlags) -> Result<()> {
    let event = CGEvent::new_keyboard_event(source.clone(), keycode, down)
        .map_err(|_| ClipError::EventTap(format!("could not create key event {:#x}", keycode)))?;
    event.set_flags(flags);
    event.post(CGEventTapLocation::HID);
    Ok(())
}

/// Press and release Cmd+<key> at the HID level.
///
/// The events carry the Command flag, so the app's own tap lets them pass.
pub fn post_command_shortcut(shortcut: SyntheticShortcut) -> Result<()> {
    let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|_| ClipError::EventTap("could not create CGEventSource".into()))?;
    let cmd = CGEventFlags::CGEventFlagCommand;
    let key = shortcut.keycode();

    post_key(&source, KC_COMMAND, true, cmd)?;
    post_key(&source, key, true, cmd)?;
    post_key(&source, key, false, cmd)?;
    post_key(&source, KC_COMMAND, false, CGEventFlags::empty())?;
    log::debug!("Posted Cmd+{:?}", shortcut);
    Ok(())
}
