//! NSAlert-based prompts.
//!
//! The app is an accessory (no Dock icon), so it is activated before each
//! alert or the alert opens behind the frontmost window.

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring_id, NSApp, YES};
use crate::platform::macos::launch;
use crate::platform::macos::storage::{launch_prompt_shown, mark_launch_prompt_shown};

// NSModalResponse of the first button
const FIRST_BUTTON: isize = 1000;

/// Run a two-button alert. Returns true if the first button was chosen.
unsafe fn run_alert(message: &str, info: &str, primary: &str, secondary: &str) -> bool {
    let alert: id = msg_send![get_class("NSAlert"), new];
    let _: () = msg_send![alert, setMessageText: nsstring_id(message)];
    let _: () = msg_send![alert, setInformativeText: nsstring_id(info)];
    let _: id = msg_send![alert, addButtonWithTitle: nsstring_id(primary)];
    let _: id = msg_send![alert, addButtonWithTitle: nsstring_id(secondary)];

    let _: () = msg_send![NSApp(), activateIgnoringOtherApps: YES];
    let response: isize = msg_send![alert, runModal];
    let _: () = msg_send![alert, release];
    response == FIRST_BUTTON
}

/// Explain why shortcuts are off and offer the settings deep link.
///
/// # Safety
/// Must be called from main thread, without the app state borrowed.
pub unsafe fn show_permission_alert() {
    let open = run_alert(
        "Accessibility access needed",
        "Clipshelf needs Accessibility access to listen for Ctrl+C, Ctrl+X, \
         Ctrl+V and Ctrl+1…9, and to paste into other apps. Enable Clipshelf \
         under Privacy & Security > Accessibility.",
        "Open Settings",
        "Later",
    );
    if open {
        publish(AppEvent::OpenAccessibilitySettings);
    }
}

/// Ask once, on first launch, whether to start at login.
///
/// # Safety
/// Must be called from main thread, without the app state borrowed.
pub unsafe fn prompt_launch_at_login() {
    if launch_prompt_shown() {
        return;
    }
    mark_launch_prompt_shown();
    if launch::is_enabled() {
        return;
    }

    let enable = run_alert(
        "Launch Clipshelf at login?",
        "Clipshelf can start automatically so your clipboard history is \
         always available. You can change this later from the menu bar icon.",
        "Launch at Login",
        "Not Now",
    );
    if enable {
        if let Err(e) = launch::set_enabled(true) {
            log::error!("{}", e);
        }
    }
}
