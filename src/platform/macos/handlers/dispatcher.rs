//! Event dispatcher for handling application events.
//!
//! The dispatcher drains the event bus and executes the corresponding
//! actions. It's called from the controller's tick timer and processes all
//! pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! drain_events() → dispatch_events() → actions / popup / dialogs
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use crate::clipboard::item_for_shortcut;
use crate::events::{drain_events, AppEvent};
use crate::model::constants::ACCESSIBILITY_SETTINGS_URL;
use crate::model::ClipboardItem;
use crate::platform::macos::app::actions;
use crate::platform::macos::app::state::with_state;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, NSApp};
use crate::platform::macos::ffi::is_process_trusted;
use crate::platform::macos::input::{
    install_event_tap, reinstall_event_tap, uninstall_event_tap, SyntheticShortcut,
};
use crate::platform::macos::launch;
use crate::platform::macos::ui::dialogs::show_permission_alert;
use crate::platform::macos::ui::popup;

/// Guard against re-entrant dispatch.
///
/// The run loop keeps firing common-mode timers while an NSAlert runs
/// modally, so the tick can arrive again from inside a handler.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Dispatch all pending events from the global event bus.
///
/// # Safety
///
/// Must be called from the main thread. `controller` must be the app
/// controller.
pub unsafe fn dispatch_events(controller: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    for event in drain_events() {
        log::debug!("Dispatching: {}", event.description());
        if event.requires_accessibility() && !is_process_trusted() {
            log::warn!("{} needs Accessibility access, ignored", event.description());
            continue;
        }
        dispatch_single_event(controller, &event);
        if event.refreshes_popup() && popup::is_visible(controller) {
            popup::refresh(controller);
        }
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

/// History item shown at `row` (a history index carried by the button tag).
fn item_at_row(row: usize) -> Option<ClipboardItem> {
    with_state(|s| s.manager.history().get(row).cloned()).flatten()
}

unsafe fn dispatch_single_event(controller: id, event: &AppEvent) {
    match event {
        AppEvent::CopySelection => actions::begin_capture(controller, SyntheticShortcut::Copy),
        AppEvent::CutSelection => actions::begin_capture(controller, SyntheticShortcut::Cut),

        AppEvent::TogglePopup => popup::toggle(controller),
        AppEvent::HidePopup => popup::close(controller),

        AppEvent::PasteIndex(n) => {
            match with_state(|s| item_for_shortcut(&s.manager, *n).cloned()).flatten() {
                Some(item) => actions::paste_item(controller, &item),
                None => log::info!("No history item for Ctrl+{}", n + 1),
            }
        }
        AppEvent::PasteRow(row) => match item_at_row(*row) {
            Some(item) => actions::paste_item(controller, &item),
            None => log::warn!("Paste: row {} is gone", row),
        },

        AppEvent::TogglePinRow(row) => {
            if let Some(item) = item_at_row(*row) {
                with_state(|s| s.manager.toggle_pin(&item));
            }
        }
        AppEvent::RemoveRow(row) => {
            if let Some(item) = item_at_row(*row) {
                with_state(|s| s.manager.remove(&item));
            }
        }

        AppEvent::OpenAccessibilitySettings => open_accessibility_settings(),

        AppEvent::ToggleLaunchAtLogin => {
            if let Err(e) = launch::toggle() {
                log::error!("{}", e);
            }
        }

        AppEvent::Quit => {
            log::info!("Quit requested");
            let _: () = msg_send![NSApp(), terminate: nil];
        }

        AppEvent::PermissionChanged(trusted) => handle_permission_change(*trusted),

        AppEvent::ReinstallEventTap => {
            if let Err(e) = reinstall_event_tap() {
                log::error!("Could not reinstall key listener: {}", e);
            }
        }
    }
}

unsafe fn handle_permission_change(trusted: bool) {
    if trusted {
        log::info!("Accessibility access granted");
        if let Err(e) = install_event_tap() {
            log::error!("{}", e);
        }
        return;
    }

    log::warn!("Accessibility access missing, keyboard shortcuts are off");
    uninstall_event_tap();
    let first_time = with_state(|s| !std::mem::replace(&mut s.permission_alert_shown, true))
        .unwrap_or(false);
    if first_time {
        show_permission_alert();
    }
}

/// Open System Settings at Privacy & Security > Accessibility.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn open_accessibility_settings() {
    let url: id = msg_send![get_class("NSURL"), URLWithString: nsstring_id(ACCESSIBILITY_SETTINGS_URL)];
    if url == nil {
        log::error!("Invalid settings URL");
        return;
    }
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let ok: bool = msg_send![ws, openURL: url];
    if !ok {
        log::error!("Could not open Accessibility settings");
    }
}
