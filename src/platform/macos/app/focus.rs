//! Previous-application bookkeeping.
//!
//! The popup never takes focus, but clicking the status item or pasting
//! may still activate this app. The frontmost other application is
//! remembered so a paste lands where the user was working.

use crate::model::constants::FOCUS_TRACKING_INTERVAL_SECS;
use crate::platform::macos::app::helpers::{create_timer, invalidate_timer};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_to_string, sel, ObjectExt,
};

const PREVIOUS_APP_IVAR: &str = "_previousApp";
const FOCUS_TIMER_IVAR: &str = "_focusTimer";

// NSApplicationActivationOptions
const ACTIVATE_ALL_WINDOWS: u64 = 1 << 0;

unsafe fn app_name(app: id) -> String {
    let name: id = msg_send![app, localizedName];
    nsstring_to_string(name).unwrap_or_else(|| "unknown app".to_string())
}

unsafe fn is_current_app(app: id) -> bool {
    let current: id = msg_send![get_class("NSRunningApplication"), currentApplication];
    let a: i32 = msg_send![app, processIdentifier];
    let b: i32 = msg_send![current, processIdentifier];
    a == b
}

unsafe fn store_previous(controller: id, app: id) {
    let prev: id = *(*controller).load_ivar::<id>(PREVIOUS_APP_IVAR);
    if prev == app {
        return;
    }
    let _: id = msg_send![app, retain];
    if prev != nil {
        let _: () = msg_send![prev, release];
    }
    (*controller).store_ivar::<id>(PREVIOUS_APP_IVAR, app);
}

/// Remember the frontmost application unless it is this app.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn remember_frontmost_app(controller: id) {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let front: id = msg_send![ws, frontmostApplication];
    if front == nil || is_current_app(front) {
        return;
    }
    let prev: id = *(*controller).load_ivar::<id>(PREVIOUS_APP_IVAR);
    if prev != front {
        log::debug!("Previous app: {}", app_name(front));
    }
    store_previous(controller, front);
}

/// Re-activate the remembered application. Returns false if there is none
/// or activation failed.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn restore_previous_app(controller: id) -> bool {
    let prev: id = *(*controller).load_ivar::<id>(PREVIOUS_APP_IVAR);
    if prev == nil {
        return false;
    }
    let ok: bool = msg_send![prev, activateWithOptions: ACTIVATE_ALL_WINDOWS];
    if ok {
        log::info!("Focus restored to {}", app_name(prev));
    } else {
        log::error!("Could not restore focus to {}", app_name(prev));
    }
    ok
}

/// Keep the remembered application current while the popup is open.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn start_focus_tracking(controller: id) {
    create_timer(
        controller,
        FOCUS_TIMER_IVAR,
        sel!(trackFocus),
        FOCUS_TRACKING_INTERVAL_SECS,
    );
}

/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn stop_focus_tracking(controller: id) {
    invalidate_timer(controller, FOCUS_TIMER_IVAR);
}
