//! Global key listener built on a CGEvent tap.
//!
//! The tap sees every key-down in the session. Shortcuts from
//! [`crate::shortcuts`] are swallowed and turned into events on the bus;
//! everything else passes through untouched.

use std::ffi::c_void;
use std::ptr::null_mut;
use std::sync::atomic::{AtomicPtr, Ordering};

use crate::error::{ClipError, Result};
use crate::events::publish;
use crate::platform::macos::ffi::{
    event_mask_bit, kCFRunLoopCommonModes, kCGEventKeyDown, kCGEventTapDisabledByTimeout,
    kCGEventTapDisabledByUserInput, kCGEventTapOptionDefault, kCGHIDEventTap,
    kCGHeadInsertEventTap, kCGKeyboardEventKeycode, CFMachPortCreateRunLoopSource,
    CFMachPortInvalidate, CFRelease, CFRunLoopAddSource, CFRunLoopGetMain,
    CFRunLoopRemoveSource, CGEventGetFlags, CGEventGetIntegerValueField, CGEventRef,
    CGEventTapCreate, CGEventTapEnable, CGEventTapProxy,
};
use crate::shortcuts::match_shortcut;

// CGEventField
const KEYBOARD_EVENT_AUTOREPEAT: u32 = 8;

static TAP: AtomicPtr<c_void> = AtomicPtr::new(null_mut());
static TAP_SOURCE: AtomicPtr<c_void> = AtomicPtr::new(null_mut());

extern "C" fn key_tap_callback(
    _proxy: CGEventTapProxy,
    event_type: u32,
    event: CGEventRef,
    _user_info: *mut c_void,
) -> CGEventRef {
    unsafe {
        if event_type == kCGEventTapDisabledByTimeout
            || event_type == kCGEventTapDisabledByUserInput
        {
            let tap = TAP.load(Ordering::SeqCst);
            if !tap.is_null() {
                log::warn!("Event tap was disabled by the system, re-enabling");
                CGEventTapEnable(tap, true);
            }
            return event;
        }

        if event_type != kCGEventKeyDown {
            return event;
        }

        let flags = CGEventGetFlags(event);
        let keycode = CGEventGetIntegerValueField(event, kCGKeyboardEventKeycode) as u16;

        match match_shortcut(keycode, flags) {
            Some(action) => {
                // Held keys repeat; only the first press triggers the action.
                let repeat = CGEventGetIntegerValueField(event, KEYBOARD_EVENT_AUTOREPEAT);
                if repeat == 0 {
                    log::debug!("Shortcut {:?}", action);
                    publish(action.to_event());
                }
                null_mut()
            }
            None => event,
        }
    }
}

/// Whether a tap is currently installed.
pub fn is_event_tap_installed() -> bool {
    !TAP.load(Ordering::SeqCst).is_null()
}

/// Create the tap and attach it to the main run loop. No-op if one exists.
///
/// Fails when the process lacks Accessibility access.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn install_event_tap() -> Result<()> {
    if is_event_tap_installed() {
        return Ok(());
    }

    let tap = CGEventTapCreate(
        kCGHIDEventTap,
        kCGHeadInsertEventTap,
        kCGEventTapOptionDefault,
        event_mask_bit(kCGEventKeyDown),
        key_tap_callback,
        null_mut(),
    );
    if tap.is_null() {
        return Err(ClipError::EventTap(
            "CGEventTapCreate returned null (is Accessibility access granted?)".into(),
        ));
    }

    let source = CFMachPortCreateRunLoopSource(std::ptr::null(), tap, 0);
    if source.is_null() {
        CFMachPortInvalidate(tap);
        CFRelease(tap);
        return Err(ClipError::EventTap("could not create run loop source".into()));
    }

    CFRunLoopAddSource(CFRunLoopGetMain(), source, kCFRunLoopCommonModes);
    CGEventTapEnable(tap, true);

    TAP.store(tap, Ordering::SeqCst);
    TAP_SOURCE.store(source, Ordering::SeqCst);
    log::info!("Keyboard shortcuts enabled");
    Ok(())
}

/// Disable and release the tap. Safe to call when none is installed.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn uninstall_event_tap() {
    let tap = TAP.swap(null_mut(), Ordering::SeqCst);
    let source = TAP_SOURCE.swap(null_mut(), Ordering::SeqCst);

    if !tap.is_null() {
        CGEventTapEnable(tap, false);
    }
    if !source.is_null() {
        CFRunLoopRemoveSource(CFRunLoopGetMain(), source, kCFRunLoopCommonModes);
        CFRelease(source);
    }
    if !tap.is_null() {
        CFMachPortInvalidate(tap);
        CFRelease(tap);
        log::info!("Keyboard shortcuts disabled");
    }
}

/// Tear down and recreate the tap (after wake, or when permission returns).
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn reinstall_event_tap() -> Result<()> {
    uninstall_event_tap();
    install_event_tap()
}
