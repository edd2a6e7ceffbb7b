//! FFI bindings for ApplicationServices (Accessibility).
//!
//! The event tap and synthetic keystrokes only work once the user has
//! granted the app Accessibility access in System Settings.

use std::ffi::c_void;

use super::coregraphics::{
    kCFBooleanTrue, kCFTypeDictionaryKeyCallBacks, kCFTypeDictionaryValueCallBacks,
    CFDictionaryCreate, CFRelease,
};

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    pub fn AXIsProcessTrusted() -> bool;

    pub fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;

    pub static kAXTrustedCheckOptionPrompt: *const c_void;
}

/// Whether the process is currently trusted for Accessibility.
pub fn is_process_trusted() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// Check trust, showing the system prompt if the app is not trusted yet.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn request_accessibility_prompt() -> bool {
    let keys = [kAXTrustedCheckOptionPrompt];
    let values = [kCFBooleanTrue];

    let dict = CFDictionaryCreate(
        std::ptr::null(),
        keys.as_ptr(),
        values.as_ptr(),
        1,
        std::ptr::addr_of!(kCFTypeDictionaryKeyCallBacks),
        std::ptr::addr_of!(kCFTypeDictionaryValueCallBacks),
    );

    let trusted = AXIsProcessTrustedWithOptions(dict);

    if !dict.is_null() {
        CFRelease(dict);
    }
    trusted
}
