//! FFI bindings for CoreGraphics event taps and CoreFoundation.
//!
//! Synthetic key events go through the `core-graphics` crate; the tap
//! itself needs a C callback, so it is declared here directly.

#![allow(non_upper_case_globals)]

use std::ffi::c_void;

pub type CFMachPortRef = *mut c_void;
pub type CFRunLoopRef = *mut c_void;
pub type CFRunLoopSourceRef = *mut c_void;
pub type CGEventRef = *mut c_void;
pub type CGEventTapProxy = *mut c_void;

pub type CGEventTapCallBack = extern "C" fn(
    proxy: CGEventTapProxy,
    event_type: u32,
    event: CGEventRef,
    user_info: *mut c_void,
) -> CGEventRef;

// CGEventTapLocation
pub const kCGHIDEventTap: u32 = 0;

// CGEventTapPlacement
pub const kCGHeadInsertEventTap: u32 = 0;

// CGEventTapOptions
pub const kCGEventTapOptionDefault: u32 = 0;

// CGEventType
pub const kCGEventKeyDown: u32 = 10;
pub const kCGEventTapDisabledByTimeout: u32 = 0xFFFF_FFFE;
pub const kCGEventTapDisabledByUserInput: u32 = 0xFFFF_FFFF;

// CGEventField
pub const kCGKeyboardEventKeycode: u32 = 9;

/// Event mask bit for a CGEventType.
pub const fn event_mask_bit(event_type: u32) -> u64 {
    1u64 << event_type
}

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    pub fn CGEventTapCreate(
        tap: u32,
        place: u32,
        options: u32,
        events_of_interest: u64,
        callback: CGEventTapCallBack,
        user_info: *mut c_void,
    ) -> CFMachPortRef;

    pub fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);

    pub fn CGEventGetFlags(event: CGEventRef) -> u64;

    pub fn CGEventGetIntegerValueField(event: CGEventRef, field: u32) -> i64;
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(obj: *const c_void);

    pub fn CFMachPortCreateRunLoopSource(
        allocator: *const c_void,
        port: CFMachPortRef,
        order: isize,
    ) -> CFRunLoopSourceRef;

    pub fn CFMachPortInvalidate(port: CFMachPortRef);

    pub fn CFRunLoopGetMain() -> CFRunLoopRef;

    pub fn CFRunLoopAddSource(rl: CFRunLoopRef, source: CFRunLoopSourceRef, mode: *const c_void);

    pub fn CFRunLoopRemoveSource(
        rl: CFRunLoopRef,
        source: CFRunLoopSourceRef,
        mode: *const c_void,
    );

    pub fn CFDictionaryCreate(
        allocator: *const c_void,
        keys: *const *const c_void,
        values: *const *const c_void,
        numValues: isize,
        keyCallBacks: *const c_void,
        valueCallBacks: *const c_void,
    ) -> *const c_void;

    pub static kCFRunLoopCommonModes: *const c_void;
    pub static kCFBooleanTrue: *const c_void;
    pub static kCFTypeDictionaryKeyCallBacks: c_void;
    pub static kCFTypeDictionaryValueCallBacks: c_void;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_mask_bit() {
        assert_eq!(event_mask_bit(kCGEventKeyDown), 1 << 10);
    }
}
