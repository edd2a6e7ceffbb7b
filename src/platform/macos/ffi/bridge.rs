//! Thin layer over objc2 used by the rest of the macOS code.
//!
//! Most AppKit calls go through `msg_send!` on untyped `id` pointers; this
//! module gathers the aliases and helpers those call sites share.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

/// Objective-C object pointer.
pub type id = *mut AnyObject;

pub const nil: id = std::ptr::null_mut();

/// Objective-C `BOOL` values (not Rust `bool`).
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

pub use objc2_foundation::{NSPoint, NSRect, NSSize};

pub use objc2::rc::Retained;
use objc2_foundation::NSString;

/// Shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![get_class("NSApplication"), sharedApplication] }
}

/// Autoreleased NSString for passing to `msg_send!`.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::autorelease_ptr(ns) as id
}

/// Copy an NSString into a Rust `String`.
///
/// # Safety
/// `s` must be nil or a valid NSString.
pub unsafe fn nsstring_to_string(s: id) -> Option<String> {
    if s == nil {
        return None;
    }
    let utf8: *const std::ffi::c_char = msg_send![s, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(std::ffi::CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Copy the bytes of an NSData.
///
/// # Safety
/// `data` must be nil or a valid NSData.
pub unsafe fn nsdata_to_vec(data: id) -> Option<Vec<u8>> {
    if data == nil {
        return None;
    }
    let len: usize = msg_send![data, length];
    let ptr: *const u8 = msg_send![data, bytes];
    if ptr.is_null() || len == 0 {
        return None;
    }
    Some(std::slice::from_raw_parts(ptr, len).to_vec())
}

/// Autoreleased NSData holding a copy of `bytes`.
///
/// # Safety
/// Must be called inside an autorelease pool.
pub unsafe fn nsdata_from_slice(bytes: &[u8]) -> id {
    msg_send![
        get_class("NSData"),
        dataWithBytes: bytes.as_ptr() as *const std::ffi::c_void,
        length: bytes.len()
    ]
}

/// Get a class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

use objc2::encode::Encode;

/// Instance variable access on runtime-registered classes.
pub trait ObjectExt {
    /// # Safety
    /// The ivar must exist and be of type T.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// # Safety
    /// The ivar must exist and be of type T.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
