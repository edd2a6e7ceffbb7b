//! macOS implementation using Cocoa/AppKit via objc2.
//!
//! - FFI bindings (objc2 bridge, Accessibility, CoreGraphics event tap)
//! - Input (global key tap, synthetic keystrokes, system observers)
//! - Pasteboard access
//! - UI (status item, popup window, alerts)
//! - Storage (NSUserDefaults preferences)
//! - Launch at login (ServiceManagement)

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod launch;
pub mod pasteboard;
pub mod storage;
pub mod ui;

pub use ffi::bridge;
