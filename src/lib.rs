#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Clipshelf: a menu-bar clipboard history for macOS.
//!
//! Everything outside [`platform`] is plain Rust and builds and tests on any
//! host. The macOS layer (event tap, pasteboard, status item, popup) lives
//! under `platform::macos` and only talks to the core through
//! [`events::AppEvent`] and [`clipboard::ClipboardManager`].

pub mod clipboard;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod permission;
pub mod shortcuts;
pub mod storage;

#[cfg(target_os = "macos")]
pub mod platform;

pub use clipboard::{ChangeTracker, ClipboardManager, PasteboardChange};
pub use error::{ClipError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{AppConfig, ClipContent, ClipboardItem, History};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
