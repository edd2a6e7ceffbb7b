//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the clipboard item type, the bounded history with its pinned
//! set, configuration and constants.
//!
//! Persistence lives in `storage`; the macOS glue in `platform::macos`.

pub mod app_config;
pub mod constants;
pub mod history;
pub mod item;

pub use app_config::AppConfig;
pub use constants::*;
pub use history::{History, InsertOutcome};
pub use item::{ClipContent, ClipKind, ClipboardItem};
