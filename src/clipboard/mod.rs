//! Clipboard bookkeeping independent of the pasteboard API.

pub mod change_tracker;
pub mod listing;
pub mod manager;

pub use change_tracker::{ChangeTracker, PasteboardChange};
pub use listing::{entries, item_for_shortcut, ListEntry};
pub use manager::ClipboardManager;
