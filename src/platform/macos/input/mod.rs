//! Input handling.
//!
//! - event_tap.rs: global key-down tap for the Ctrl shortcuts
//! - synthesize.rs: synthetic Cmd+C / Cmd+X / Cmd+V
//! - observers.rs: wake and termination notifications

pub mod event_tap;
pub mod observers;
pub mod synthesize;

pub use event_tap::{install_event_tap, is_event_tap_installed, reinstall_event_tap, uninstall_event_tap};
pub use observers::{install_termination_observer, install_wake_observers};
pub use synthesize::{post_command_shortcut, SyntheticShortcut};
