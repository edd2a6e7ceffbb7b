//! Event handlers.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, open_accessibility_settings};
