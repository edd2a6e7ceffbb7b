//! Modal alerts.

pub mod alerts;

pub use alerts::{prompt_launch_at_login, show_permission_alert};
