//! User interface components.

pub mod dialogs;
pub mod popup;
pub mod status_bar;

pub use dialogs::{prompt_launch_at_login, show_permission_alert};
pub use status_bar::{handle_status_item_click, install_status_bar};
