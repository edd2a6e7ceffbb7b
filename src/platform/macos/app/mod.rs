//! Application runtime: the controller object, its state, and the flows it
//! drives.

pub mod actions;
pub mod controller;
pub mod focus;
pub mod helpers;
pub mod state;

pub use controller::{create_controller, start_timers};
pub use state::{init_state, with_state, AppState};
