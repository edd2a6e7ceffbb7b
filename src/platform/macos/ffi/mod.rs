//! FFI bindings for macOS frameworks.

pub mod accessibility;
pub mod bridge;
pub mod coregraphics;

pub use accessibility::*;
pub use coregraphics::*;
