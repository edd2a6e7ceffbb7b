//! Platform-specific implementations.
//!
//! Only macOS is supported; the pure core builds everywhere so it can be
//! tested on any host.

pub mod macos;
