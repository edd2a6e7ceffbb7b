//! Storage for macOS using NSUserDefaults.
//!
//! Holds the tunables; history itself lives in the JSON file under
//! `crate::storage`.

pub mod preferences;

pub use preferences::*;
