//! Application configuration (pure Rust, no FFI).
//!
//! This module defines the tunables that can be read from NSUserDefaults.

use super::constants::*;
use crate::clamp;

/// Runtime configuration, loaded from NSUserDefaults on macOS.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Maximum number of history entries.
    pub history_limit: usize,
    /// Pasteboard polling interval in seconds.
    pub poll_interval_secs: f64,
    /// Accessibility permission polling interval in seconds.
    pub permission_poll_secs: f64,
    /// Delay used around synthetic copy/paste keystrokes, in seconds.
    pub paste_delay_secs: f64,
    /// Open the popup after a Ctrl+C / Ctrl+X capture.
    pub show_popup_on_copy: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            permission_poll_secs: DEFAULT_PERMISSION_POLL_SECS,
            paste_delay_secs: DEFAULT_PASTE_DELAY_SECS,
            show_popup_on_copy: true,
        }
    }
}

impl AppConfig {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.history_limit = self
            .history_limit
            .clamp(MIN_HISTORY_LIMIT, MAX_HISTORY_LIMIT);
        self.poll_interval_secs = clamp(
            self.poll_interval_secs,
            MIN_POLL_INTERVAL_SECS,
            MAX_POLL_INTERVAL_SECS,
        );
        self.permission_poll_secs = clamp(
            self.permission_poll_secs,
            MIN_PERMISSION_POLL_SECS,
            MAX_PERMISSION_POLL_SECS,
        );
        self.paste_delay_secs = clamp(
            self.paste_delay_secs,
            MIN_PASTE_DELAY_SECS,
            MAX_PASTE_DELAY_SECS,
        );
    }

    /// Returns a validated copy.
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }
}
