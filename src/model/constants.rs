//! Configuration constants and default values.
//!
//! This module contains all application constants including history limits,
//! timer intervals, NSUserDefaults keys, and validation ranges.

// === History ===

/// Default maximum number of entries kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Smallest history limit accepted from preferences.
pub const MIN_HISTORY_LIMIT: usize = 10;

/// Largest history limit accepted from preferences.
pub const MAX_HISTORY_LIMIT: usize = 500;

/// Characters shown for a text item in the popup before ellipsising.
pub const PREVIEW_CHARS: usize = 120;

/// Characters of a text item quoted in log lines.
pub const LOG_PREVIEW_CHARS: usize = 40;

/// Entries reachable through Ctrl+1..9.
pub const SHORTCUT_SLOTS: usize = 9;

// === Timers (seconds) ===

/// Default pasteboard polling interval.
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 0.5;
pub const MIN_POLL_INTERVAL_SECS: f64 = 0.1;
pub const MAX_POLL_INTERVAL_SECS: f64 = 5.0;

/// Default accessibility permission polling interval.
pub const DEFAULT_PERMISSION_POLL_SECS: f64 = 1.0;
pub const MIN_PERMISSION_POLL_SECS: f64 = 0.25;
pub const MAX_PERMISSION_POLL_SECS: f64 = 10.0;

/// Delay between a synthetic Cmd+C/X and reading the pasteboard, and between
/// focus restore and the synthetic Cmd+V.
pub const DEFAULT_PASTE_DELAY_SECS: f64 = 0.1;
pub const MIN_PASTE_DELAY_SECS: f64 = 0.05;
pub const MAX_PASTE_DELAY_SECS: f64 = 1.0;

/// Event dispatcher tick.
pub const DISPATCH_INTERVAL_SECS: f64 = 0.05;

/// Previous-app tracking interval while the popup is visible.
pub const FOCUS_TRACKING_INTERVAL_SECS: f64 = 0.5;

// === Popup window ===

/// Popup size in points.
pub const POPUP_WIDTH: f64 = 360.0;
pub const POPUP_HEIGHT: f64 = 530.0;

/// Distance from the screen's visible frame edges.
pub const POPUP_MARGIN: f64 = 20.0;

/// Height of one history row.
pub const POPUP_ROW_HEIGHT: f64 = 86.0;

/// Vertical spacing between rows.
pub const POPUP_ROW_SPACING: f64 = 12.0;

// === NSUserDefaults Keys ===

/// Key for the history limit preference.
pub const PREF_HISTORY_LIMIT: &str = "historyLimit";

/// Key for the pasteboard poll interval preference.
pub const PREF_POLL_INTERVAL: &str = "pollInterval";

/// Key for the permission poll interval preference.
pub const PREF_PERMISSION_POLL: &str = "permissionPollInterval";

/// Key for the paste delay preference.
pub const PREF_PASTE_DELAY: &str = "pasteDelay";

/// Key for showing the popup after Ctrl+C / Ctrl+X (bool).
pub const PREF_SHOW_POPUP_ON_COPY: &str = "showPopupOnCopy";

/// Key set once the launch-at-login question has been asked.
pub const PREF_LAUNCH_PROMPT_SHOWN: &str = "launchPromptShown";

// === Storage ===

/// Directory under the user's data dir.
pub const APP_DIR_NAME: &str = "Clipshelf";

/// Pinned items file name.
pub const PINNED_FILE_NAME: &str = "pinned_items.json";

/// Image directory name (inside the app dir).
pub const IMAGES_DIR_NAME: &str = "images";

// === System ===

/// Deep link into Privacy & Security > Accessibility.
pub const ACCESSIBILITY_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility";
