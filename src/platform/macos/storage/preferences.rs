//! Configuration persisted in NSUserDefaults.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};

use crate::model::constants::*;
use crate::model::AppConfig;

/// Reads a double from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str, default: f64) -> f64 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, doubleForKey: k]
    }
}

/// Reads an integer from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_int(key: &str, default: i64) -> i64 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        // NSInteger is i64 on 64-bit macOS
        msg_send![ud, integerForKey: k]
    }
}

/// Reads a boolean from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, boolForKey: k]
    }
}

/// Saves a boolean to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setBool: val, forKey: k];
}

/// Loads the configuration, clamped to valid ranges.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_config() -> AppConfig {
    let defaults = AppConfig::default();
    let config = AppConfig {
        history_limit: prefs_get_int(PREF_HISTORY_LIMIT, defaults.history_limit as i64).max(0)
            as usize,
        poll_interval_secs: prefs_get_double(PREF_POLL_INTERVAL, defaults.poll_interval_secs),
        permission_poll_secs: prefs_get_double(
            PREF_PERMISSION_POLL,
            defaults.permission_poll_secs,
        ),
        paste_delay_secs: prefs_get_double(PREF_PASTE_DELAY, defaults.paste_delay_secs),
        show_popup_on_copy: prefs_get_bool(PREF_SHOW_POPUP_ON_COPY, defaults.show_popup_on_copy),
    };
    config.validated()
}

/// Whether the launch-at-login question has already been asked.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn launch_prompt_shown() -> bool {
    prefs_get_bool(PREF_LAUNCH_PROMPT_SHOWN, false)
}

/// Remember that the launch-at-login question was asked.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn mark_launch_prompt_shown() {
    prefs_set_bool(PREF_LAUNCH_PROMPT_SHOWN, true);
}
