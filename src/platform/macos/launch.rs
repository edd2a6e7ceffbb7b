//! Launch at login through `SMAppService.mainAppService` (macOS 13+).

use objc2::runtime::AnyClass;

use crate::error::{ClipError, Result};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, nsstring_to_string};

#[link(name = "ServiceManagement", kind = "framework")]
extern "C" {}

// SMAppServiceStatus
const STATUS_ENABLED: isize = 1;

unsafe fn main_app_service() -> Option<id> {
    let cls = AnyClass::get(c"SMAppService")?;
    let svc: id = msg_send![cls, mainAppService];
    (svc != nil).then_some(svc)
}

unsafe fn error_text(err: id) -> String {
    if err == nil {
        return "unknown error".to_string();
    }
    let desc: id = msg_send![err, localizedDescription];
    nsstring_to_string(desc).unwrap_or_else(|| "unknown error".to_string())
}

/// Whether the app is registered to launch at login.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn is_enabled() -> bool {
    match main_app_service() {
        Some(svc) => {
            let status: isize = msg_send![svc, status];
            status == STATUS_ENABLED
        }
        None => false,
    }
}

/// Register or unregister the app as a login item.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn set_enabled(enabled: bool) -> Result<()> {
    let svc = main_app_service()
        .ok_or_else(|| ClipError::LaunchAtLogin("SMAppService is unavailable".into()))?;
    let mut err: id = nil;
    let ok: bool = if enabled {
        msg_send![svc, registerAndReturnError: &mut err as *mut id]
    } else {
        msg_send![svc, unregisterAndReturnError: &mut err as *mut id]
    };
    if !ok {
        return Err(ClipError::LaunchAtLogin(error_text(err)));
    }
    log::info!(
        "Launch at login {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

/// Flip the registration and return the new state.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn toggle() -> Result<bool> {
    let target = !is_enabled();
    set_enabled(target)?;
    Ok(target)
}
