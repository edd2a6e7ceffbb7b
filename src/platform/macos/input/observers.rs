//! System observers for the key listener.
//!
//! A CGEvent tap can silently stop delivering after sleep or a session
//! switch, so it is rebuilt on wake; on termination it is torn down.

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};
use crate::platform::macos::input::event_tap::uninstall_event_tap;

/// Release the event tap when the app terminates.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer() {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        log::info!("Terminating, removing event tap");
        uninstall_event_tap();
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Ask the dispatcher to rebuild the tap after wake and session changes.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_wake_observers() {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let nc: id = msg_send![ws, notificationCenter];

    let add_obs = |name_cstr: &std::ffi::CStr| {
        let name: id = msg_send![get_class("NSString"), stringWithUTF8String: name_cstr.as_ptr()];
        let block = RcBlock::new(move |_note: id| {
            publish(AppEvent::ReinstallEventTap);
        });
        let _: id =
            msg_send![nc, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
    };

    add_obs(c"NSWorkspaceDidWakeNotification");
    add_obs(c"NSWorkspaceSessionDidBecomeActiveNotification");
}
