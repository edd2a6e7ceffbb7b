//! Timer and deferred-call helpers shared by the controller and the UI.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, ObjectExt, Sel, YES};

/// Create a repeating AppKit timer that also fires during menus and modals,
/// storing it in `ivar` on `target`. Any timer already in that ivar is
/// invalidated first.
///
/// # Safety
/// The target must be a valid object that responds to the selector and has
/// an `id` ivar named `ivar`.
pub unsafe fn create_timer(target: id, ivar: &str, selector: Sel, interval: f64) -> id {
    invalidate_timer(target, ivar);
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: selector,
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];

    (*target).store_ivar::<id>(ivar, timer);
    timer
}

/// Invalidate the timer stored in `ivar`, if any.
///
/// # Safety
/// The target must have an `id` ivar named `ivar`.
pub unsafe fn invalidate_timer(target: id, ivar: &str) {
    let prev: id = *(*target).load_ivar::<id>(ivar);
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
        (*target).store_ivar::<id>(ivar, nil);
    }
}

/// Call `selector` on `target` once, after `delay` seconds, on the main run
/// loop.
///
/// # Safety
/// The target must be a valid object that responds to the selector.
pub unsafe fn perform_after_delay(target: id, selector: Sel, delay: f64) {
    let _: () = msg_send![
        target,
        performSelector: selector,
        withObject: nil,
        afterDelay: delay
    ];
}
