//! History popup: a floating panel at the bottom-right of the screen.
//!
//! The panel is created on first use and kept for the life of the app.
//! All functions must be called from the main thread with the controller.

pub mod rows;
pub mod window;

use crate::clipboard::entries;
use crate::model::constants::{POPUP_HEIGHT, POPUP_WIDTH};
use crate::platform::macos::app::focus::{
    remember_frontmost_app, start_focus_tracking, stop_focus_tracking,
};
use crate::platform::macos::app::state::with_state;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSPoint, NSRect, NSSize, ObjectExt};
use crate::platform::macos::ffi::is_process_trusted;

use rows::RowData;
use window::{create_popup, position_bottom_right, HEADER_HEIGHT, INSET, WARNING_HEIGHT};

unsafe fn panel(controller: id) -> id {
    *(*controller).load_ivar::<id>("_popupWindow")
}

/// # Safety
/// Main thread; `controller` must be the app controller.
pub unsafe fn is_visible(controller: id) -> bool {
    let panel = panel(controller);
    if panel == nil {
        return false;
    }
    msg_send![panel, isVisible]
}

/// Show the popup (creating it on first use) with fresh rows.
///
/// # Safety
/// Main thread; `controller` must be the app controller.
pub unsafe fn open(controller: id) {
    let mut panel = panel(controller);
    if panel == nil {
        panel = create_popup(controller);
    }
    remember_frontmost_app(controller);
    refresh(controller);
    position_bottom_right(panel);
    let _: () = msg_send![panel, orderFrontRegardless];
    start_focus_tracking(controller);
    log::debug!("Popup opened");
}

/// # Safety
/// Main thread; `controller` must be the app controller.
pub unsafe fn close(controller: id) {
    let panel = panel(controller);
    if panel == nil {
        return;
    }
    stop_focus_tracking(controller);
    let _: () = msg_send![panel, orderOut: nil];
    log::debug!("Popup closed");
}

/// # Safety
/// Main thread; `controller` must be the app controller.
pub unsafe fn toggle(controller: id) {
    if is_visible(controller) {
        close(controller);
    } else {
        open(controller);
    }
}

/// Rebuild the rows and the permission warning from current state.
///
/// # Safety
/// Main thread; `controller` must be the app controller.
pub unsafe fn refresh(controller: id) {
    let list: id = *(*controller).load_ivar::<id>("_popupList");
    let warning: id = *(*controller).load_ivar::<id>("_popupWarning");
    if list == nil || warning == nil {
        return;
    }

    let Some(data) = with_state(|s| {
        entries(&s.manager)
            .into_iter()
            .map(|entry| RowData {
                image_path: entry
                    .image_name
                    .as_deref()
                    .and_then(|name| s.manager.images().file_path(name)),
                entry,
            })
            .collect::<Vec<_>>()
    }) else {
        return;
    };

    let trusted = is_process_trusted();
    let _: () = msg_send![warning, setHidden: !trusted];

    let top = POPUP_HEIGHT - HEADER_HEIGHT - if trusted { 0.0 } else { WARNING_HEIGHT };
    let scroll_frame = NSRect::new(
        NSPoint::new(INSET, INSET),
        NSSize::new(POPUP_WIDTH - 2.0 * INSET, top - INSET),
    );
    let scroll: id = msg_send![list, enclosingScrollView];
    if scroll != nil {
        let _: () = msg_send![scroll, setFrame: scroll_frame];
    }

    rows::rebuild(list, controller, &data, scroll_frame.size.height);
}
