//! `ClipshelfController`: the NSObject subclass that owns the app's timers
//! and receives every AppKit target/action callback.
//!
//! Action methods only publish events or call into `actions`; the heavy
//! lifting happens in the dispatcher on the next tick.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::{publish, AppEvent};
use crate::model::constants::DISPATCH_INTERVAL_SECS;
use crate::platform::macos::app::actions;
use crate::platform::macos::app::focus::remember_frontmost_app;
use crate::platform::macos::app::helpers::create_timer;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, ObjectExt};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::ui::status_bar::handle_status_item_click;
use crate::platform::macos::ui::dialogs::prompt_launch_at_login;

const ID_IVARS: [&str; 9] = [
    "_dispatchTimer",
    "_pollTimer",
    "_permissionTimer",
    "_focusTimer",
    "_previousApp",
    "_statusItem",
    "_popupWindow",
    "_popupList",
    "_popupWarning",
];

/// Register the controller class (once) and create the instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_controller() -> id {
    let class_name = c"ClipshelfController";
    let cls = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").expect("NSObject is always registered");
        let mut builder =
            ClassBuilder::new(class_name, superclass).expect("controller class name is unique");
        builder.add_ivar::<id>(c"_dispatchTimer");
        builder.add_ivar::<id>(c"_pollTimer");
        builder.add_ivar::<id>(c"_permissionTimer");
        builder.add_ivar::<id>(c"_focusTimer");
        builder.add_ivar::<id>(c"_previousApp");
        builder.add_ivar::<id>(c"_statusItem");
        builder.add_ivar::<id>(c"_popupWindow");
        builder.add_ivar::<id>(c"_popupList");
        builder.add_ivar::<id>(c"_popupWarning");
        register_methods(&mut builder);
        builder.register()
    };

    let controller: id = msg_send![cls, new];
    for ivar in ID_IVARS {
        (*controller).store_ivar::<id>(ivar, nil);
    }
    controller
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Timers and deferred calls
    builder.add_method(sel!(tick), tick as unsafe extern "C-unwind" fn(_, _));
    builder.add_method(
        sel!(pollPasteboard),
        poll_pasteboard as unsafe extern "C-unwind" fn(_, _),
    );
    builder.add_method(
        sel!(pollPermission),
        poll_permission as unsafe extern "C-unwind" fn(_, _),
    );
    builder.add_method(sel!(trackFocus), track_focus as unsafe extern "C-unwind" fn(_, _));
    builder.add_method(
        sel!(finishCapture),
        finish_capture as unsafe extern "C-unwind" fn(_, _),
    );
    builder.add_method(
        sel!(performPaste),
        perform_paste as unsafe extern "C-unwind" fn(_, _),
    );
    builder.add_method(
        sel!(promptLaunchAtLogin),
        prompt_launch as unsafe extern "C-unwind" fn(_, _),
    );

    // Status item
    builder.add_method(
        sel!(statusItemClicked:),
        status_item_clicked as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuToggleLaunchAtLogin:),
        menu_toggle_launch as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuGrantAccess:),
        menu_grant_access as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(menuQuit:), menu_quit as unsafe extern "C-unwind" fn(_, _, _));

    // Popup
    builder.add_method(sel!(rowPaste:), row_paste as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(
        sel!(rowTogglePin:),
        row_toggle_pin as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(rowRemove:), row_remove as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(
        sel!(closePopup:),
        close_popup as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(openAccessibilitySettings:),
        open_accessibility_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
}

/// Start the dispatcher tick and the two pollers.
///
/// # Safety
/// Must be called from the main thread with the controller instance.
pub unsafe fn start_timers(controller: id, poll_interval: f64, permission_interval: f64) {
    create_timer(controller, "_dispatchTimer", sel!(tick), DISPATCH_INTERVAL_SECS);
    create_timer(controller, "_pollTimer", sel!(pollPasteboard), poll_interval);
    create_timer(
        controller,
        "_permissionTimer",
        sel!(pollPermission),
        permission_interval,
    );
}

fn this_id(this: &mut AnyObject) -> id {
    this as *mut AnyObject
}

/// Row index carried by a popup button's tag.
unsafe fn sender_row(sender: id) -> Option<usize> {
    if sender == nil {
        return None;
    }
    let tag: isize = msg_send![sender, tag];
    usize::try_from(tag).ok()
}

unsafe extern "C-unwind" fn tick(this: &mut AnyObject, _cmd: Sel) {
    dispatch_events(this_id(this));
}

unsafe extern "C-unwind" fn poll_pasteboard(this: &mut AnyObject, _cmd: Sel) {
    actions::poll_pasteboard(this_id(this));
}

unsafe extern "C-unwind" fn poll_permission(_this: &mut AnyObject, _cmd: Sel) {
    actions::poll_permission();
}

unsafe extern "C-unwind" fn track_focus(this: &mut AnyObject, _cmd: Sel) {
    remember_frontmost_app(this_id(this));
}

unsafe extern "C-unwind" fn finish_capture(this: &mut AnyObject, _cmd: Sel) {
    actions::finish_capture(this_id(this));
}

unsafe extern "C-unwind" fn perform_paste(_this: &mut AnyObject, _cmd: Sel) {
    actions::perform_paste();
}

unsafe extern "C-unwind" fn prompt_launch(_this: &mut AnyObject, _cmd: Sel) {
    prompt_launch_at_login();
}

unsafe extern "C-unwind" fn status_item_clicked(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    handle_status_item_click(this_id(this));
}

unsafe extern "C-unwind" fn menu_toggle_launch(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ToggleLaunchAtLogin);
}

unsafe extern "C-unwind" fn menu_grant_access(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::OpenAccessibilitySettings);
}

unsafe extern "C-unwind" fn menu_quit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::Quit);
}

unsafe extern "C-unwind" fn row_paste(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    if let Some(row) = sender_row(sender) {
        publish(AppEvent::PasteRow(row));
    }
}

unsafe extern "C-unwind" fn row_toggle_pin(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    if let Some(row) = sender_row(sender) {
        publish(AppEvent::TogglePinRow(row));
    }
}

unsafe extern "C-unwind" fn row_remove(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    if let Some(row) = sender_row(sender) {
        publish(AppEvent::RemoveRow(row));
    }
}

unsafe extern "C-unwind" fn close_popup(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::HidePopup);
}

unsafe extern "C-unwind" fn open_accessibility_settings(
    _this: &mut AnyObject,
    _cmd: Sel,
    _sender: id,
) {
    publish(AppEvent::OpenAccessibilitySettings);
}
