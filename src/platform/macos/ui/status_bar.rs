//! Status bar (menu bar) item.
//!
//! Left click toggles the popup. Right click (or Control-click) opens a
//! menu built fresh each time, so its checkmark and the accessibility item
//! always reflect the current state:
//! - Launch at Login
//! - Grant Accessibility Access… (only while untrusted)
//! - Quit

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSApp, NSSize, ObjectExt, Sel, YES,
};
use crate::platform::macos::ffi::is_process_trusted;
use crate::platform::macos::launch;
use crate::shortcuts::FLAG_CONTROL;

const STATUS_ITEM_IVAR: &str = "_statusItem";

// NSEventMask
const MASK_LEFT_MOUSE_UP: u64 = 1 << 2;
const MASK_RIGHT_MOUSE_UP: u64 = 1 << 4;

// NSEvent.buttonNumber of the secondary button
const RIGHT_BUTTON: isize = 1;

// NSControlStateValue
const STATE_ON: isize = 1;
const STATE_OFF: isize = 0;

/// Install the status bar item, storing it in the controller.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_status_bar(controller: id) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
    let _: id = msg_send![status_item, retain];
    (*controller).store_ivar::<id>(STATUS_ITEM_IVAR, status_item);

    let button: id = msg_send![status_item, button];
    if button == nil {
        log::error!("Status item has no button");
        return;
    }

    let icon: id = msg_send![
        get_class("NSImage"),
        imageWithSystemSymbolName: nsstring_id("clipboard"),
        accessibilityDescription: nsstring_id("Clipboard history")
    ];
    if icon != nil {
        let _: () = msg_send![icon, setSize: NSSize::new(18.0, 18.0)];
        let _: () = msg_send![icon, setTemplate: YES];
        let _: () = msg_send![button, setImage: icon];
    } else {
        // Fallback: use text if the symbol is unavailable
        let _: () = msg_send![button, setTitle: nsstring_id("Clip")];
    }

    let _: () = msg_send![button, setTarget: controller];
    let _: () = msg_send![button, setAction: sel!(statusItemClicked:)];
    let _: isize = msg_send![button, sendActionOn: MASK_LEFT_MOUSE_UP | MASK_RIGHT_MOUSE_UP];
}

unsafe fn is_menu_click() -> bool {
    let event: id = msg_send![NSApp(), currentEvent];
    if event == nil {
        return false;
    }
    let button: isize = msg_send![event, buttonNumber];
    let flags: u64 = msg_send![event, modifierFlags];
    button == RIGHT_BUTTON || flags & FLAG_CONTROL != 0
}

/// Route a click on the status item.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn handle_status_item_click(controller: id) {
    if !is_menu_click() {
        publish(AppEvent::TogglePopup);
        return;
    }

    let status_item: id = *(*controller).load_ivar::<id>(STATUS_ITEM_IVAR);
    if status_item == nil {
        return;
    }
    let menu = create_status_menu(controller);
    // Attach the menu only for this click; with a menu set, left clicks
    // would no longer reach the action.
    let _: () = msg_send![status_item, setMenu: menu];
    let button: id = msg_send![status_item, button];
    let _: () = msg_send![button, performClick: nil];
    let _: () = msg_send![status_item, setMenu: nil];
}

unsafe fn menu_item(controller: id, title: &str, action: Sel, key: &str) -> id {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id(key)
    ];
    let _: () = msg_send![item, setTarget: controller];
    let _: id = msg_send![item, autorelease];
    item
}

unsafe fn create_status_menu(controller: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), new];
    let _: id = msg_send![menu, autorelease];

    let launch_item = menu_item(
        controller,
        "Launch at Login",
        sel!(menuToggleLaunchAtLogin:),
        "",
    );
    let state = if launch::is_enabled() { STATE_ON } else { STATE_OFF };
    let _: () = msg_send![launch_item, setState: state];
    let _: () = msg_send![menu, addItem: launch_item];

    if !is_process_trusted() {
        let grant_item = menu_item(
            controller,
            "Grant Accessibility Access…",
            sel!(menuGrantAccess:),
            "",
        );
        let _: () = msg_send![menu, addItem: grant_item];
    }

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    let quit_item = menu_item(controller, "Quit", sel!(menuQuit:), "q");
    let _: () = msg_send![menu, addItem: quit_item];

    menu
}
