//! Popup panel construction.
//!
//! The panel is a borderless, non-activating `NSPanel` subclass that
//! refuses key and main status, so the app the user is typing in keeps
//! focus while the popup is on screen.

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};

use crate::model::constants::{POPUP_HEIGHT, POPUP_MARGIN, POPUP_WIDTH};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSPoint, NSRect, NSSize, ObjectExt, NO, YES,
};

// NSWindowStyleMask
const STYLE_BORDERLESS: u64 = 0;
const STYLE_NONACTIVATING_PANEL: u64 = 1 << 7;

// NSBackingStoreBuffered
const BACKING_BUFFERED: u64 = 2;

// NSFloatingWindowLevel
const FLOATING_LEVEL: isize = 3;

// CanJoinAllSpaces (1) + FullScreenAuxiliary (256)
const COLLECTION_BEHAVIOR: u64 = 1 | 256;

pub(super) const HEADER_HEIGHT: f64 = 44.0;
pub(super) const WARNING_HEIGHT: f64 = 64.0;
pub(super) const INSET: f64 = 12.0;

unsafe extern "C-unwind" fn refuse(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::NO
}

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::YES
}

unsafe fn panel_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(c"ClipshelfPanel") {
        return cls;
    }
    let superclass = AnyClass::get(c"NSPanel").expect("NSPanel is always registered");
    let mut builder =
        ClassBuilder::new(c"ClipshelfPanel", superclass).expect("panel class name is unique");
    builder.add_method(
        sel!(canBecomeKeyWindow),
        refuse as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(canBecomeMainWindow),
        refuse as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.register()
}

/// Document view of the list; flipped so rows stack from the top.
unsafe fn list_view_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(c"ClipshelfListView") {
        return cls;
    }
    let superclass = AnyClass::get(c"NSView").expect("NSView is always registered");
    let mut builder =
        ClassBuilder::new(c"ClipshelfListView", superclass).expect("list class name is unique");
    builder.add_method(
        sel!(isFlipped),
        is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.register()
}

/// sRGB color.
pub(super) unsafe fn color(r: f64, g: f64, b: f64, a: f64) -> id {
    msg_send![get_class("NSColor"), colorWithSRGBRed: r, green: g, blue: b, alpha: a]
}

/// Non-editable label.
pub(super) unsafe fn label(text: &str, frame: NSRect, size: f64, bold: bool, color: id) -> id {
    let field: id = msg_send![get_class("NSTextField"), labelWithString: nsstring_id(text)];
    let _: () = msg_send![field, setFrame: frame];
    let font: id = if bold {
        msg_send![get_class("NSFont"), boldSystemFontOfSize: size]
    } else {
        msg_send![get_class("NSFont"), systemFontOfSize: size]
    };
    let _: () = msg_send![field, setFont: font];
    let _: () = msg_send![field, setTextColor: color];
    field
}

/// Push button sending `action` to `target`.
pub(super) unsafe fn button(title: &str, frame: NSRect, target: id, action: Sel) -> id {
    let btn: id = msg_send![
        get_class("NSButton"),
        buttonWithTitle: nsstring_id(title),
        target: target,
        action: action
    ];
    let _: () = msg_send![btn, setFrame: frame];
    let font: id = msg_send![get_class("NSFont"), systemFontOfSize: 11.0f64];
    let _: () = msg_send![btn, setFont: font];
    btn
}

/// Rounded filled box used as a background.
pub(super) unsafe fn rounded_box(frame: NSRect, radius: f64, fill: id) -> id {
    let bg: id = msg_send![get_class("NSBox"), alloc];
    let bg: id = msg_send![bg, initWithFrame: frame];
    let _: () = msg_send![bg, setBoxType: 4usize]; // NSBoxCustom
    let _: () = msg_send![bg, setBorderWidth: 0.0f64];
    let _: () = msg_send![bg, setCornerRadius: radius];
    let _: () = msg_send![bg, setFillColor: fill];
    let _: () = msg_send![bg, setTitlePosition: 0usize]; // NSNoTitle
    let _: id = msg_send![bg, autorelease];
    bg
}

/// Build the panel and store it, its list view and its warning strip in
/// the controller.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn create_popup(controller: id) -> id {
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(POPUP_WIDTH, POPUP_HEIGHT));
    let panel: id = msg_send![panel_class(), alloc];
    let panel: id = msg_send![
        panel,
        initWithContentRect: frame,
        styleMask: STYLE_BORDERLESS | STYLE_NONACTIVATING_PANEL,
        backing: BACKING_BUFFERED,
        defer: NO
    ];
    let _: () = msg_send![panel, setOpaque: NO];
    let clear: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![panel, setBackgroundColor: clear];
    let _: () = msg_send![panel, setHasShadow: YES];
    let _: () = msg_send![panel, setLevel: FLOATING_LEVEL];
    let _: () = msg_send![panel, setCollectionBehavior: COLLECTION_BEHAVIOR];
    let _: () = msg_send![panel, setHidesOnDeactivate: NO];
    let _: () = msg_send![panel, setReleasedWhenClosed: NO];

    let content: id = msg_send![panel, contentView];
    let _: () = msg_send![content, addSubview: rounded_box(frame, 12.0, color(0.13, 0.13, 0.14, 0.96))];

    // Header
    let white: id = msg_send![get_class("NSColor"), whiteColor];
    let title = label(
        "Clipboard History",
        NSRect::new(
            NSPoint::new(INSET + 4.0, POPUP_HEIGHT - HEADER_HEIGHT + 10.0),
            NSSize::new(POPUP_WIDTH - 80.0, 22.0),
        ),
        15.0,
        true,
        white,
    );
    let _: () = msg_send![content, addSubview: title];
    let close = button(
        "✕",
        NSRect::new(
            NSPoint::new(POPUP_WIDTH - INSET - 32.0, POPUP_HEIGHT - HEADER_HEIGHT + 8.0),
            NSSize::new(32.0, 26.0),
        ),
        controller,
        sel!(closePopup:),
    );
    let _: () = msg_send![content, addSubview: close];

    // Permission warning, shown by refresh while untrusted
    let warning = create_warning(controller);
    let _: () = msg_send![content, addSubview: warning];

    // List
    let scroll_frame = NSRect::new(
        NSPoint::new(INSET, INSET),
        NSSize::new(POPUP_WIDTH - 2.0 * INSET, POPUP_HEIGHT - HEADER_HEIGHT - INSET),
    );
    let scroll: id = msg_send![get_class("NSScrollView"), alloc];
    let scroll: id = msg_send![scroll, initWithFrame: scroll_frame];
    let _: () = msg_send![scroll, setHasVerticalScroller: YES];
    let _: () = msg_send![scroll, setAutohidesScrollers: YES];
    let _: () = msg_send![scroll, setDrawsBackground: NO];
    let _: () = msg_send![scroll, setBorderType: 0usize]; // NSNoBorder

    let list: id = msg_send![list_view_class(), alloc];
    let list: id = msg_send![list, initWithFrame: NSRect::new(
        NSPoint::new(0.0, 0.0),
        scroll_frame.size
    )];
    let _: () = msg_send![scroll, setDocumentView: list];
    let _: () = msg_send![list, release];
    let _: () = msg_send![content, addSubview: scroll];
    let _: () = msg_send![scroll, release];

    (*controller).store_ivar::<id>("_popupWindow", panel);
    (*controller).store_ivar::<id>("_popupList", list);
    (*controller).store_ivar::<id>("_popupWarning", warning);
    panel
}

unsafe fn create_warning(controller: id) -> id {
    let frame = NSRect::new(
        NSPoint::new(INSET, POPUP_HEIGHT - HEADER_HEIGHT - WARNING_HEIGHT),
        NSSize::new(POPUP_WIDTH - 2.0 * INSET, WARNING_HEIGHT - 8.0),
    );
    let strip = rounded_box(frame, 8.0, color(0.45, 0.30, 0.05, 0.9));
    let inner: id = msg_send![strip, contentView];
    let text = label(
        "Accessibility access is off. Shortcuts and paste are disabled.",
        NSRect::new(NSPoint::new(8.0, 8.0), NSSize::new(frame.size.width - 130.0, 40.0)),
        11.0,
        false,
        msg_send![get_class("NSColor"), whiteColor],
    );
    let _: () = msg_send![text, setMaximumNumberOfLines: 2isize];
    let _: () = msg_send![inner, addSubview: text];
    let open = button(
        "Open Settings",
        NSRect::new(
            NSPoint::new(frame.size.width - 116.0, 14.0),
            NSSize::new(108.0, 26.0),
        ),
        controller,
        sel!(openAccessibilitySettings:),
    );
    let _: () = msg_send![inner, addSubview: open];
    let _: () = msg_send![strip, setHidden: YES];
    strip
}

/// Move the panel to the bottom-right corner of the main screen.
///
/// # Safety
/// Must be called from main thread with a valid panel.
pub unsafe fn position_bottom_right(panel: id) {
    let screen: id = msg_send![get_class("NSScreen"), mainScreen];
    if screen == nil {
        return;
    }
    let visible: NSRect = msg_send![screen, visibleFrame];
    let origin = NSPoint::new(
        visible.origin.x + visible.size.width - POPUP_WIDTH - POPUP_MARGIN,
        visible.origin.y + POPUP_MARGIN,
    );
    let _: () = msg_send![panel, setFrameOrigin: origin];
}
