//! History rows inside the popup's list view.
//!
//! Rows are laid out top-down in the flipped document view. Every button
//! carries the history index as its tag; the controller turns the tag into
//! a row event.

use std::path::PathBuf;

use crate::clipboard::ListEntry;
use crate::model::constants::{POPUP_ROW_HEIGHT, POPUP_ROW_SPACING};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSPoint, NSRect, NSSize,
};

use super::window::{button, color, label, rounded_box};

const BUTTON_WIDTH: f64 = 64.0;
const BUTTON_HEIGHT: f64 = 22.0;
const PAD: f64 = 8.0;
const CAPTION_HEIGHT: f64 = 16.0;

// NSImageScaleProportionallyDown
const IMAGE_SCALE_DOWN: usize = 0;
// NSLineBreakByTruncatingTail
const TRUNCATE_TAIL: usize = 4;

/// A list entry plus the on-disk path of its image, if any.
pub struct RowData {
    pub entry: ListEntry,
    pub image_path: Option<PathBuf>,
}

/// Height the document view needs for `count` rows.
pub fn content_height(count: usize) -> f64 {
    count as f64 * (POPUP_ROW_HEIGHT + POPUP_ROW_SPACING)
}

/// Replace the list's rows.
///
/// # Safety
/// Must be called from main thread; `list` must be the popup's list view.
pub unsafe fn rebuild(list: id, controller: id, rows: &[RowData], visible_height: f64) {
    let empty: id = msg_send![get_class("NSArray"), array];
    let _: () = msg_send![list, setSubviews: empty];

    let frame: NSRect = msg_send![list, frame];
    let width = frame.size.width;
    let height = content_height(rows.len()).max(visible_height);
    let _: () = msg_send![list, setFrameSize: NSSize::new(width, height)];

    if rows.is_empty() {
        let gray: id = msg_send![get_class("NSColor"), secondaryLabelColor];
        let hint = label(
            "Nothing copied yet. Press Ctrl+C to copy.",
            NSRect::new(NSPoint::new(0.0, 24.0), NSSize::new(width, 20.0)),
            12.0,
            false,
            gray,
        );
        let _: () = msg_send![hint, setAlignment: 1isize]; // NSTextAlignmentCenter
        let _: () = msg_send![list, addSubview: hint];
        return;
    }

    for (pos, row) in rows.iter().enumerate() {
        let y = pos as f64 * (POPUP_ROW_HEIGHT + POPUP_ROW_SPACING);
        add_row(list, controller, row, y, width);
    }
    let _: () = msg_send![list, scrollPoint: NSPoint::new(0.0, 0.0)];
}

unsafe fn add_row(list: id, controller: id, row: &RowData, y: f64, width: f64) {
    let entry = &row.entry;
    let fill = if entry.pinned {
        color(0.30, 0.26, 0.12, 1.0)
    } else {
        color(0.20, 0.20, 0.22, 1.0)
    };
    let bg = rounded_box(
        NSRect::new(NSPoint::new(0.0, y), NSSize::new(width, POPUP_ROW_HEIGHT)),
        8.0,
        fill,
    );
    let _: () = msg_send![list, addSubview: bg];

    // Caption: time, pin marker, Ctrl+N hint
    let mut caption = entry.time_label.clone();
    if entry.pinned {
        caption.push_str("  📌");
    }
    let gray = color(0.65, 0.65, 0.68, 1.0);
    let content_width = width - BUTTON_WIDTH - 3.0 * PAD;
    let caption_label = label(
        &caption,
        NSRect::new(NSPoint::new(PAD, y + 4.0), NSSize::new(content_width - 30.0, CAPTION_HEIGHT)),
        10.0,
        false,
        gray,
    );
    let _: () = msg_send![list, addSubview: caption_label];
    if let Some(n) = entry.shortcut {
        let hint = label(
            &format!("⌃{}", n),
            NSRect::new(
                NSPoint::new(PAD + content_width - 28.0, y + 4.0),
                NSSize::new(28.0, CAPTION_HEIGHT),
            ),
            10.0,
            true,
            gray,
        );
        let _: () = msg_send![hint, setAlignment: 2isize]; // NSTextAlignmentRight
        let _: () = msg_send![list, addSubview: hint];
    }

    let body = NSRect::new(
        NSPoint::new(PAD, y + CAPTION_HEIGHT + 6.0),
        NSSize::new(content_width, POPUP_ROW_HEIGHT - CAPTION_HEIGHT - 12.0),
    );
    match (&entry.text, &row.image_path) {
        (Some(text), _) => add_text(list, text, body),
        (None, Some(path)) => add_image(list, path, body),
        (None, None) => {}
    }

    // Actions
    let x = width - BUTTON_WIDTH - PAD;
    let actions = [
        ("Paste", sel!(rowPaste:)),
        (if entry.pinned { "Unpin" } else { "Pin" }, sel!(rowTogglePin:)),
        ("Remove", sel!(rowRemove:)),
    ];
    for (i, (title, action)) in actions.into_iter().enumerate() {
        let btn = button(
            title,
            NSRect::new(
                NSPoint::new(x, y + 4.0 + i as f64 * (BUTTON_HEIGHT + 5.0)),
                NSSize::new(BUTTON_WIDTH, BUTTON_HEIGHT),
            ),
            controller,
            action,
        );
        let _: () = msg_send![btn, setTag: entry.index as isize];
        let _: () = msg_send![list, addSubview: btn];
    }
}

unsafe fn add_text(list: id, text: &str, frame: NSRect) {
    let white: id = msg_send![get_class("NSColor"), whiteColor];
    let field = label(text, frame, 12.0, false, white);
    let _: () = msg_send![field, setMaximumNumberOfLines: 3isize];
    let _: () = msg_send![field, setLineBreakMode: TRUNCATE_TAIL];
    let _: () = msg_send![list, addSubview: field];
}

unsafe fn add_image(list: id, path: &std::path::Path, frame: NSRect) {
    let image: id = msg_send![get_class("NSImage"), alloc];
    let image: id = msg_send![
        image,
        initWithContentsOfFile: nsstring_id(&path.to_string_lossy())
    ];
    if image == nil {
        log::warn!("Could not load thumbnail {}", path.display());
        return;
    }
    let view: id = msg_send![get_class("NSImageView"), imageViewWithImage: image];
    let _: () = msg_send![image, release];
    let _: () = msg_send![view, setFrame: frame];
    let _: () = msg_send![view, setImageScaling: IMAGE_SCALE_DOWN];
    let _: () = msg_send![view, setImageAlignment: 4usize]; // NSImageAlignLeft
    let _: () = msg_send![list, addSubview: view];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_height_grows_per_row() {
        assert_eq!(content_height(0), 0.0);
        assert_eq!(content_height(2), 2.0 * (POPUP_ROW_HEIGHT + POPUP_ROW_SPACING));
    }
}
