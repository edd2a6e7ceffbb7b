//! General pasteboard access.

use crate::error::{ClipError, Result};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsdata_from_slice, nsdata_to_vec, nsstring_id,
    nsstring_to_string,
};

const TYPE_STRING: &str = "public.utf8-plain-text";
const TYPE_PNG: &str = "public.png";
const TYPE_TIFF: &str = "public.tiff";

// NSBitmapImageFileType
const BITMAP_FILE_TYPE_PNG: u64 = 4;

/// What the pasteboard currently offers, in the form history stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteboardContent {
    Text(String),
    Png(Vec<u8>),
}

unsafe fn general() -> id {
    msg_send![get_class("NSPasteboard"), generalPasteboard]
}

/// Counter incremented by every write to the general pasteboard.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn change_count() -> i64 {
    let count: isize = msg_send![general(), changeCount];
    count as i64
}

/// Read text, or failing that an image converted to PNG.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn read_content() -> Option<PasteboardContent> {
    let pb = general();

    let s: id = msg_send![pb, stringForType: nsstring_id(TYPE_STRING)];
    if let Some(text) = nsstring_to_string(s) {
        if !text.is_empty() {
            return Some(PasteboardContent::Text(text));
        }
    }

    let png: id = msg_send![pb, dataForType: nsstring_id(TYPE_PNG)];
    if let Some(bytes) = nsdata_to_vec(png) {
        return Some(PasteboardContent::Png(bytes));
    }

    let tiff: id = msg_send![pb, dataForType: nsstring_id(TYPE_TIFF)];
    if tiff != nil {
        match tiff_to_png(tiff) {
            Some(bytes) => return Some(PasteboardContent::Png(bytes)),
            None => log::warn!("Could not convert TIFF pasteboard data to PNG"),
        }
    }

    None
}

unsafe fn tiff_to_png(tiff: id) -> Option<Vec<u8>> {
    let rep: id = msg_send![get_class("NSBitmapImageRep"), imageRepWithData: tiff];
    if rep == nil {
        return None;
    }
    let props: id = msg_send![get_class("NSDictionary"), dictionary];
    let png: id = msg_send![rep, representationUsingType: BITMAP_FILE_TYPE_PNG, properties: props];
    nsdata_to_vec(png)
}

/// Replace the pasteboard contents with `text`. Returns the new change count.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn write_text(text: &str) -> Result<i64> {
    let pb = general();
    let _: isize = msg_send![pb, clearContents];
    let ok: bool = msg_send![pb, setString: nsstring_id(text), forType: nsstring_id(TYPE_STRING)];
    if !ok {
        return Err(ClipError::Pasteboard("setString:forType: failed".into()));
    }
    Ok(change_count())
}

/// Replace the pasteboard contents with an image, offered as PNG and TIFF.
/// Returns the new change count.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn write_png(png: &[u8]) -> Result<i64> {
    let pb = general();
    let png_data = nsdata_from_slice(png);

    let image: id = msg_send![get_class("NSImage"), alloc];
    let image: id = msg_send![image, initWithData: png_data];
    let tiff: id = if image != nil {
        let tiff: id = msg_send![image, TIFFRepresentation];
        let _: () = msg_send![image, release];
        tiff
    } else {
        nil
    };

    let _: isize = msg_send![pb, clearContents];
    let ok: bool = msg_send![pb, setData: png_data, forType: nsstring_id(TYPE_PNG)];
    if !ok {
        return Err(ClipError::Pasteboard("setData:forType: failed for PNG".into()));
    }
    if tiff != nil {
        let _: bool = msg_send![pb, setData: tiff, forType: nsstring_id(TYPE_TIFF)];
    }
    Ok(change_count())
}
