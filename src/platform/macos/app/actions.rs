//! Clipboard flows that touch AppKit: polling, copy/cut capture, paste,
//! and permission polling.
//!
//! Each flow takes the state borrow only for the bookkeeping step and
//! releases it before calling anything that can spin the run loop.

use crate::clipboard::{ClipboardManager, PasteboardChange};
use crate::events::{publish, AppEvent};
use crate::error::{ClipError, Result};
use crate::model::constants::{DEFAULT_PASTE_DELAY_SECS, LOG_PREVIEW_CHARS};
use crate::model::{ClipContent, ClipboardItem};
use crate::platform::macos::app::focus::{remember_frontmost_app, restore_previous_app};
use crate::platform::macos::app::helpers::perform_after_delay;
use crate::platform::macos::app::state::with_state;
use crate::platform::macos::ffi::bridge::{id, sel};
use crate::platform::macos::ffi::is_process_trusted;
use crate::platform::macos::input::{post_command_shortcut, SyntheticShortcut};
use crate::platform::macos::pasteboard::{self, PasteboardContent};
use crate::platform::macos::ui::popup;

fn record_content(manager: &mut ClipboardManager, content: PasteboardContent) -> Option<ClipboardItem> {
    match content {
        PasteboardContent::Text(text) => manager.record_text(&text),
        PasteboardContent::Png(bytes) => match manager.record_png(&bytes) {
            Ok(item) => Some(item),
            Err(e) => {
                log::error!("Failed to store copied image: {}", e);
                None
            }
        },
    }
}

/// Read the pasteboard and record whatever it holds.
unsafe fn capture_current() -> Option<ClipboardItem> {
    let content = pasteboard::read_content()?;
    with_state(|s| record_content(&mut s.manager, content)).flatten()
}

/// Timer callback: record copies made by other applications.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn poll_pasteboard(controller: id) {
    let count = pasteboard::change_count();
    if with_state(|s| s.tracker.observe(count)) != Some(PasteboardChange::External) {
        return;
    }
    if let Some(item) = capture_current() {
        log::debug!("Recorded copy: {}", item.preview(LOG_PREVIEW_CHARS));
        if popup::is_visible(controller) {
            popup::refresh(controller);
        }
    }
}

/// Ctrl+C / Ctrl+X: forward the system shortcut to the focused app and
/// pick up the result once the app had time to write the pasteboard.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn begin_capture(controller: id, shortcut: SyntheticShortcut) {
    remember_frontmost_app(controller);
    let start = pasteboard::change_count();
    let delay = with_state(|s| {
        s.capture_start = Some(start);
        s.config.paste_delay_secs
    })
    .unwrap_or(DEFAULT_PASTE_DELAY_SECS);

    if let Err(e) = post_command_shortcut(shortcut) {
        log::error!("Failed to send {:?}: {}", shortcut, e);
        with_state(|s| s.capture_start = None);
        return;
    }
    perform_after_delay(controller, sel!(finishCapture), delay);
}

/// Deferred half of [`begin_capture`].
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn finish_capture(controller: id) {
    let Some((start, show_popup)) =
        with_state(|s| s.capture_start.take().map(|start| (start, s.config.show_popup_on_copy)))
            .flatten()
    else {
        return;
    };

    let count = pasteboard::change_count();
    if count == start {
        log::warn!("Nothing was copied (no selection?)");
        return;
    }
    // The poller may already have seen this count; recording again only
    // refreshes the item's position.
    with_state(|s| s.tracker.observe(count));

    match capture_current() {
        Some(item) => {
            log::info!("Captured: {}", item.preview(LOG_PREVIEW_CHARS));
            if show_popup {
                popup::open(controller);
            } else if popup::is_visible(controller) {
                popup::refresh(controller);
            }
        }
        None => log::warn!("Pasteboard changed but held nothing recordable"),
    }
}

/// Put `item` on the pasteboard. Returns the resulting change count.
unsafe fn write_item(item: &ClipboardItem) -> Result<i64> {
    match &item.content {
        ClipContent::Text(text) => pasteboard::write_text(text),
        ClipContent::ImageFile(name) => {
            let bytes = with_state(|s| s.manager.images().read(name))
                .ok_or_else(|| ClipError::Pasteboard("app state unavailable".into()))??;
            pasteboard::write_png(&bytes)
        }
        ClipContent::ImageBase64(_) => Err(ClipError::Pasteboard(
            "legacy inline image cannot be pasted".into(),
        )),
    }
}

/// Paste a history item into the application the user was working in.
///
/// # Safety
/// Must be called from main thread; `controller` must be the app controller.
pub unsafe fn paste_item(controller: id, item: &ClipboardItem) {
    let count = match write_item(item) {
        Ok(count) => count,
        Err(e) => {
            log::error!("Paste abandoned: {}", e);
            return;
        }
    };

    let delay = with_state(|s| {
        s.tracker.mark_self_write(count);
        s.manager.promote(item);
        s.config.paste_delay_secs
    })
    .unwrap_or(DEFAULT_PASTE_DELAY_SECS);

    popup::close(controller);
    restore_previous_app(controller);
    perform_after_delay(controller, sel!(performPaste), delay);
}

/// Deferred half of [`paste_item`]: send Cmd+V to the restored app.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn perform_paste() {
    if !is_process_trusted() {
        log::warn!("Accessibility access missing, item left on the pasteboard");
        return;
    }
    if let Err(e) = post_command_shortcut(SyntheticShortcut::Paste) {
        log::error!("Failed to send Cmd+V: {}", e);
    }
}

/// Timer callback: publish trust transitions.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn poll_permission() {
    let trusted = is_process_trusted();
    if let Some(state) = with_state(|s| s.permission.observe(trusted)).flatten() {
        publish(AppEvent::PermissionChanged(state));
    }
}
