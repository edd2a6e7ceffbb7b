//! What the popup shows: displayable history entries in order.
//!
//! Rows and the Ctrl+1..9 shortcuts both index into this list, so a legacy
//! item that cannot be shown never shifts the numbering.

use chrono::{DateTime, Local, Utc};

use super::manager::ClipboardManager;
use crate::model::constants::{PREVIEW_CHARS, SHORTCUT_SLOTS};
use crate::model::ClipboardItem;

/// One row of the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Position in the history (used as the row's action tag).
    pub index: usize,
    /// Text preview, or `None` for images.
    pub text: Option<String>,
    /// Stored image name for image rows.
    pub image_name: Option<String>,
    pub pinned: bool,
    /// Caption above the row.
    pub time_label: String,
    /// 1-based Ctrl+N hint for the first rows.
    pub shortcut: Option<usize>,
}

/// Caption for a row, in local time.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%-d %b %Y, %H:%M").to_string()
}

/// Displayable entries, newest first.
pub fn entries(manager: &ClipboardManager) -> Vec<ListEntry> {
    manager
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_displayable())
        .enumerate()
        .map(|(pos, (index, item))| ListEntry {
            index,
            text: item.text_value().map(|_| item.preview(PREVIEW_CHARS)),
            image_name: item.image_file_name().map(str::to_string),
            pinned: manager.is_pinned(item),
            time_label: format_timestamp(&item.timestamp),
            shortcut: (pos < SHORTCUT_SLOTS).then_some(pos + 1),
        })
        .collect()
}

/// The item Ctrl+<n+1> refers to.
pub fn item_for_shortcut(manager: &ClipboardManager, n: usize) -> Option<&ClipboardItem> {
    manager
        .items()
        .iter()
        .filter(|item| item.is_displayable())
        .nth(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClipContent, ClipboardItem};
    use crate::storage::AppPaths;

    fn manager() -> ClipboardManager {
        ClipboardManager::new(&AppPaths::in_dir("/nonexistent/clipshelf-listing"), 50)
    }

    #[test]
    fn legacy_items_are_skipped_without_shifting_shortcuts() {
        let mut m = manager();
        m.record(ClipboardItem::text("old"));
        m.record(ClipboardItem::new(ClipContent::ImageBase64("!!".into())));
        m.record(ClipboardItem::text("new"));

        let list = entries(&m);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].index, 0);
        assert_eq!(list[1].index, 2);
        assert_eq!(list[1].shortcut, Some(2));
        assert_eq!(item_for_shortcut(&m, 1).and_then(|i| i.text_value()), Some("old"));
    }

    #[test]
    fn shortcut_hints_stop_after_nine() {
        let mut m = manager();
        for i in 0..12 {
            m.record(ClipboardItem::text(format!("item {}", i)));
        }
        let list = entries(&m);
        assert_eq!(list[8].shortcut, Some(9));
        assert_eq!(list[9].shortcut, None);
        assert!(item_for_shortcut(&m, 20).is_none());
    }

    #[test]
    fn image_rows_carry_file_name() {
        let mut m = manager();
        m.record(ClipboardItem::image_file("abc.png"));
        let list = entries(&m);
        assert_eq!(list[0].text, None);
        assert_eq!(list[0].image_name.as_deref(), Some("abc.png"));
    }
}
