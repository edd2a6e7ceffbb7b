//! Clipboard history entries.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of a history entry.
///
/// Serialized as `{"type": "...", "value": "..."}` so the pinned file stays
/// readable and stable across versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum ClipContent {
    /// Plain text.
    Text(String),
    /// PNG stored in the image directory, by file name.
    ImageFile(String),
    /// Inline base64 image data (legacy format, migrated on load).
    ImageBase64(String),
}

/// Discriminant of [`ClipContent`], handy for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipKind {
    Text,
    ImageFile,
    ImageBase64,
}

/// One entry of the clipboard history.
///
/// Equality and hashing only look at the content; two copies of the same
/// text taken at different times are the same item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardItem {
    #[serde(flatten)]
    pub content: ClipContent,
    pub timestamp: DateTime<Utc>,
}

impl ClipboardItem {
    /// Create an item stamped with the current time.
    pub fn new(content: ClipContent) -> Self {
        Self::with_timestamp(content, Utc::now())
    }

    pub fn with_timestamp(content: ClipContent, timestamp: DateTime<Utc>) -> Self {
        Self { content, timestamp }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(ClipContent::Text(value.into()))
    }

    pub fn image_file(name: impl Into<String>) -> Self {
        Self::new(ClipContent::ImageFile(name.into()))
    }

    pub fn kind(&self) -> ClipKind {
        match self.content {
            ClipContent::Text(_) => ClipKind::Text,
            ClipContent::ImageFile(_) => ClipKind::ImageFile,
            ClipContent::ImageBase64(_) => ClipKind::ImageBase64,
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind() == ClipKind::Text
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            ClipContent::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn image_file_name(&self) -> Option<&str> {
        match &self.content {
            ClipContent::ImageFile(name) => Some(name),
            _ => None,
        }
    }

    /// Whether the popup can show (and paste) this item.
    pub fn is_displayable(&self) -> bool {
        matches!(self.kind(), ClipKind::Text | ClipKind::ImageFile)
    }

    /// Single-line label: whitespace collapsed, cut at `max_chars` with an
    /// ellipsis.
    pub fn preview(&self, max_chars: usize) -> String {
        match &self.content {
            ClipContent::Text(s) => truncate_chars(&collapse_whitespace(s), max_chars),
            ClipContent::ImageFile(_) | ClipContent::ImageBase64(_) => "Image".to_string(),
        }
    }
}

impl PartialEq for ClipboardItem {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for ClipboardItem {}

impl Hash for ClipboardItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn equality_ignores_timestamp() {
        let a = ClipboardItem::with_timestamp(
            ClipContent::Text("hello".into()),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        let b = ClipboardItem::with_timestamp(
            ClipContent::Text("hello".into()),
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn same_value_different_type_is_different_item() {
        assert_ne!(ClipboardItem::text("a.png"), ClipboardItem::image_file("a.png"));
    }

    #[test]
    fn serializes_type_and_value_fields() {
        let item = ClipboardItem::with_timestamp(
            ClipContent::ImageFile("abc.png".into()),
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "imageFile");
        assert_eq!(json["value"], "abc.png");
        assert_eq!(json["timestamp"], "2025-01-02T03:04:05Z");
    }

    #[test]
    fn deserializes_legacy_base64_entry() {
        let json = r#"{"type":"imageBase64","value":"aGk=","timestamp":"2025-01-02T03:04:05Z"}"#;
        let item: ClipboardItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind(), ClipKind::ImageBase64);
        assert!(!item.is_displayable());
    }

    #[test]
    fn preview_collapses_whitespace_and_truncates() {
        let item = ClipboardItem::text("  first line\n\n  second\tline  ");
        assert_eq!(item.preview(100), "first line second line");
        assert_eq!(item.preview(8), "first l…");
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let item = ClipboardItem::text("čšťžýáíé");
        assert_eq!(item.preview(8), "čšťžýáíé");
        assert_eq!(item.preview(4), "čšť…");
    }

    #[test]
    fn accessors_match_variant() {
        let text = ClipboardItem::text("x");
        assert_eq!(text.text_value(), Some("x"));
        assert_eq!(text.image_file_name(), None);

        let image = ClipboardItem::image_file("x.png");
        assert_eq!(image.image_file_name(), Some("x.png"));
        assert_eq!(image.preview(10), "Image");
    }
}
