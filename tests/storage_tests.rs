//! Persistence tests against a temporary data directory.

use std::collections::HashSet;
use std::fs;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::TempDir;

use clipshelf::storage::images::hash_bytes;
use clipshelf::storage::{AppPaths, ImageStore, PinnedStore};
use clipshelf::{ClipContent, ClipboardItem, ClipboardManager};

const LIMIT: usize = 100;

// Smallest valid PNG: 1x1 transparent pixel.
const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn setup() -> (TempDir, AppPaths) {
    let dir = TempDir::new().unwrap();
    let paths = AppPaths::in_dir(dir.path());
    (dir, paths)
}

fn texts(manager: &ClipboardManager) -> Vec<String> {
    manager
        .items()
        .iter()
        .filter_map(|i| i.text_value().map(String::from))
        .collect()
}

// === Pinned file ===

#[test]
fn missing_file_is_empty() {
    let (_dir, paths) = setup();
    let store = PinnedStore::new(&paths.pinned_file);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn pinned_round_trip_preserves_order_and_timestamps() {
    let (_dir, paths) = setup();
    let store = PinnedStore::new(&paths.pinned_file);
    let items = vec![ClipboardItem::text("first"), ClipboardItem::image_file("abc.png")];

    store.save(&items).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, items);
    assert_eq!(loaded[0].timestamp, items[0].timestamp);
}

#[test]
fn file_uses_tagged_json() {
    let (_dir, paths) = setup();
    PinnedStore::new(&paths.pinned_file)
        .save(&[ClipboardItem::text("hello")])
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.pinned_file).unwrap()).unwrap();
    assert_eq!(json[0]["type"], "text");
    assert_eq!(json[0]["value"], "hello");
    assert!(json[0]["timestamp"].is_string());
}

#[test]
fn corrupt_file_loads_as_empty_history() {
    let (_dir, paths) = setup();
    fs::create_dir_all(&paths.root).unwrap();
    fs::write(&paths.pinned_file, "{ not json").unwrap();

    assert!(PinnedStore::new(&paths.pinned_file).load().is_err());
    let manager = ClipboardManager::load(&paths, LIMIT);
    assert!(manager.items().is_empty());
}

#[test]
fn truncated_file_keeps_pinned_images_and_file() {
    let (_dir, paths) = setup();
    let name = {
        let mut m = ClipboardManager::load(&paths, LIMIT);
        let image = m.record_png(PNG_1X1).unwrap();
        m.record_text("note");
        m.toggle_pin(&image);
        m.toggle_pin(&ClipboardItem::text("note"));
        image.image_file_name().unwrap().to_string()
    };
    let mut bytes = fs::read(&paths.pinned_file).unwrap();
    bytes.truncate(bytes.len() - 3);
    fs::write(&paths.pinned_file, &bytes).unwrap();

    let mut m = ClipboardManager::load(&paths, LIMIT);
    assert!(m.items().is_empty());
    assert!(m.is_pinned_file_unreadable());
    assert!(m.images().file_path(&name).is_some());

    // Later pin changes and evictions leave both the file and the image alone.
    m.record_text("fresh");
    m.toggle_pin(&ClipboardItem::text("fresh"));
    let other = m.record_png(b"\x89PNG\r\n\x1a\nother").unwrap();
    m.remove(&other);
    assert_eq!(fs::read(&paths.pinned_file).unwrap(), bytes);
    assert!(m.images().file_path(&name).is_some());
}

// === Manager persistence ===

#[test]
fn restart_restores_only_pinned_items() {
    let (_dir, paths) = setup();
    {
        let mut m = ClipboardManager::load(&paths, LIMIT);
        m.record_text("scratch");
        m.record_text("keeper");
        m.record_text("also kept");
        m.toggle_pin(&ClipboardItem::text("keeper"));
        m.toggle_pin(&ClipboardItem::text("also kept"));
    }

    let m = ClipboardManager::load(&paths, LIMIT);
    assert_eq!(texts(&m), vec!["also kept", "keeper"]);
    assert!(m.items().iter().all(|i| m.is_pinned(i)));
}

#[test]
fn unpinning_removes_from_file() {
    let (_dir, paths) = setup();
    let mut m = ClipboardManager::load(&paths, LIMIT);
    m.record_text("temp");
    m.toggle_pin(&ClipboardItem::text("temp"));
    m.toggle_pin(&ClipboardItem::text("temp"));

    let loaded = PinnedStore::new(&paths.pinned_file).load().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn removing_pinned_item_persists() {
    let (_dir, paths) = setup();
    let mut m = ClipboardManager::load(&paths, LIMIT);
    m.record_text("gone");
    m.toggle_pin(&ClipboardItem::text("gone"));
    assert!(m.remove(&ClipboardItem::text("gone")));

    assert!(!m.is_pinned(&ClipboardItem::text("gone")));
    let m = ClipboardManager::load(&paths, LIMIT);
    assert!(m.items().is_empty());
}

#[test]
fn promoting_pinned_item_keeps_pin_and_file() {
    let (_dir, paths) = setup();
    let mut m = ClipboardManager::load(&paths, LIMIT);
    m.record_text("a");
    m.record_text("b");
    m.record_text("c");
    m.toggle_pin(&ClipboardItem::text("b"));
    let before = fs::read_to_string(&paths.pinned_file).unwrap();

    m.promote(&ClipboardItem::text("b"));

    assert_eq!(texts(&m), vec!["b", "c", "a"]);
    assert!(m.is_pinned(&ClipboardItem::text("b")));
    assert_eq!(m.items().len(), 3);
    assert_eq!(fs::read_to_string(&paths.pinned_file).unwrap(), before);
}

#[test]
fn empty_text_is_ignored() {
    let (_dir, paths) = setup();
    let mut m = ClipboardManager::new(&paths, LIMIT);
    assert!(m.record_text("").is_none());
    assert!(m.items().is_empty());
}

// === Images ===

#[test]
fn images_are_named_by_content_hash() {
    let (_dir, paths) = setup();
    let store = ImageStore::new(&paths.images_dir);

    let name = store.save_png(PNG_1X1).unwrap();
    assert_eq!(name, format!("{}.png", hash_bytes(PNG_1X1)));
    assert_eq!(store.save_png(PNG_1X1).unwrap(), name);
    assert_eq!(store.read(&name).unwrap(), PNG_1X1);
}

#[test]
fn missing_image_is_reported() {
    let (_dir, paths) = setup();
    let store = ImageStore::new(&paths.images_dir);
    assert!(store.read("nope.png").is_err());
    assert!(store.file_path("nope.png").is_none());
}

#[test]
fn cleanup_keeps_referenced_files_only() {
    let (_dir, paths) = setup();
    let store = ImageStore::new(&paths.images_dir);
    let keep = store.save_png(PNG_1X1).unwrap();
    let stale = store.save_png(b"not really a png").unwrap();

    let referenced: HashSet<String> = [keep.clone()].into_iter().collect();
    assert_eq!(store.cleanup_unused(&referenced).unwrap(), 1);
    assert!(store.file_path(&keep).is_some());
    assert!(store.file_path(&stale).is_none());
}

#[test]
fn same_image_copied_twice_is_one_item() {
    let (_dir, paths) = setup();
    let mut m = ClipboardManager::new(&paths, LIMIT);
    m.record_png(PNG_1X1).unwrap();
    m.record_text("between");
    m.record_png(PNG_1X1).unwrap();

    assert_eq!(m.items().len(), 2);
    assert!(m.items()[0].image_file_name().is_some());
}

#[test]
fn evicted_image_file_is_deleted() {
    let (_dir, paths) = setup();
    let mut m = ClipboardManager::new(&paths, 2);
    let image = m.record_png(PNG_1X1).unwrap();
    let name = image.image_file_name().unwrap().to_string();
    m.record_text("one");
    m.record_text("two");

    assert!(!m.items().contains(&image));
    assert!(m.images().file_path(&name).is_none());
}

#[test]
fn unreferenced_images_are_removed_on_load() {
    let (_dir, paths) = setup();
    let store = ImageStore::new(&paths.images_dir);
    let stale = store.save_png(PNG_1X1).unwrap();

    let _m = ClipboardManager::load(&paths, LIMIT);
    assert!(store.file_path(&stale).is_none());
}

#[test]
fn legacy_inline_images_migrate_to_files() {
    let (_dir, paths) = setup();
    let legacy = ClipboardItem::new(ClipContent::ImageBase64(STANDARD.encode(PNG_1X1)));
    PinnedStore::new(&paths.pinned_file)
        .save(&[legacy.clone(), ClipboardItem::text("note")])
        .unwrap();

    let m = ClipboardManager::load(&paths, LIMIT);
    let expected = format!("{}.png", hash_bytes(PNG_1X1));
    assert_eq!(m.items()[0].image_file_name(), Some(expected.as_str()));
    assert_eq!(m.items()[0].timestamp, legacy.timestamp);
    assert!(m.images().file_path(&expected).is_some());

    // The migrated form is what gets persisted.
    let saved = PinnedStore::new(&paths.pinned_file).load().unwrap();
    assert!(saved
        .iter()
        .all(|i| !matches!(i.content, ClipContent::ImageBase64(_))));
}

#[test]
fn legacy_non_png_image_stays_inline() {
    let (_dir, paths) = setup();
    let legacy = ClipboardItem::new(ClipContent::ImageBase64(STANDARD.encode(b"GIF89a....")));
    PinnedStore::new(&paths.pinned_file)
        .save(&[legacy.clone()])
        .unwrap();

    let m = ClipboardManager::load(&paths, LIMIT);
    assert_eq!(m.items(), &[legacy.clone()]);
    assert!(matches!(m.items()[0].content, ClipContent::ImageBase64(_)));
    assert!(m.is_pinned(&legacy));
    assert_eq!(PinnedStore::new(&paths.pinned_file).load().unwrap(), vec![legacy]);
}
