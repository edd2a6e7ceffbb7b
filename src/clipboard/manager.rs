//! History bookkeeping tied to persistence.
//!
//! `ClipboardManager` owns the in-memory [`History`] and writes the pinned
//! set to disk whenever it changes. Storage failures are logged and leave
//! the in-memory state intact. If the pinned file cannot be read at load,
//! the manager stops writing it and stops deleting image files for the rest
//! of the session.

use std::collections::HashSet;

use crate::error::Result;
use crate::model::constants::LOG_PREVIEW_CHARS;
use crate::model::{ClipContent, ClipboardItem, History, InsertOutcome};
use crate::storage::{AppPaths, ImageStore, PinnedStore};

#[derive(Debug)]
pub struct ClipboardManager {
    history: History,
    pinned_store: PinnedStore,
    images: ImageStore,
    /// Set when the pinned file existed but could not be read.
    pinned_unreadable: bool,
}

impl ClipboardManager {
    /// Empty manager writing under `paths`.
    pub fn new(paths: &AppPaths, limit: usize) -> Self {
        Self {
            history: History::new(limit),
            pinned_store: PinnedStore::new(&paths.pinned_file),
            images: ImageStore::new(&paths.images_dir),
            pinned_unreadable: false,
        }
    }

    /// Manager whose initial history is the persisted pinned set.
    ///
    /// Legacy inline images are moved into the image directory, and image
    /// files nothing refers to anymore are deleted.
    pub fn load(paths: &AppPaths, limit: usize) -> Self {
        let mut manager = Self::new(paths, limit);
        let pinned = match manager.pinned_store.load() {
            Ok(items) => items,
            Err(e) => {
                log::error!(
                    "Failed to load pinned items from {}: {}",
                    manager.pinned_store.path().display(),
                    e
                );
                log::warn!("Pinned file and image directory are left untouched this session");
                manager.pinned_unreadable = true;
                Vec::new()
            }
        };

        let (pinned, migrated) = manager.migrate_legacy_images(pinned);
        log::info!("Loaded {} pinned items", pinned.len());
        manager.history = History::from_pinned(pinned, limit);
        if migrated > 0 {
            log::info!("Migrated {} inline images to files", migrated);
            manager.persist_pinned();
        }
        manager.cleanup_images();
        manager
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn items(&self) -> &[ClipboardItem] {
        self.history.items()
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    pub fn is_pinned(&self, item: &ClipboardItem) -> bool {
        self.history.is_pinned(item)
    }

    /// Apply the dedup/cap policy to a new item.
    pub fn record(&mut self, item: ClipboardItem) -> InsertOutcome {
        let outcome = self.history.insert(item);
        if outcome
            .evicted
            .iter()
            .any(|evicted| evicted.image_file_name().is_some())
        {
            self.cleanup_images();
        }
        outcome
    }

    /// Record copied text. Empty strings are ignored.
    pub fn record_text(&mut self, text: &str) -> Option<ClipboardItem> {
        if text.is_empty() {
            return None;
        }
        let item = ClipboardItem::text(text);
        self.record(item.clone());
        Some(item)
    }

    /// Store PNG bytes and record the resulting image item.
    pub fn record_png(&mut self, png: &[u8]) -> Result<ClipboardItem> {
        let name = self.images.save_png(png)?;
        let item = ClipboardItem::image_file(name);
        self.record(item.clone());
        Ok(item)
    }

    /// Move an existing item to the front (used after pasting it).
    pub fn promote(&mut self, item: &ClipboardItem) {
        self.record(ClipboardItem::new(item.content.clone()));
    }

    /// Flip an item's pinned state and persist the pinned set.
    pub fn toggle_pin(&mut self, item: &ClipboardItem) -> Option<bool> {
        let pinned = self.history.toggle_pin(item)?;
        log::info!(
            "{} item: {}",
            if pinned { "Pinned" } else { "Unpinned" },
            item.preview(LOG_PREVIEW_CHARS)
        );
        self.persist_pinned();
        Some(pinned)
    }

    /// Remove an item from history and the pinned set.
    pub fn remove(&mut self, item: &ClipboardItem) -> bool {
        let was_pinned = self.history.is_pinned(item);
        if !self.history.remove(item) {
            return false;
        }
        if was_pinned {
            self.persist_pinned();
        }
        if item.image_file_name().is_some() {
            self.cleanup_images();
        }
        true
    }

    /// True when the pinned file failed to load and is being left alone.
    pub fn is_pinned_file_unreadable(&self) -> bool {
        self.pinned_unreadable
    }

    fn save_pinned(&self) -> Result<()> {
        self.pinned_store.save(&self.history.pinned_items())
    }

    fn persist_pinned(&self) {
        if self.pinned_unreadable {
            log::warn!("Not saving pinned items over the unreadable pinned file");
            return;
        }
        if let Err(e) = self.save_pinned() {
            log::error!("Failed to save pinned items: {}", e);
        }
    }

    /// Image names still referenced by history or the pinned set.
    pub fn referenced_images(&self) -> HashSet<String> {
        self.history
            .items()
            .iter()
            .chain(self.history.pinned().iter())
            .filter_map(|item| item.image_file_name().map(str::to_string))
            .collect()
    }

    fn cleanup_images(&self) {
        if self.pinned_unreadable {
            return;
        }
        if let Err(e) = self.images.cleanup_unused(&self.referenced_images()) {
            log::error!("Failed to clean up images: {}", e);
        }
    }

    fn migrate_legacy_images(&self, items: Vec<ClipboardItem>) -> (Vec<ClipboardItem>, usize) {
        let mut migrated = 0;
        let items = items
            .into_iter()
            .map(|item| {
                let saved = match &item.content {
                    ClipContent::ImageBase64(data) => Some(self.images.save_base64(data)),
                    _ => None,
                };
                match saved {
                    None => item,
                    Some(Ok(name)) => {
                        migrated += 1;
                        ClipboardItem::with_timestamp(ClipContent::ImageFile(name), item.timestamp)
                    }
                    Some(Err(e)) => {
                        log::warn!("Keeping undecodable inline image: {}", e);
                        item
                    }
                }
            })
            .collect();
        (items, migrated)
    }
}
