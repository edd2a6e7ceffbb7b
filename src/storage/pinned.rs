//! JSON file holding the pinned items.
//!
//! Only pinned items are durable. A missing file is an empty pin set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::ClipboardItem;

#[derive(Debug, Clone)]
pub struct PinnedStore {
    path: PathBuf,
}

impl PinnedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load pinned items in their saved order.
    pub fn load(&self) -> Result<Vec<ClipboardItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Replace the file with `items`.
    ///
    /// Writes to a sibling temp file first so a crash never leaves a
    /// truncated file behind.
    pub fn save(&self, items: &[ClipboardItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Saved {} pinned items to {}", items.len(), self.path.display());
        Ok(())
    }
}
