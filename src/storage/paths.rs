//! Locations of the app's files.

use std::path::{Path, PathBuf};

use crate::error::{ClipError, Result};
use crate::model::constants::{APP_DIR_NAME, IMAGES_DIR_NAME, PINNED_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub root: PathBuf,
    pub pinned_file: PathBuf,
    pub images_dir: PathBuf,
}

impl AppPaths {
    /// Paths under the user's data directory.
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_dir().ok_or(ClipError::DataDirUnavailable)?;
        Ok(Self::in_dir(base.join(APP_DIR_NAME)))
    }

    /// Paths rooted at an explicit directory.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            pinned_file: root.join(PINNED_FILE_NAME),
            images_dir: root.join(IMAGES_DIR_NAME),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_lays_out_files() {
        let p = AppPaths::in_dir("/tmp/clipshelf-test");
        assert_eq!(p.pinned_file, PathBuf::from("/tmp/clipshelf-test/pinned_items.json"));
        assert_eq!(p.images_dir, PathBuf::from("/tmp/clipshelf-test/images"));
    }
}
