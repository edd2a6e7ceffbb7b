//! Image files referenced by history entries.
//!
//! Images are stored as PNG and named after the SHA-256 of their bytes, so
//! copying the same image twice yields the same history item.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::error::{ClipError, Result};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory if needed.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
            log::info!("Created image directory {}", self.dir.display());
        }
        Ok(())
    }

    /// Store PNG bytes and return the file name.
    pub fn save_png(&self, png: &[u8]) -> Result<String> {
        self.ensure_dir()?;
        let name = format!("{}.png", hash_bytes(png));
        let path = self.dir.join(&name);
        if !path.exists() {
            fs::write(&path, png)?;
            log::info!("Saved image {}", name);
        }
        Ok(name)
    }

    /// Decode legacy base64 data and store it. Only PNG payloads are
    /// accepted, since stored files are always named `*.png`.
    pub fn save_base64(&self, data: &str) -> Result<String> {
        let bytes = STANDARD.decode(data.trim())?;
        if !bytes.starts_with(PNG_SIGNATURE) {
            return Err(ClipError::NotPng);
        }
        self.save_png(&bytes)
    }

    /// Full path of a stored image, if it exists.
    pub fn file_path(&self, name: &str) -> Option<PathBuf> {
        let path = self.dir.join(name);
        path.is_file().then_some(path)
    }

    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self
            .file_path(name)
            .ok_or_else(|| ClipError::ImageNotFound(name.to_string()))?;
        Ok(fs::read(path)?)
    }

    /// Delete every file not named in `referenced`. Returns how many were
    /// removed.
    pub fn cleanup_unused(&self, referenced: &HashSet<String>) -> Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !referenced.contains(&name) {
                fs::remove_file(entry.path())?;
                log::info!("Removed unused image {}", name);
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Lowercase hex SHA-256 of `data`.
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn base64_without_png_signature_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ImageStore::new(dir.path().join("images"));
        let tiff = STANDARD.encode(b"II*\x00 tiff-ish bytes");

        assert!(matches!(store.save_base64(&tiff), Err(ClipError::NotPng)));
        assert!(!store.dir().exists());
    }
}
