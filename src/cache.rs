//! Per-document bookmark cache.
//!
//! Files are stored under `.cache/` using a hash of the document path as the
//! directory name to avoid filesystem issues. Each bookmark is a tiny TOML
//! file holding the reading position and zoom.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_DIR: &str = ".cache";

/// Saved reading position. `position` is a page index for fixed-page
/// documents and a vertical pixel offset for scroll documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub position: usize,
    #[serde(default = "default_zoom")]
    pub zoom: f32,
}

fn default_zoom() -> f32 {
    1.0
}

/// Load the cached bookmark for a given document path, if present.
pub fn load_bookmark(doc_path: &Path) -> Option<Bookmark> {
    load_bookmark_in(Path::new(CACHE_DIR), doc_path)
}

/// Persist a bookmark. Failures are logged and otherwise ignored to keep the
/// UI responsive.
pub fn save_bookmark(doc_path: &Path, bookmark: Bookmark) {
    save_bookmark_in(Path::new(CACHE_DIR), doc_path, bookmark);
}

fn load_bookmark_in(root: &Path, doc_path: &Path) -> Option<Bookmark> {
    let path = bookmark_path(root, doc_path);
    let data = fs::read_to_string(&path).ok()?;
    match toml::from_str(&data) {
        Ok(bookmark) => Some(bookmark),
        Err(err) => {
            warn!(path = %path.display(), "Ignoring unreadable bookmark: {err}");
            None
        }
    }
}

fn save_bookmark_in(root: &Path, doc_path: &Path, bookmark: Bookmark) {
    let path = bookmark_path(root, doc_path);
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "Failed to create cache directory: {err}");
            return;
        }
    }
    let contents = match toml::to_string(&bookmark) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("Failed to serialize bookmark: {err}");
            return;
        }
    };
    match fs::write(&path, contents) {
        Ok(()) => debug!(path = %path.display(), position = bookmark.position, "Saved bookmark"),
        Err(err) => warn!(path = %path.display(), "Failed to save bookmark: {err}"),
    }
}

fn hash_dir_in(root: &Path, doc_path: &Path) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(doc_path.as_os_str().to_string_lossy().as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    root.join(hash)
}

fn bookmark_path(root: &Path, doc_path: &Path) -> PathBuf {
    hash_dir_in(root, doc_path).join("bookmark.toml")
}
