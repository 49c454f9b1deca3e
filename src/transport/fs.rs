use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::constants::store::SKIP_UNREADABLE_MSG;

/// Filesystem walker that lists document files under a root.
pub struct DocumentFileStream {
    root: PathBuf,
}

impl DocumentFileStream {
    /// Create a stream rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return every `*.json` file below the root, sorted by path. Symlinks
    /// are followed.
    ///
    /// Walk errors (permission denied, broken links) are logged and skipped.
    pub fn json_files(&self) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_json_file(entry.path()) => {
                    candidates.push(entry.path().to_path_buf());
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(
                        root = %self.root.display(),
                        error = %err,
                        SKIP_UNREADABLE_MSG
                    );
                }
            }
        }
        candidates.sort();
        candidates
    }
}

/// Whether `path` has a `.json` extension (case-insensitive).
pub fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
