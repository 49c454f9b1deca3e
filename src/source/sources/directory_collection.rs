use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::constants::store::SKIP_UNREADABLE_MSG;
use crate::data::RawDocument;
use crate::errors::DashboardError;
use crate::source::{ArticleSource, source_id_for_path};
use crate::transport::fs::DocumentFileStream;
use crate::types::SourceId;

/// Collection stored as one JSON document per file under a root directory.
///
/// Files are read in sorted path order. A file that cannot be read or does
/// not hold a JSON object is logged and skipped; it never fails the load.
pub struct DirectoryCollectionSource {
    id: SourceId,
    root: PathBuf,
}

impl DirectoryCollectionSource {
    /// Create a source for the directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            id: source_id_for_path(&root),
            root,
        }
    }

    /// Override the source id.
    pub fn with_id(mut self, id: impl Into<SourceId>) -> Self {
        self.id = id.into();
        self
    }

    fn read_document(path: &Path) -> Result<RawDocument, String> {
        let payload = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
        match serde_json::from_str::<Value>(&payload).map_err(|err| err.to_string())? {
            Value::Object(map) => Ok(RawDocument {
                fields: map.into_iter().collect(),
            }),
            _ => Err("file does not hold a JSON object".to_string()),
        }
    }
}

impl ArticleSource for DirectoryCollectionSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch_all(&self) -> Result<Vec<RawDocument>, DashboardError> {
        if !self.root.is_dir() {
            return Err(DashboardError::SourceUnavailable {
                source_id: self.id.clone(),
                reason: format!("directory not found: {}", self.root.display()),
            });
        }
        let files = DocumentFileStream::new(&self.root).json_files();
        let mut documents = Vec::with_capacity(files.len());
        for path in &files {
            match Self::read_document(path) {
                Ok(document) => documents.push(document),
                Err(err) => {
                    warn!(
                        source_id = %self.id,
                        path = %path.display(),
                        error = %err,
                        SKIP_UNREADABLE_MSG
                    );
                }
            }
        }
        info!(
            source_id = %self.id,
            root = %self.root.display(),
            files = files.len(),
            documents = documents.len(),
            "loaded article directory"
        );
        Ok(documents)
    }
}
