//! Article store interfaces and store location resolution.
//!
//! Ownership model:
//! - `ArticleSource` is the pipeline-facing "fetch all documents" capability.
//! - `StoreLocation` turns a store URI into a concrete source.
//! - Concrete sources live under `sources`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::store::{
    MEMORY_SOURCE_ID, SCHEME_DIR, SCHEME_FILE, SCHEME_JSON, SCHEME_JSONL,
};
use crate::data::RawDocument;
use crate::errors::DashboardError;
use crate::types::SourceId;

/// Source implementation modules.
pub mod sources;

pub use sources::directory_collection::DirectoryCollectionSource;
pub use sources::json_collection::JsonCollectionSource;

/// Read-only document store consumed by the pipeline.
///
/// Implementations perform a single unfiltered read per call. The pipeline
/// calls `fetch_all` once per render and never writes back.
pub trait ArticleSource {
    /// Stable store identifier used in logs and errors.
    fn id(&self) -> &str;
    /// Return every document in the collection, in store order.
    fn fetch_all(&self) -> Result<Vec<RawDocument>, DashboardError>;
}

impl<T: ArticleSource + ?Sized> ArticleSource for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn fetch_all(&self) -> Result<Vec<RawDocument>, DashboardError> {
        (**self).fetch_all()
    }
}

/// In-memory document store for tests and embedding.
pub struct InMemorySource {
    id: SourceId,
    documents: Arc<Vec<RawDocument>>,
}

impl InMemorySource {
    /// Create an in-memory store from prebuilt documents.
    pub fn new(documents: Vec<RawDocument>) -> Self {
        Self::with_id(MEMORY_SOURCE_ID, documents)
    }

    /// Create an in-memory store with an explicit id.
    pub fn with_id(id: impl Into<SourceId>, documents: Vec<RawDocument>) -> Self {
        Self {
            id: id.into(),
            documents: Arc::new(documents),
        }
    }
}

impl ArticleSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch_all(&self) -> Result<Vec<RawDocument>, DashboardError> {
        Ok(self.documents.as_ref().clone())
    }
}

/// Where the document collection lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    /// A single exported collection file (JSON array or JSON Lines).
    CollectionFile(PathBuf),
    /// A directory tree holding one JSON document per file.
    Directory(PathBuf),
}

impl StoreLocation {
    /// Parse a store URI.
    ///
    /// `jsonl://` and `json://` name collection files, `dir://` names a
    /// directory, and `file://` or a bare path is dispatched on whether the
    /// path is a directory. Other schemes are rejected.
    pub fn parse(uri: &str) -> Result<Self, DashboardError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(DashboardError::Configuration(
                "store URI must not be empty".into(),
            ));
        }
        if let Some(path) = uri
            .strip_prefix(SCHEME_JSONL)
            .or_else(|| uri.strip_prefix(SCHEME_JSON))
        {
            return Ok(Self::CollectionFile(non_empty_path(uri, path)?));
        }
        if let Some(path) = uri.strip_prefix(SCHEME_DIR) {
            return Ok(Self::Directory(non_empty_path(uri, path)?));
        }
        let path = match uri.strip_prefix(SCHEME_FILE) {
            Some(path) => non_empty_path(uri, path)?,
            None => {
                if let Some((scheme, _)) = uri.split_once("://") {
                    return Err(DashboardError::Configuration(format!(
                        "unsupported store scheme '{scheme}://'; expected a file or directory collection"
                    )));
                }
                PathBuf::from(uri)
            }
        };
        if path.is_dir() {
            Ok(Self::Directory(path))
        } else {
            Ok(Self::CollectionFile(path))
        }
    }

    /// Build the source reading this location.
    pub fn open(&self) -> Box<dyn ArticleSource> {
        match self {
            Self::CollectionFile(path) => Box::new(JsonCollectionSource::new(path)),
            Self::Directory(path) => Box::new(DirectoryCollectionSource::new(path)),
        }
    }
}

/// Parse `uri` and open the matching source.
pub fn open_store(uri: &str) -> Result<Box<dyn ArticleSource>, DashboardError> {
    Ok(StoreLocation::parse(uri)?.open())
}

/// Source id derived from the last path component.
pub(crate) fn source_id_for_path(path: &Path) -> SourceId {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn non_empty_path(uri: &str, path: &str) -> Result<PathBuf, DashboardError> {
    if path.trim().is_empty() {
        return Err(DashboardError::Configuration(format!(
            "store URI '{uri}' does not name a path"
        )));
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn in_memory_source_returns_documents_in_order() {
        let docs = vec![
            RawDocument::from_pairs([("title", json!("a"))]),
            RawDocument::from_pairs([("title", json!("b"))]),
        ];
        let source = InMemorySource::new(docs.clone());
        assert_eq!(source.id(), "memory");
        assert_eq!(source.fetch_all().unwrap(), docs);
        // Repeated reads see the same snapshot.
        assert_eq!(source.fetch_all().unwrap(), docs);
    }

    #[test]
    fn parse_handles_explicit_schemes() {
        assert_eq!(
            StoreLocation::parse("jsonl://data/articles.jsonl").unwrap(),
            StoreLocation::CollectionFile(PathBuf::from("data/articles.jsonl"))
        );
        assert_eq!(
            StoreLocation::parse("json:///tmp/articles.json").unwrap(),
            StoreLocation::CollectionFile(PathBuf::from("/tmp/articles.json"))
        );
        assert_eq!(
            StoreLocation::parse("dir://exports/article").unwrap(),
            StoreLocation::Directory(PathBuf::from("exports/article"))
        );
    }

    #[test]
    fn parse_dispatches_bare_and_file_paths_on_directory_check() {
        let temp = tempdir().unwrap();
        let dir_uri = format!("file://{}", temp.path().display());
        assert_eq!(
            StoreLocation::parse(&dir_uri).unwrap(),
            StoreLocation::Directory(temp.path().to_path_buf())
        );
        let file = temp.path().join("articles.jsonl");
        assert_eq!(
            StoreLocation::parse(file.to_str().unwrap()).unwrap(),
            StoreLocation::CollectionFile(file.clone())
        );
    }

    #[test]
    fn parse_rejects_unsupported_schemes_and_empty_values() {
        let err = StoreLocation::parse("mongodb://localhost:27017/utercare_db").unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(ref msg) if msg.contains("mongodb://")));
        assert!(matches!(
            StoreLocation::parse("   "),
            Err(DashboardError::Configuration(_))
        ));
        assert!(matches!(
            StoreLocation::parse("jsonl://"),
            Err(DashboardError::Configuration(_))
        ));
    }

    #[test]
    fn open_store_reads_collection_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("articles.jsonl");
        std::fs::write(&file, "{\"title\": \"x\"}\n").unwrap();
        let source = open_store(&format!("jsonl://{}", file.display())).unwrap();
        assert_eq!(source.id(), "articles.jsonl");
        assert_eq!(source.fetch_all().unwrap().len(), 1);
    }
}
