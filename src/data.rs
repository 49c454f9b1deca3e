use chrono::{Datelike, NaiveDateTime};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::fields::{
    FIELD_BODY, FIELD_LINK, FIELD_MONTH, FIELD_SOURCE, FIELD_TITLE, FIELD_WORD_COUNT,
};
use crate::utils::value_as_text;

pub use crate::types::{ColumnName, MonthBucket};

/// A document exactly as received from the store.
///
/// Field order is preserved so exported columns follow the store layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDocument {
    /// Field name to raw JSON value, in store order.
    pub fields: IndexMap<String, Value>,
}

impl RawDocument {
    /// Build a document from `(field, value)` pairs.
    pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Raw value of `field`, if the document carries it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Row carrying the raw document fields, readable by column name.
pub trait FieldRow {
    /// Raw document behind this row.
    fn document(&self) -> &RawDocument;
}

impl FieldRow for RawDocument {
    fn document(&self) -> &RawDocument {
        self
    }
}

/// In-memory working table threaded through the pipeline stages.
///
/// `columns` lists the raw document fields in order of first appearance,
/// followed by any derived columns appended by later stages.
#[derive(Clone, Debug, PartialEq)]
pub struct Table<R> {
    /// Column names in export order.
    pub columns: Vec<ColumnName>,
    /// Rows in store order.
    pub rows: Vec<R>,
}

impl<R> Table<R> {
    /// Create a table with an explicit column list.
    pub fn new(columns: Vec<ColumnName>, rows: Vec<R>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep the column list and replace the rows.
    pub fn with_rows<T>(&self, rows: Vec<T>) -> Table<T> {
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }
}

impl<R: Clone> Table<R> {
    /// New table holding the rows accepted by `keep`.
    pub fn retain_view(&self, mut keep: impl FnMut(&R) -> bool) -> Table<R> {
        self.with_rows(self.rows.iter().filter(|row| keep(row)).cloned().collect())
    }
}

impl Table<RawDocument> {
    /// Build a table whose columns are the union of all document fields.
    pub fn from_documents(documents: Vec<RawDocument>) -> Self {
        let mut columns: IndexSet<ColumnName> = IndexSet::new();
        for doc in &documents {
            for key in doc.fields.keys() {
                if !columns.contains(key) {
                    columns.insert(key.to_string());
                }
            }
        }
        Self {
            columns: columns.into_iter().collect(),
            rows: documents,
        }
    }
}

/// A document whose publish date parsed successfully.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    /// Document as read from the store.
    pub document: RawDocument,
    /// Parsed `tanggal_publish`.
    pub published_at: NaiveDateTime,
}

impl FieldRow for Article {
    fn document(&self) -> &RawDocument {
        &self.document
    }
}

/// An article with its derived columns.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleRow {
    /// Dated article behind this row.
    pub article: Article,
    /// Whitespace token count of the body (`jumlah_kata`).
    pub word_count: usize,
    /// `YYYY-MM` month bucket of the publish date (`bulan`).
    pub month: MonthBucket,
}

impl FieldRow for ArticleRow {
    fn document(&self) -> &RawDocument {
        &self.article.document
    }
}

impl ArticleRow {
    /// Publish timestamp.
    pub fn published_at(&self) -> NaiveDateTime {
        self.article.published_at
    }

    /// Calendar year of the publish date.
    pub fn year(&self) -> i32 {
        self.article.published_at.year()
    }
}

/// Typed accessors shared by every row kind.
pub trait ArticleFields: FieldRow {
    /// Title text; non-string values count as absent.
    fn title(&self) -> Option<&str> {
        self.document().get(FIELD_TITLE).and_then(value_as_text)
    }

    /// Body text (`isi`); non-string values count as absent.
    fn body(&self) -> Option<&str> {
        self.document().get(FIELD_BODY).and_then(value_as_text)
    }

    /// Publisher name (`sumber`).
    fn source_name(&self) -> Option<&str> {
        self.document().get(FIELD_SOURCE).and_then(value_as_text)
    }

    /// Article URL.
    fn link(&self) -> Option<&str> {
        self.document().get(FIELD_LINK).and_then(value_as_text)
    }
}

impl<T: FieldRow> ArticleFields for T {}

/// Column names appended by the derived-field stage, in order.
pub const DERIVED_COLUMNS: [&str; 2] = [FIELD_WORD_COUNT, FIELD_MONTH];
