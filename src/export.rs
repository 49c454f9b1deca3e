//! CSV export of the filtered working table.

use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Timelike};
use tracing::info;

use crate::constants::export::{
    EXPORT_DATE_FORMAT, EXPORT_DATETIME_FORMAT, EXPORT_DATETIME_MICROS_FORMAT, EXPORT_FILENAME,
    EXPORT_MEDIA_TYPE,
};
use crate::constants::fields::{FIELD_MONTH, FIELD_PUBLISH_DATE, FIELD_WORD_COUNT};
use crate::data::{ArticleRow, Table};
use crate::errors::DashboardError;
use crate::utils::value_to_cell;

/// Downloadable export payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested download filename.
    pub filename: &'static str,
    /// MIME type of `bytes`.
    pub media_type: &'static str,
    /// UTF-8 CSV payload.
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Payload as UTF-8 text.
    pub fn as_str(&self) -> Result<&str, DashboardError> {
        std::str::from_utf8(&self.bytes).map_err(|err| DashboardError::Export(err.to_string()))
    }

    /// Write the payload to `target`.
    ///
    /// When `target` is an existing directory the fixed filename is used inside
    /// it. Returns the path written.
    pub fn write_to(&self, target: &Path) -> Result<PathBuf, DashboardError> {
        let path = if target.is_dir() {
            target.join(self.filename)
        } else {
            target.to_path_buf()
        };
        std::fs::write(&path, &self.bytes)?;
        info!(
            path = %path.display(),
            bytes = self.bytes.len(),
            "wrote export artifact"
        );
        Ok(path)
    }
}

/// Serialize every column of `table` as CSV with a header row.
///
/// Publish dates render as `YYYY-MM-DD` when every row sits at midnight,
/// as `YYYY-MM-DD HH:MM:SS.ffffff` when any row has fractional seconds, and
/// as `YYYY-MM-DD HH:MM:SS` otherwise. An empty table yields a header-only
/// payload.
pub fn export_csv(table: &Table<ArticleRow>) -> Result<ExportArtifact, DashboardError> {
    let date_format = export_date_format(table);

    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| cell_for(row, column, date_format))
            .collect();
        writer.write_record(&record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| DashboardError::Export(err.to_string()))?;
    Ok(ExportArtifact {
        filename: EXPORT_FILENAME,
        media_type: EXPORT_MEDIA_TYPE,
        bytes,
    })
}

fn export_date_format(table: &Table<ArticleRow>) -> &'static str {
    let times = || table.rows.iter().map(|row| row.published_at().time());
    if times().all(|time| time == NaiveTime::MIN) {
        EXPORT_DATE_FORMAT
    } else if times().any(|time| time.nanosecond() != 0) {
        EXPORT_DATETIME_MICROS_FORMAT
    } else {
        EXPORT_DATETIME_FORMAT
    }
}

fn cell_for(row: &ArticleRow, column: &str, date_format: &str) -> String {
    match column {
        FIELD_PUBLISH_DATE => row.published_at().format(date_format).to_string(),
        FIELD_WORD_COUNT => row.word_count.to_string(),
        FIELD_MONTH => row.month.clone(),
        _ => row
            .article
            .document
            .get(column)
            .map(value_to_cell)
            .unwrap_or_default(),
    }
}
