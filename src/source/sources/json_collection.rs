use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::data::RawDocument;
use crate::errors::DashboardError;
use crate::source::{ArticleSource, source_id_for_path};
use crate::types::SourceId;

/// Collection exported to a single file.
///
/// A file whose first non-whitespace byte is `[` is read as a JSON array of
/// documents; anything else is read as JSON Lines (one document per line,
/// blank lines ignored), which is what `mongoexport` writes by default.
pub struct JsonCollectionSource {
    id: SourceId,
    path: PathBuf,
}

impl JsonCollectionSource {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: source_id_for_path(&path),
            path,
        }
    }

    /// Override the source id.
    pub fn with_id(mut self, id: impl Into<SourceId>) -> Self {
        self.id = id.into();
        self
    }

    fn parse_array(&self, payload: &str) -> Result<Vec<RawDocument>, DashboardError> {
        let values: Vec<Value> =
            serde_json::from_str(payload).map_err(|err| DashboardError::SourceInconsistent {
                source_id: self.id.clone(),
                details: format!("invalid JSON array collection: {err}"),
            })?;
        values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| self.document_from(value, || format!("array element {idx}")))
            .collect()
    }

    fn parse_lines(&self, payload: &str) -> Result<Vec<RawDocument>, DashboardError> {
        let mut documents = Vec::new();
        for (idx, line) in payload.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value: Value =
                serde_json::from_str(line).map_err(|err| DashboardError::SourceInconsistent {
                    source_id: self.id.clone(),
                    details: format!("invalid JSON on line {}: {err}", idx + 1),
                })?;
            documents.push(self.document_from(value, || format!("line {}", idx + 1))?);
        }
        Ok(documents)
    }

    fn document_from(
        &self,
        value: Value,
        position: impl FnOnce() -> String,
    ) -> Result<RawDocument, DashboardError> {
        match value {
            Value::Object(map) => Ok(RawDocument {
                fields: map.into_iter().collect(),
            }),
            other => Err(DashboardError::SourceInconsistent {
                source_id: self.id.clone(),
                details: format!(
                    "{} is not a document object (found {})",
                    position(),
                    json_kind(&other)
                ),
            }),
        }
    }
}

impl ArticleSource for JsonCollectionSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch_all(&self) -> Result<Vec<RawDocument>, DashboardError> {
        let payload =
            std::fs::read_to_string(&self.path).map_err(|err| DashboardError::SourceUnavailable {
                source_id: self.id.clone(),
                reason: format!("failed reading {}: {err}", self.path.display()),
            })?;
        let documents = if payload.trim_start().starts_with('[') {
            self.parse_array(&payload)?
        } else {
            self.parse_lines(&payload)?
        };
        info!(
            source_id = %self.id,
            path = %self.path.display(),
            documents = documents.len(),
            "loaded article collection"
        );
        Ok(documents)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
