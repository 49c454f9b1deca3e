use std::io;

use thiserror::Error;

use crate::constants::messages::NO_DATA_MSG;
use crate::types::SourceId;

/// Error type for store access, configuration, and export failures.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The store returned no documents.
    #[error("{}", NO_DATA_MSG)]
    NoData,
    /// The store could not be read at all.
    #[error("article store '{source_id}' is unavailable: {reason}")]
    SourceUnavailable {
        /// Store id.
        source_id: SourceId,
        /// Underlying failure.
        reason: String,
    },
    /// The store payload is not a collection of document objects.
    #[error("article store '{source_id}' returned inconsistent data: {details}")]
    SourceInconsistent {
        /// Store id.
        source_id: SourceId,
        /// Position and nature of the bad payload.
        details: String,
    },
    /// Unusable store URI, filter value, or pipeline setting.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// CSV serialization failed.
    #[error("export failed: {0}")]
    Export(String),
    /// Filesystem failure outside store reads.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Export(err.to_string())
    }
}
