#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Reusable CLI runner for the dashboard binary.
pub mod app;
/// Pipeline and word-cloud configuration types.
pub mod config;
/// Centralized constants used across pipeline, report, export, and sources.
pub mod constants;
/// Document, working-table, and article row types.
pub mod data;
/// CSV export of the filtered table.
pub mod export;
/// Per-stage row counts.
pub mod metrics;
/// Load, normalize, filter, and derive stages.
pub mod pipeline;
/// Plain-text dashboard rendering.
pub mod render;
/// Views computed from the filtered table.
pub mod report;
/// Article store trait and built-in stores.
pub mod source;
/// Input transports used by sources (filesystem today).
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Text and JSON value helpers.
pub mod utils;

mod errors;

pub use config::{PipelineConfig, WordCloudConfig};
pub use data::{Article, ArticleFields, ArticleRow, RawDocument, Table};
pub use errors::DashboardError;
pub use export::{ExportArtifact, export_csv};
pub use metrics::StageCounts;
pub use pipeline::filter::{DashboardFilters, YearSelection};
pub use pipeline::{DashboardPipeline, DashboardView, PreparedTable};
pub use report::DashboardReport;
pub use source::{
    ArticleSource, DirectoryCollectionSource, InMemorySource, JsonCollectionSource, StoreLocation,
    open_store,
};
pub use types::{ColumnName, Keyword, MonthBucket, SourceId, StoreUri, Word};
