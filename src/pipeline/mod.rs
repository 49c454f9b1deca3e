//! Load, normalize, filter, and derive stages of the dashboard.
//!
//! Every render re-runs the full chain from the store:
//! load -> normalize -> topic filter -> derive -> interactive filter -> views.
//! Each stage reads its input table by reference and returns a new table.

use tracing::debug;

use crate::config::PipelineConfig;
use crate::data::{ArticleRow, RawDocument, Table};
use crate::errors::DashboardError;
use crate::export::{ExportArtifact, export_csv};
use crate::metrics::StageCounts;
use crate::report::DashboardReport;
use crate::source::ArticleSource;

/// Publish-date parsing.
pub mod date_helpers;
/// Derived word-count and month columns.
pub mod derive;
/// Year and title filters.
pub mod filter;
/// Publish-date normalization.
pub mod normalize;
/// Keyword topic filter.
pub mod topic;

use derive::derive_fields;
use filter::{DashboardFilters, YearSelection, available_years};
use normalize::normalize;
use topic::TopicFilter;

/// Topical table produced by stages 1 to 4, before user filters.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedTable {
    /// Dated, on-topic rows with derived columns.
    pub table: Table<ArticleRow>,
    /// Row counts up to the topic filter.
    pub counts: StageCounts,
}

impl PreparedTable {
    /// Year selector choices for this table.
    pub fn year_choices(&self) -> Vec<YearSelection> {
        YearSelection::choices(&available_years(&self.table))
    }
}

/// Result of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    /// Rows left after the user filters; every view and the export read this.
    pub filtered: Table<ArticleRow>,
    /// Views computed from `filtered`.
    pub report: DashboardReport,
}

impl DashboardView {
    /// CSV artifact of the full filtered table.
    pub fn export(&self) -> Result<ExportArtifact, DashboardError> {
        export_csv(&self.filtered)
    }
}

/// Dashboard pipeline over an injected article store.
pub struct DashboardPipeline {
    source: Box<dyn ArticleSource>,
    config: PipelineConfig,
    topic: TopicFilter,
}

impl DashboardPipeline {
    /// Build a pipeline, rejecting unusable configuration.
    pub fn new(
        source: impl ArticleSource + 'static,
        config: PipelineConfig,
    ) -> Result<Self, DashboardError> {
        config.validate()?;
        let topic = TopicFilter::new(&config.keywords);
        Ok(Self {
            source: Box::new(source),
            config,
            topic,
        })
    }

    /// Pipeline with default configuration.
    pub fn with_defaults(source: impl ArticleSource + 'static) -> Result<Self, DashboardError> {
        Self::new(source, PipelineConfig::default())
    }

    /// Stage 1: read every document. An empty store is `NoData`.
    pub fn load(&self) -> Result<Table<RawDocument>, DashboardError> {
        let documents = self.source.fetch_all()?;
        if documents.is_empty() {
            return Err(DashboardError::NoData);
        }
        Ok(Table::from_documents(documents))
    }

    /// Stages 1 to 4: load, normalize dates, keep topical rows, derive fields.
    pub fn prepare(&self) -> Result<PreparedTable, DashboardError> {
        let raw = self.load()?;
        let normalized = normalize(&raw);
        let topical = self.topic.apply(&normalized);
        let table = derive_fields(&topical);
        let counts = StageCounts {
            loaded: raw.len(),
            dated: normalized.len(),
            on_topic: table.len(),
            filtered: table.len(),
        };
        debug!(
            source_id = %self.source.id(),
            loaded = counts.loaded,
            dropped_undated = counts.dropped_undated(),
            dropped_off_topic = counts.dropped_off_topic(),
            "prepared topical table"
        );
        Ok(PreparedTable { table, counts })
    }

    /// Full render pass under `filters`.
    pub fn render(&self, filters: &DashboardFilters) -> Result<DashboardView, DashboardError> {
        let prepared = self.prepare()?;
        Ok(self.render_prepared(&prepared, filters))
    }

    /// Stages 5 to 6 over an already prepared table.
    pub fn render_prepared(
        &self,
        prepared: &PreparedTable,
        filters: &DashboardFilters,
    ) -> DashboardView {
        let filtered = filters.apply(&prepared.table);
        let counts = StageCounts {
            filtered: filtered.len(),
            ..prepared.counts
        };
        debug!(
            year = %filters.year,
            search = %filters.search,
            filtered = counts.filtered,
            hidden = counts.hidden_by_filters(),
            "applied dashboard filters"
        );
        let report = DashboardReport::build(
            &filtered,
            filters,
            prepared.year_choices(),
            counts,
            &self.config,
        );
        DashboardView { filtered, report }
    }
}
