//! Read-only views computed from the filtered working table.

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::data::{ArticleRow, Table};
use crate::metrics::StageCounts;
use crate::pipeline::filter::{DashboardFilters, YearSelection};

/// Word-count histogram and density curve.
pub mod histogram;
/// Monthly article counts.
pub mod monthly;
/// Recent-items table.
pub mod recent;
/// Word-cloud text and frequencies.
pub mod word_cloud;

pub use histogram::{DensityPoint, HistogramBin, WordCountDistribution, word_count_distribution};
pub use monthly::{MonthlyCount, monthly_counts};
pub use recent::{RecentItem, recent_items};
pub use word_cloud::{WordCloudSource, WordFrequency, word_cloud_source};

/// Every view of one render pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardReport {
    /// Filters the views were computed under.
    pub filters: DashboardFilters,
    /// Year selector choices ("all" first, then ascending years).
    pub year_choices: Vec<YearSelection>,
    /// Rows reaching each stage.
    pub counts: StageCounts,
    /// Articles per month bucket.
    pub monthly_counts: Vec<MonthlyCount>,
    /// Distribution of `jumlah_kata`.
    pub word_counts: WordCountDistribution,
    /// Word-cloud input.
    pub word_cloud: WordCloudSource,
    /// Most recent articles.
    pub recent: Vec<RecentItem>,
}

impl DashboardReport {
    /// Compute all views over `filtered`.
    pub fn build(
        filtered: &Table<ArticleRow>,
        filters: &DashboardFilters,
        year_choices: Vec<YearSelection>,
        counts: StageCounts,
        config: &PipelineConfig,
    ) -> Self {
        let word_counts: Vec<usize> = filtered.rows.iter().map(|row| row.word_count).collect();
        Self {
            filters: filters.clone(),
            year_choices,
            counts,
            monthly_counts: monthly_counts(filtered),
            word_counts: word_count_distribution(&word_counts, config.histogram_bins),
            word_cloud: word_cloud_source(filtered, &config.word_cloud),
            recent: recent_items(filtered, config.recent_limit),
        }
    }

    /// Whether the filtered table held no rows.
    pub fn is_empty(&self) -> bool {
        self.counts.filtered == 0
    }
}
