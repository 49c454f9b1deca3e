use std::collections::BTreeSet;

use crate::constants::pipeline::{
    DEFAULT_HISTOGRAM_BINS, DEFAULT_RECENT_LIMIT, DEFAULT_TOPIC_KEYWORDS,
    DEFAULT_WORD_CLOUD_MAX_WORDS,
};
use crate::errors::DashboardError;
use crate::types::{Keyword, Word};

/// Controls how the word-cloud frequency table is built.
#[derive(Clone, Debug)]
pub struct WordCloudConfig {
    /// Maximum number of ranked words kept.
    pub max_words: usize,
    /// Extra stopwords dropped in addition to the built-in list.
    pub extra_stopwords: BTreeSet<Word>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_WORD_CLOUD_MAX_WORDS,
            extra_stopwords: BTreeSet::new(),
        }
    }
}

impl WordCloudConfig {
    /// Override the ranked-word limit.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Add stopwords (lower-cased) on top of the built-in list.
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }
}

/// Construction-time settings of the dashboard pipeline.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Lower-cased topical keywords; a body must contain at least one.
    pub keywords: Vec<Keyword>,
    /// Number of bins in the word-count histogram.
    pub histogram_bins: usize,
    /// Number of rows kept in the recent-items table.
    pub recent_limit: usize,
    /// Word-cloud frequency settings.
    pub word_cloud: WordCloudConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_TOPIC_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            word_cloud: WordCloudConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Replace the keyword set. Keywords are lower-cased; blanks are dropped.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Override the histogram bin count.
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Override the recent-items row count.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Override word-cloud settings.
    pub fn with_word_cloud(mut self, word_cloud: WordCloudConfig) -> Self {
        self.word_cloud = word_cloud;
        self
    }

    /// Reject settings that would make a stage meaningless.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.keywords.is_empty() {
            return Err(DashboardError::Configuration(
                "at least one topic keyword is required".into(),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(DashboardError::Configuration(
                "histogram_bins must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
