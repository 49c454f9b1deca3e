use serde::Serialize;

/// Row counts observed after each pipeline stage of one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    /// Documents returned by the store.
    pub loaded: usize,
    /// Rows whose publish date parsed.
    pub dated: usize,
    /// Rows whose body matched a topic keyword.
    pub on_topic: usize,
    /// Rows left after the year/title filters.
    pub filtered: usize,
}

impl StageCounts {
    /// Rows dropped because the publish date was missing or unparsable.
    pub fn dropped_undated(&self) -> usize {
        self.loaded.saturating_sub(self.dated)
    }

    /// Dated rows dropped because no keyword matched.
    pub fn dropped_off_topic(&self) -> usize {
        self.dated.saturating_sub(self.on_topic)
    }

    /// Topical rows hidden by the interactive filters.
    pub fn hidden_by_filters(&self) -> usize {
        self.on_topic.saturating_sub(self.filtered)
    }
}
