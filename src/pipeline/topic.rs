use crate::data::{Article, ArticleFields, Table};
use crate::types::Keyword;

/// Keeps articles whose body mentions at least one topic keyword.
#[derive(Clone, Debug)]
pub struct TopicFilter {
    keywords: Vec<Keyword>,
}

impl TopicFilter {
    /// Build a filter; keywords are lower-cased here.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Configured keywords (lower-cased).
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Whether the lower-cased body contains any keyword.
    pub fn matches(&self, body: &str) -> bool {
        let lowered = body.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }

    /// New table with only on-topic rows. Absent or non-text bodies never match.
    pub fn apply(&self, table: &Table<Article>) -> Table<Article> {
        table.retain_view(|article| article.body().is_some_and(|body| self.matches(body)))
    }
}
