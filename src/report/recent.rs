use serde::Serialize;

use crate::constants::pipeline::DISPLAY_DATE_FORMAT;
use crate::data::{ArticleFields, ArticleRow, Table};

/// One row of the recent-items table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecentItem {
    /// Title, shown under the `Judul` label.
    #[serde(rename = "Judul")]
    pub title: Option<String>,
    /// Publish date formatted `YYYY-MM-DD`.
    pub tanggal_publish: String,
    /// Publisher name.
    pub sumber: Option<String>,
    /// Article URL.
    pub link: Option<String>,
}

/// The `limit` most recent rows, newest first.
///
/// Rows sharing a publish timestamp keep their table order.
pub fn recent_items(table: &Table<ArticleRow>, limit: usize) -> Vec<RecentItem> {
    let mut ordered: Vec<&ArticleRow> = table.rows.iter().collect();
    ordered.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
    ordered
        .into_iter()
        .take(limit)
        .map(|row| RecentItem {
            title: row.title().map(str::to_string),
            tanggal_publish: row
                .published_at()
                .format(DISPLAY_DATE_FORMAT)
                .to_string(),
            sumber: row.source_name().map(str::to_string),
            link: row.link().map(str::to_string),
        })
        .collect()
}
