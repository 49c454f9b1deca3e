use crate::constants::pipeline::MONTH_BUCKET_FORMAT;
use crate::data::{Article, ArticleFields, ArticleRow, DERIVED_COLUMNS, Table};
use crate::utils::word_count;

/// Append `jumlah_kata` and `bulan` to every row.
///
/// Derived columns already present in the store layout keep their position
/// and take the derived values.
pub fn derive_fields(table: &Table<Article>) -> Table<ArticleRow> {
    let mut columns = table.columns.clone();
    for column in DERIVED_COLUMNS {
        if !columns.iter().any(|existing| existing == column) {
            columns.push(column.to_string());
        }
    }
    let rows = table
        .rows
        .iter()
        .map(|article| ArticleRow {
            word_count: article.body().map(word_count).unwrap_or(0),
            month: article.published_at.format(MONTH_BUCKET_FORMAT).to_string(),
            article: article.clone(),
        })
        .collect();
    Table::new(columns, rows)
}
