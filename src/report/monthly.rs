use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{ArticleRow, Table};
use crate::types::MonthBucket;

/// Article count for one `YYYY-MM` bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// `YYYY-MM` bucket.
    pub month: MonthBucket,
    /// Articles published in the bucket.
    pub count: usize,
}

/// Count rows per month bucket, in ascending month order.
pub fn monthly_counts(table: &Table<ArticleRow>) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &table.rows {
        *buckets.entry(row.month.as_str()).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(month, count)| MonthlyCount {
            month: month.to_string(),
            count,
        })
        .collect()
}
