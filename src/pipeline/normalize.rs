use crate::constants::fields::FIELD_PUBLISH_DATE;
use crate::data::{Article, RawDocument, Table};
use crate::pipeline::date_helpers::parse_publish_date;

/// Parse every row's publish date and drop the rows that fail.
///
/// Dropped rows are gone for good; no later stage sees them.
pub fn normalize(table: &Table<RawDocument>) -> Table<Article> {
    let rows = table
        .rows
        .iter()
        .filter_map(|document| {
            let published_at = document.get(FIELD_PUBLISH_DATE).and_then(parse_publish_date)?;
            Some(Article {
                document: document.clone(),
                published_at,
            })
        })
        .collect();
    table.with_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn drops_rows_without_a_parsable_date() {
        let table = Table::from_documents(vec![
            RawDocument::from_pairs([("title", json!("ok")), ("tanggal_publish", json!("2023-01-05"))]),
            RawDocument::from_pairs([("title", json!("bad")), ("tanggal_publish", json!("besok"))]),
            RawDocument::from_pairs([("title", json!("missing"))]),
            RawDocument::from_pairs([("title", json!("null")), ("tanggal_publish", json!(null))]),
        ]);
        let normalized = normalize(&table);
        assert_eq!(normalized.len(), 1);
        let article = &normalized.rows[0];
        assert_eq!(article.document.get("title"), Some(&json!("ok")));
        assert_eq!(article.published_at.year(), 2023);
        assert_eq!(article.published_at.hour(), 0);
        assert_eq!(normalized.columns, table.columns);
    }

    #[test]
    fn empty_input_stays_empty() {
        let table = Table::from_documents(vec![RawDocument::from_pairs([(
            "tanggal_publish",
            json!("n/a"),
        )])]);
        assert!(normalize(&table).is_empty());
    }
}
